use crate::core::models::diff_report::{DiffEntry, DiffGroup, DiffReport, DiffStatus};
use crate::core::models::plugin_group::is_plugin_toggle;
use crate::core::models::profile::Profile;
use crate::core::services::grouping_service::PluginGrouper;

/// Classifies settings of one profile against another.
pub struct DiffService;

impl DiffService {
    /// Classify one setting against the other profile.
    ///
    /// With no other profile there is nothing to compare: `Normal`.
    /// Plugin toggle keys get their own status when values differ,
    /// because flipping a plugin on or off is a different kind of
    /// change than editing an arbitrary setting.
    pub fn classify(&self, key: &str, value: &str, other: Option<&Profile>) -> DiffStatus {
        let Some(other) = other else {
            return DiffStatus::Normal;
        };

        match other.get(key) {
            None => DiffStatus::Unique,
            Some(other_value) if other_value != value => {
                if is_plugin_toggle(key) {
                    DiffStatus::PluginStateChange
                } else {
                    DiffStatus::Different
                }
            }
            Some(_) => DiffStatus::Same,
        }
    }

    /// Human-readable explanation for a classified setting.
    ///
    /// Empty for `Same` and `Normal`; the UI has nothing to explain
    /// when there is no difference.
    pub fn status_text(
        &self,
        key: &str,
        value: &str,
        status: DiffStatus,
        other: Option<&Profile>,
    ) -> String {
        match status {
            DiffStatus::Unique => "Only in this profile".to_string(),
            DiffStatus::Different => {
                let other_value = other.and_then(|o| o.get(key)).unwrap_or_default();
                format!("Other profile value: {other_value}")
            }
            DiffStatus::PluginStateChange => {
                let this_enabled = value == "true";
                let other_enabled = other.and_then(|o| o.get(key)) == Some("true");
                format!(
                    "{} here, {} in other profile",
                    if this_enabled { "Enabled" } else { "Disabled" },
                    if other_enabled { "enabled" } else { "disabled" },
                )
            }
            DiffStatus::Same | DiffStatus::Normal => String::new(),
        }
    }

    /// Classify every setting of `profile` against `other`, grouped by
    /// plugin in grouper order.
    ///
    /// One-sided: keys unique to `other` do not appear. Callers wanting
    /// both directions compute a second report with the sides swapped.
    pub fn report(
        &self,
        profile: &Profile,
        other: &Profile,
        profile_name: &str,
        other_name: &str,
    ) -> DiffReport {
        let grouper = PluginGrouper;
        let groups = grouper
            .group(profile)
            .into_iter()
            .map(|group| DiffGroup {
                entries: group
                    .settings
                    .iter()
                    .map(|setting| {
                        let status = self.classify(&setting.key, &setting.value, Some(other));
                        let note = match status {
                            DiffStatus::Same | DiffStatus::Normal => None,
                            _ => Some(self.status_text(
                                &setting.key,
                                &setting.value,
                                status,
                                Some(other),
                            )),
                        };
                        DiffEntry {
                            key: setting.key.clone(),
                            value: setting.value.clone(),
                            status,
                            note,
                        }
                    })
                    .collect(),
                name: group.name,
            })
            .collect();

        DiffReport {
            profile_name: profile_name.to_string(),
            other_name: other_name.to_string(),
            groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(pairs: &[(&str, &str)]) -> Profile {
        let mut profile = Profile::new();
        for (k, v) in pairs {
            profile.insert(*k, *v);
        }
        profile
    }

    #[test]
    fn no_other_profile_is_normal() {
        let svc = DiffService;
        assert_eq!(svc.classify("a.x", "1", None), DiffStatus::Normal);
        assert_eq!(svc.status_text("a.x", "1", DiffStatus::Normal, None), "");
    }

    #[test]
    fn absent_key_is_unique() {
        let svc = DiffService;
        let other = make_profile(&[("b.y", "2")]);

        assert_eq!(svc.classify("a.x", "1", Some(&other)), DiffStatus::Unique);
        assert_eq!(
            svc.status_text("a.x", "1", DiffStatus::Unique, Some(&other)),
            "Only in this profile"
        );
    }

    #[test]
    fn differing_value_is_different() {
        let svc = DiffService;
        let other = make_profile(&[("a.x", "2")]);

        assert_eq!(svc.classify("a.x", "1", Some(&other)), DiffStatus::Different);
        assert_eq!(
            svc.status_text("a.x", "1", DiffStatus::Different, Some(&other)),
            "Other profile value: 2"
        );
    }

    #[test]
    fn equal_value_is_same() {
        let svc = DiffService;
        let other = make_profile(&[("a.x", "1")]);

        assert_eq!(svc.classify("a.x", "1", Some(&other)), DiffStatus::Same);
        assert_eq!(svc.status_text("a.x", "1", DiffStatus::Same, Some(&other)), "");
    }

    #[test]
    fn toggle_key_differences_are_state_changes() {
        let svc = DiffService;
        let other = make_profile(&[("runelite.exampleplugin", "false")]);

        let status = svc.classify("runelite.exampleplugin", "true", Some(&other));
        assert_eq!(status, DiffStatus::PluginStateChange);
        assert_eq!(
            svc.status_text("runelite.exampleplugin", "true", status, Some(&other)),
            "Enabled here, disabled in other profile"
        );
    }

    #[test]
    fn toggle_state_text_both_directions() {
        let svc = DiffService;
        let other = make_profile(&[("runelite.exampleplugin", "true")]);

        assert_eq!(
            svc.status_text(
                "runelite.exampleplugin",
                "false",
                DiffStatus::PluginStateChange,
                Some(&other),
            ),
            "Disabled here, enabled in other profile"
        );
    }

    #[test]
    fn absent_toggle_key_is_unique_not_state_change() {
        let svc = DiffService;
        let other = make_profile(&[("b.y", "2")]);

        assert_eq!(
            svc.classify("runelite.exampleplugin", "true", Some(&other)),
            DiffStatus::Unique
        );
    }

    #[test]
    fn equal_toggle_value_is_same() {
        let svc = DiffService;
        let other = make_profile(&[("runelite.exampleplugin", "true")]);

        assert_eq!(
            svc.classify("runelite.exampleplugin", "true", Some(&other)),
            DiffStatus::Same
        );
    }

    #[test]
    fn unique_is_one_sided() {
        let svc = DiffService;
        let a = make_profile(&[("a.x", "1"), ("shared.k", "s")]);
        let b = make_profile(&[("shared.k", "s")]);

        // From a's perspective the key is unique
        assert_eq!(svc.classify("a.x", "1", Some(&b)), DiffStatus::Unique);

        // From b's perspective the key never comes up at all
        let report = svc.report(&b, &a, "b", "a");
        assert!(report.keys_with(DiffStatus::Unique).is_empty());
    }

    #[test]
    fn report_groups_and_notes() {
        let svc = DiffService;
        let a = make_profile(&[
            ("runelite.exampleplugin", "true"),
            ("example.color", "red"),
            ("solo.key", "x"),
        ]);
        let b = make_profile(&[
            ("runelite.exampleplugin", "false"),
            ("example.color", "red"),
        ]);

        let report = svc.report(&a, &b, "a.properties", "b.properties");
        assert_eq!(report.profile_name, "a.properties");
        assert_eq!(report.other_name, "b.properties");

        // example group sorts first (enabled, 2 settings), solo after
        assert_eq!(report.groups[0].name, "example");
        assert_eq!(report.count(DiffStatus::PluginStateChange), 1);
        assert_eq!(report.count(DiffStatus::Same), 1);
        assert_eq!(report.count(DiffStatus::Unique), 1);
        assert_eq!(report.keys_with(DiffStatus::Unique), vec!["solo.key"]);

        let toggle_entry = report.groups[0]
            .entries
            .iter()
            .find(|e| e.key == "runelite.exampleplugin")
            .unwrap();
        assert_eq!(
            toggle_entry.note.as_deref(),
            Some("Enabled here, disabled in other profile")
        );
    }

    #[test]
    fn identical_profiles_report_unchanged() {
        let svc = DiffService;
        let a = make_profile(&[("a.x", "1"), ("b.y", "2")]);

        let report = svc.report(&a, &a.clone(), "a", "a-copy");
        assert!(report.is_unchanged());
    }
}
