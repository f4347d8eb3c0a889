use serde::Serialize;

/// Classification of one key's relationship between two profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiffStatus {
    /// No second profile to compare against.
    Normal,
    /// Present in both profiles with equal values.
    Same,
    /// Present in both profiles with different values.
    Different,
    /// Present only in the profile under inspection.
    Unique,
    /// A plugin toggle key whose value differs, i.e. the plugin is
    /// enabled on one side and disabled on the other.
    PluginStateChange,
}

/// One classified setting in a diff report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    pub key: String,
    pub value: String,
    pub status: DiffStatus,
    /// Human-readable explanation; absent for unchanged settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One plugin group's classified settings, in group-internal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffGroup {
    pub name: String,
    pub entries: Vec<DiffEntry>,
}

impl DiffGroup {
    /// Whether any entry in this group differs from the other profile.
    pub fn has_changes(&self) -> bool {
        self.entries.iter().any(|e| e.status != DiffStatus::Same)
    }
}

/// Result of classifying every setting of one profile against another.
///
/// One-sided: keys present only in `other_name`'s profile do not
/// appear. Compute a second report with the sides swapped for the full
/// picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffReport {
    pub profile_name: String,
    pub other_name: String,
    pub groups: Vec<DiffGroup>,
}

impl DiffReport {
    /// Number of entries with the given status.
    pub fn count(&self, status: DiffStatus) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .filter(|e| e.status == status)
            .count()
    }

    /// Keys with the given status, in report order.
    pub fn keys_with(&self, status: DiffStatus) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .filter(|e| e.status == status)
            .map(|e| e.key.as_str())
            .collect()
    }

    /// True when every setting matched the other profile exactly.
    pub fn is_unchanged(&self) -> bool {
        self.groups.iter().all(|g| !g.has_changes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> DiffReport {
        DiffReport {
            profile_name: "a.properties".to_string(),
            other_name: "b.properties".to_string(),
            groups: vec![DiffGroup {
                name: "example".to_string(),
                entries: vec![
                    DiffEntry {
                        key: "example.color".to_string(),
                        value: "red".to_string(),
                        status: DiffStatus::Different,
                        note: Some("Other profile value: blue".to_string()),
                    },
                    DiffEntry {
                        key: "example.size".to_string(),
                        value: "3".to_string(),
                        status: DiffStatus::Same,
                        note: None,
                    },
                ],
            }],
        }
    }

    #[test]
    fn counts_by_status() {
        let report = make_report();
        assert_eq!(report.count(DiffStatus::Different), 1);
        assert_eq!(report.count(DiffStatus::Same), 1);
        assert_eq!(report.count(DiffStatus::Unique), 0);
        assert!(!report.is_unchanged());
    }

    #[test]
    fn keys_with_status() {
        let report = make_report();
        assert_eq!(report.keys_with(DiffStatus::Different), vec!["example.color"]);
    }

    #[test]
    fn status_serializes_in_camel_case() {
        let json = serde_json::to_string(&DiffStatus::PluginStateChange).unwrap();
        assert_eq!(json, "\"pluginStateChange\"");
        let json = serde_json::to_string(&DiffStatus::Same).unwrap();
        assert_eq!(json, "\"same\"");
    }
}
