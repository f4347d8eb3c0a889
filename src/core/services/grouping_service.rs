use std::collections::HashMap;

use crate::core::models::plugin_group::{PluginGroup, toggle_plugin_name};
use crate::core::models::profile::Profile;

/// Fallback group for keys that name no plugin.
const OTHER_GROUP: &str = "other";

/// Partitions a profile's settings into plugin groups and orders them.
///
/// Assignment rules:
/// - A toggle key `runelite.<name>plugin` belongs to group `<name>`,
///   so a plugin's on/off switch always sits with its own settings.
/// - Any other key belongs to the group named by the segment before
///   its first `.`; keys without a `.` (or with an empty leading
///   segment) fall into `other`.
///
/// Group order: enabled plugins first, then settings count descending,
/// then name ascending. A pure function of the profile's contents:
/// the same settings always produce the same groups in the same order.
pub struct PluginGrouper;

impl PluginGrouper {
    pub fn group(&self, profile: &Profile) -> Vec<PluginGroup> {
        let mut groups: Vec<PluginGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for setting in profile.iter() {
            let name = Self::group_name_for(&setting.key);
            let idx = match index.get(&name) {
                Some(&idx) => idx,
                None => {
                    index.insert(name.clone(), groups.len());
                    groups.push(PluginGroup::new(name));
                    groups.len() - 1
                }
            };
            groups[idx].settings.insert(&setting.key, &setting.value);
        }

        // Precompute the enabled flag so the comparator stays cheap and total
        let mut keyed: Vec<(bool, usize, PluginGroup)> = groups
            .into_iter()
            .map(|g| (g.is_enabled(), g.len(), g))
            .collect();

        keyed.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then(b.1.cmp(&a.1))
                .then_with(|| a.2.name.cmp(&b.2.name))
        });

        keyed.into_iter().map(|(_, _, g)| g).collect()
    }

    /// The group a single key belongs to.
    pub fn group_name_for(key: &str) -> String {
        if let Some(name) = toggle_plugin_name(key) {
            return name.to_string();
        }

        match key.split_once('.') {
            Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
            _ => OTHER_GROUP.to_string(),
        }
    }
}
