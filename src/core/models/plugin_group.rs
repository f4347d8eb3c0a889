use super::profile::Profile;

/// Prefix and suffix that mark a plugin's enable/disable toggle key,
/// e.g. `runelite.grounditemsplugin`.
const TOGGLE_PREFIX: &str = "runelite.";
const TOGGLE_SUFFIX: &str = "plugin";

/// Returns the plugin name embedded in a toggle key, or `None` when
/// the key is not a toggle key.
///
/// `runelite.grounditemsplugin` → `Some("grounditems")`.
pub fn toggle_plugin_name(key: &str) -> Option<&str> {
    key.strip_prefix(TOGGLE_PREFIX)?.strip_suffix(TOGGLE_SUFFIX)
}

/// Whether the key is a plugin enable/disable toggle.
pub fn is_plugin_toggle(key: &str) -> bool {
    toggle_plugin_name(key).is_some()
}

/// A named cluster of settings owned by one plugin.
///
/// Groups partition a profile's keys completely: every key belongs to
/// exactly one group.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginGroup {
    pub name: String,
    pub settings: Profile,
}

impl PluginGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: Profile::new(),
        }
    }

    /// The key that would hold this plugin's enabled state.
    pub fn toggle_key(&self) -> String {
        format!("{TOGGLE_PREFIX}{}{TOGGLE_SUFFIX}", self.name.to_lowercase())
    }

    /// The toggle key's value, if the group carries one.
    pub fn toggle_value(&self) -> Option<&str> {
        self.settings.get(&self.toggle_key())
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle_value().is_some()
    }

    /// A plugin counts as enabled only when its toggle key is present
    /// with the literal value "true".
    pub fn is_enabled(&self) -> bool {
        self.toggle_value() == Some("true")
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}
