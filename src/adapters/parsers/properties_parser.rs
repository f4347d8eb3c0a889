use crate::core::models::profile::Profile;
use crate::core::traits::parser::ProfileParser;

/// Parses and serializes RuneLite `.properties` exports.
///
/// Supported input:
/// - `key=value` entries, first `=` is the delimiter
/// - Comment lines (`# ...`)
/// - Blank lines
/// - Duplicate keys (last occurrence wins)
///
/// Anything else (lines without `=`, entries with an empty key or an
/// empty value after trimming) is dropped silently. There is no
/// escaping of `=` inside values.
pub struct PropertiesParser;

impl ProfileParser for PropertiesParser {
    fn parse(&self, content: &str) -> Profile {
        let mut profile = Profile::new();

        for raw in content.lines() {
            if raw.is_empty() || raw.starts_with('#') {
                continue;
            }

            let Some((key, value)) = raw.split_once('=') else {
                continue;
            };

            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }

            profile.insert(key, value);
        }

        profile
    }

    fn serialize(&self, profile: &Profile) -> String {
        let mut output = String::new();
        for setting in profile.iter() {
            output.push_str(&setting.key);
            output.push('=');
            output.push_str(&setting.value);
            output.push('\n');
        }
        output
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".properties"]
    }
}
