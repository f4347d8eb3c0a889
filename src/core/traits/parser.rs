use crate::core::models::profile::Profile;

/// Port for parsing and serializing profile files.
///
/// Only the `.properties` format ships today; the trait keeps the
/// format concern out of the core services.
pub trait ProfileParser: Send + Sync {
    /// Parse raw file content into a `Profile`.
    ///
    /// Best-effort by contract: malformed lines are skipped, never
    /// reported. The worst input yields an empty profile.
    fn parse(&self, content: &str) -> Profile;

    /// Serialize a profile back to `key=value` lines, one per entry,
    /// each newline-terminated.
    fn serialize(&self, profile: &Profile) -> String;

    /// File extensions this parser handles (e.g. `[".properties"]`).
    fn supported_extensions(&self) -> &[&str];
}
