use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::errors::{Result, RlmergeError};
use crate::core::models::profile::Profile;
use crate::core::models::session::MergeSession;
use crate::core::traits::parser::ProfileParser;

/// First comment line of every merged file.
pub const HEADER_COMMENT: &str = "#RuneLite configuration";

/// Default name for the merged output file.
pub const DEFAULT_OUTPUT: &str = "merged-runelite.properties";

/// Combines the two selections of a session into one profile.
pub struct MergeService;

impl MergeService {
    /// Merge the session's selected settings into a single profile.
    ///
    /// Selection 1's surviving keys are written first in selection
    /// order, then selection 2's; on conflict profile 2's value wins
    /// while the key keeps its original position. This second-writer-
    /// wins precedence is fixed, not configurable.
    ///
    /// Selected keys missing from their source profile are skipped
    /// silently: a selection assembled against an older upload is
    /// stale, not wrong.
    ///
    /// # Errors
    ///
    /// `MissingProfile` when either side of the session is not loaded.
    /// An empty result from two loaded profiles is not an error.
    pub fn merge(&self, session: &MergeSession) -> Result<Profile> {
        let first = session.first().ok_or_else(|| RlmergeError::MissingProfile {
            side: "profile 1".to_string(),
        })?;
        let second = session.second().ok_or_else(|| RlmergeError::MissingProfile {
            side: "profile 2".to_string(),
        })?;

        let mut merged = Profile::new();

        for key in first.selection.iter() {
            if let Some(value) = first.profile.get(key) {
                merged.insert(key, value);
            }
        }

        for key in second.selection.iter() {
            if let Some(value) = second.profile.get(key) {
                merged.insert(key, value);
            }
        }

        Ok(merged)
    }

    /// Render a merged profile to exportable text: the fixed header
    /// comment, a sortable UTC timestamp comment, then one `key=value`
    /// line per entry in merge order.
    ///
    /// The timestamp is a parameter so output stays reproducible under
    /// test.
    pub fn render(
        &self,
        merged: &Profile,
        parser: &dyn ProfileParser,
        generated_at: DateTime<Utc>,
    ) -> String {
        let mut output = String::new();
        output.push_str(HEADER_COMMENT);
        output.push('\n');
        output.push('#');
        output.push_str(&generated_at.to_rfc3339_opts(SecondsFormat::Millis, true));
        output.push('\n');
        output.push_str(&parser.serialize(merged));
        output
    }
}
