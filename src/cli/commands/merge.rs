use std::path::Path;

use chrono::Utc;

use crate::adapters::parsers::properties_parser::PropertiesParser;
use crate::cli::commands::load_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::session::{MergeSession, ProfileSlot};
use crate::core::services::grouping_service::PluginGrouper;
use crate::core::services::merge_service::MergeService;

/// Selection flags for one side of the merge.
pub struct SelectionArgs<'a> {
    /// Individual keys.
    pub select: &'a [String],
    /// Plugin group names; each expands to the group's keys.
    pub plugins: &'a [String],
    /// Take every setting from this side.
    pub all: bool,
}

/// Execute the `rlmerge merge` command.
///
/// Loads both profiles into a session, applies the selection flags per
/// side, merges with profile 2 winning conflicts, and writes the
/// result with the standard export header.
pub fn execute(
    file1: &str,
    file2: &str,
    selection1: &SelectionArgs,
    selection2: &SelectionArgs,
    output_path: &str,
) -> Result<()> {
    let parser = PropertiesParser;
    let profile1 = load_helpers::load_profile(Path::new(file1), &parser)?;
    let profile2 = load_helpers::load_profile(Path::new(file2), &parser)?;

    output::header(&format!("Merging {file1} + {file2}"));

    let mut session = MergeSession::new();
    session.load_first(file1, profile1);
    session.load_second(file2, profile2);

    if let Some(slot) = session.first_mut() {
        apply_selection(slot, selection1);
    }
    if let Some(slot) = session.second_mut() {
        apply_selection(slot, selection2);
    }

    let svc = MergeService;
    let merged = svc.merge(&session)?;

    let from_first = surviving(session.first());
    let from_second = surviving(session.second());
    let overridden = from_first + from_second - merged.len();

    let content = svc.render(&merged, &parser, Utc::now());
    std::fs::write(output_path, &content)?;

    output::success(&format!(
        "Merged {} settings ({from_first} from profile 1, {from_second} from profile 2, {overridden} overridden)",
        merged.len()
    ));
    output::success(&format!("Written to {output_path}"));

    Ok(())
}

/// Expand one side's selection flags into its SelectionSet.
///
/// Order matters for the output file: select-all first, then plugin
/// groups in the order given, then individual keys. The SelectionSet
/// drops duplicates, so overlapping flags are harmless.
fn apply_selection(slot: &mut ProfileSlot, args: &SelectionArgs) {
    if args.all {
        let keys: Vec<String> = slot.profile.keys().map(str::to_string).collect();
        for key in keys {
            slot.selection.insert(key);
        }
    }

    if !args.plugins.is_empty() {
        let grouper = PluginGrouper;
        let groups = grouper.group(&slot.profile);
        for name in args.plugins {
            match groups.iter().find(|g| g.name.eq_ignore_ascii_case(name)) {
                Some(group) => {
                    for setting in group.settings.iter() {
                        slot.selection.insert(setting.key.clone());
                    }
                }
                None => output::warning(&format!("No plugin named '{name}' in {}", slot.name)),
            }
        }
    }

    // Keys that turn out to be absent from the profile stay in the
    // selection and are skipped at merge time.
    for key in args.select {
        slot.selection.insert(key.clone());
    }
}

/// How many of a side's selected keys actually exist in its profile.
fn surviving(slot: Option<&ProfileSlot>) -> usize {
    slot.map(|s| {
        s.selection
            .iter()
            .filter(|key| s.profile.contains_key(key))
            .count()
    })
    .unwrap_or(0)
}
