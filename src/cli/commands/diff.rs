use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::adapters::parsers::properties_parser::PropertiesParser;
use crate::cli::commands::{filter_helpers, load_helpers};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::diff_report::{DiffReport, DiffStatus};
use crate::core::services::diff_service::DiffService;

/// Execute the `rlmerge diff` command.
///
/// Classifies every setting of the first profile against the second,
/// prints the changed entries grouped by plugin, then the keys that
/// exist only in the second profile, then a summary count line.
pub fn execute(file1: &str, file2: &str, filter: Option<&str>, json: bool) -> Result<()> {
    let parser = PropertiesParser;
    let mut left = load_helpers::load_profile(Path::new(file1), &parser)?;
    let mut right = load_helpers::load_profile(Path::new(file2), &parser)?;

    if let Some(term) = filter {
        left = filter_helpers::filter_profile(&left, term);
        right = filter_helpers::filter_profile(&right, term);
    }

    let svc = DiffService;
    let left_report = svc.report(&left, &right, file1, file2);
    let right_report = svc.report(&right, &left, file2, file1);

    if json {
        let payload = json!({ "left": left_report, "right": right_report });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    output::header(&format!("🔍 rlmerge diff — {file1} vs {file2}"));

    if left_report.is_unchanged() && right_report.is_unchanged() {
        output::success("No differences found");
        return Ok(());
    }

    print_legend();
    print_changes(&left_report);
    print_unique_to_other(&right_report);
    print_summary(&left_report, &right_report);

    Ok(())
}

/// Explain the color coding once, above the entries.
fn print_legend() {
    println!("  {} Only in this profile", "■".blue());
    println!("  {} Different value in other profile", "■".yellow());
    println!("  {} Plugin enabled/disabled differently", "■".magenta());
}

/// Print the changed entries of the first profile, grouped by plugin.
/// Groups and entries that match the other profile exactly are elided.
fn print_changes(report: &DiffReport) {
    for group in report.groups.iter().filter(|g| g.has_changes()) {
        println!("\n  {}", group.name.bold());

        for entry in group.entries.iter().filter(|e| e.status != DiffStatus::Same) {
            let line = format!("{} = {}", entry.key, output::truncate(&entry.value, 40));
            let line = match entry.status {
                DiffStatus::Unique => line.blue(),
                DiffStatus::Different => line.yellow(),
                DiffStatus::PluginStateChange => line.magenta(),
                DiffStatus::Same | DiffStatus::Normal => line.normal(),
            };
            println!("    {line}");

            if let Some(note) = &entry.note {
                println!("      {}", note.dimmed().italic());
            }
        }
    }
}

/// The one-sided report over the first profile never mentions keys it
/// does not have; list the second profile's own keys here.
fn print_unique_to_other(report: &DiffReport) {
    let unique = report.keys_with(DiffStatus::Unique);
    if unique.is_empty() {
        return;
    }

    println!("\n  {}", format!("Only in {}", report.profile_name).bold());
    for key in unique {
        println!("    {}", key.blue());
    }
}

/// Print a summary line below the listing.
fn print_summary(left: &DiffReport, right: &DiffReport) {
    let unique_left = left.count(DiffStatus::Unique);
    let unique_right = right.count(DiffStatus::Unique);
    let different = left.count(DiffStatus::Different);
    let toggled = left.count(DiffStatus::PluginStateChange);
    let same = left.count(DiffStatus::Same);

    let mut parts = Vec::new();
    if unique_left > 0 {
        parts.push(format!("{unique_left} only in {}", left.profile_name));
    }
    if unique_right > 0 {
        parts.push(format!("{unique_right} only in {}", right.profile_name));
    }
    if different > 0 {
        parts.push(format!("{different} different"));
    }
    if toggled > 0 {
        parts.push(format!("{toggled} plugin toggled"));
    }
    parts.push(format!("{same} unchanged"));

    println!();
    output::success(&parts.join(", "));
}
