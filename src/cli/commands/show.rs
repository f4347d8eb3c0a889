use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::adapters::parsers::properties_parser::PropertiesParser;
use crate::cli::commands::{filter_helpers, load_helpers};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::grouping_service::PluginGrouper;

/// Execute the `rlmerge show` command.
///
/// Parses one profile and displays its plugin groups in grouper order:
/// enabled plugins first, then by settings count, then by name.
pub fn execute(file: &str, filter: Option<&str>, json: bool) -> Result<()> {
    let parser = PropertiesParser;
    let profile = load_helpers::load_profile(Path::new(file), &parser)?;
    let profile = match filter {
        Some(term) => filter_helpers::filter_profile(&profile, term),
        None => profile,
    };

    let grouper = PluginGrouper;
    let groups = grouper.group(&profile);

    if json {
        let payload = json!({
            "profile": file,
            "settings": profile.len(),
            "plugins": groups
                .iter()
                .map(|g| {
                    json!({
                        "name": g.name,
                        "count": g.len(),
                        "enabled": g.toggle_value().map(|v| v == "true"),
                        "settings": g.settings,
                    })
                })
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    output::header(&format!(
        "{file} — {} settings in {} plugins",
        profile.len(),
        groups.len()
    ));

    for group in &groups {
        let state = if group.has_toggle() {
            if group.is_enabled() {
                format!(" ({})", "enabled".green())
            } else {
                format!(" ({})", "disabled".dimmed())
            }
        } else {
            String::new()
        };
        println!(
            "\n  {} ({} settings){state}",
            group.name.bold(),
            group.len()
        );

        for setting in group.settings.iter() {
            println!(
                "    {} = {}",
                setting.key,
                output::truncate(&setting.value, 60).dimmed()
            );
        }
    }

    Ok(())
}
