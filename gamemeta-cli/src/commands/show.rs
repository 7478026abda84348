use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamemeta_core::{DefaultRecords, MetadataNode, MetadataTree, Record};
use gamemeta_xml::GameList;
use gamemeta_xml::gamelist::PATH_KEY;

use crate::error::CliError;

/// Print the entries of a gamelist, or the one entry at `path`.
pub(crate) fn run_show(
    gamelist: &Path,
    base: &Path,
    path: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let list = GameList::load(gamelist)?;
    let defaults = DefaultRecords::shared();

    let nodes: Vec<&MetadataNode> = match path {
        Some(p) => vec![
            list.find_by_path(p, base)
                .ok_or_else(|| CliError::not_found(format!("No entry with path '{p}'")))?,
        ],
        None => list.entries().iter().collect(),
    };

    let mut records = Vec::with_capacity(nodes.len());
    for node in &nodes {
        records.push(Record::from_tree(*node, base, defaults)?);
    }

    if json {
        let mut entries = Vec::with_capacity(records.len());
        for (node, record) in nodes.iter().zip(&records) {
            entries.push(entry_json(node, record, defaults)?);
        }
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| CliError::other(format!("JSON encoding failed: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    log::info!(
        "{} ({} entries)",
        gamelist.display().if_supports_color(Stdout, |t| t.bold()),
        records.len(),
    );
    for (node, record) in nodes.iter().zip(&records) {
        log::info!("");
        log::info!(
            "{} {}",
            record.name().if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", record.kind()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        if let Some(p) = node.value(PATH_KEY) {
            log::info!(
                "  {:<12} {}",
                PATH_KEY,
                p.if_supports_color(Stdout, |t| t.cyan())
            );
        }
        for descriptor in record.kind().fields() {
            if descriptor.key() == "name" || record.is_default(descriptor.field(), defaults) {
                continue;
            }
            let value = record.value_as_string(descriptor.key())?;
            log::info!("  {:<12} {}", descriptor.display_name(), value);
        }
    }
    Ok(())
}

fn entry_json(
    node: &MetadataNode,
    record: &Record,
    defaults: &DefaultRecords,
) -> Result<serde_json::Value, CliError> {
    let mut fields = serde_json::Map::new();
    for descriptor in record.kind().fields() {
        if record.is_default(descriptor.field(), defaults) {
            continue;
        }
        fields.insert(
            descriptor.key().to_string(),
            serde_json::Value::String(record.value_as_string(descriptor.key())?),
        );
    }
    Ok(serde_json::json!({
        "kind": record.kind(),
        "path": node.value(PATH_KEY),
        "fields": fields,
    }))
}
