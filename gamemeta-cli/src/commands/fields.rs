use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamemeta_core::RecordKind;

use crate::error::CliError;

/// List the schema of a record kind.
pub(crate) fn run_fields(folder: bool, json: bool) -> Result<(), CliError> {
    let kind = if folder {
        RecordKind::Folder
    } else {
        RecordKind::Game
    };

    if json {
        let fields: Vec<serde_json::Value> = kind
            .fields()
            .iter()
            .map(|d| {
                serde_json::json!({
                    "key": d.key(),
                    "type": d.field_type(),
                    "default": d.default_value(),
                    "display_name": d.display_name(),
                    "prompt": d.display_prompt(),
                    "statistic": d.is_statistic(),
                    "main": d.is_main(),
                })
            })
            .collect();
        let out = serde_json::to_string_pretty(&fields)
            .map_err(|e| CliError::other(format!("JSON encoding failed: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    log::info!(
        "{} fields:",
        kind.tag().if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    for d in kind.fields() {
        let default = if d.default_value().is_empty() {
            String::new()
        } else {
            format!(" = {}", d.default_value())
        };
        let flag = if d.is_statistic() {
            format!(" {}", "(statistic)".if_supports_color(Stdout, |t| t.dimmed()))
        } else {
            String::new()
        };
        log::info!(
            "  {:<12} {:<7}{}{}",
            d.key().if_supports_color(Stdout, |t| t.bold()),
            d.field_type().name().if_supports_color(Stdout, |t| t.cyan()),
            default,
            flag,
        );
    }
    Ok(())
}
