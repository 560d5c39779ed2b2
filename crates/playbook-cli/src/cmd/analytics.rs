use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use playbook_core::analytics::EventLog;
use std::path::Path;

#[derive(Subcommand)]
pub enum AnalyticsSubcommand {
    /// List recorded events, newest last
    List,
    /// Record an event by hand
    Record {
        kind: String,
        #[arg(default_value = "")]
        detail: String,
    },
    /// Delete every recorded event
    Clear,
}

pub fn run(root: &Path, subcmd: AnalyticsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        AnalyticsSubcommand::List => list(root, json),
        AnalyticsSubcommand::Record { kind, detail } => record(root, &kind, &detail, json),
        AnalyticsSubcommand::Clear => clear(root, json),
    }
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let log = EventLog::load(root).context("failed to load analytics")?;

    if json {
        print_json(&log.events)?;
        return Ok(());
    }

    if log.events.is_empty() {
        println!("No events recorded.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = log
        .events
        .iter()
        .map(|e| {
            vec![
                e.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                e.kind.clone(),
                e.detail.clone(),
            ]
        })
        .collect();
    print_table(&["TIME", "KIND", "DETAIL"], rows);
    Ok(())
}

fn record(root: &Path, kind: &str, detail: &str, json: bool) -> anyhow::Result<()> {
    playbook_core::analytics::record(root, kind, detail).context("failed to record event")?;

    if json {
        print_json(&serde_json::json!({ "kind": kind, "detail": detail }))?;
    } else {
        println!("Recorded '{kind}'");
    }
    Ok(())
}

fn clear(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut log = EventLog::load(root).context("failed to load analytics")?;
    let count = log.events.len();
    log.clear();
    log.save(root).context("failed to save analytics")?;

    if json {
        print_json(&serde_json::json!({ "cleared": count }))?;
    } else {
        println!("Cleared {count} event(s)");
    }
    Ok(())
}
