use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use playbook_core::{lists::Lists, types::ListKind};
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum ListsSubcommand {
    /// Show all vocabularies
    Show,
    /// Add a value to a vocabulary (tags | categories | lobs)
    Add { kind: String, value: String },
    /// Remove a value from a vocabulary
    Remove { kind: String, value: String },
}

pub fn run(root: &Path, subcmd: ListsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ListsSubcommand::Show => show(root, json),
        ListsSubcommand::Add { kind, value } => add(root, &kind, &value, json),
        ListsSubcommand::Remove { kind, value } => remove(root, &kind, &value, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let lists = Lists::load(root).context("failed to load lists")?;

    if json {
        print_json(&lists)?;
        return Ok(());
    }

    let max = lists.tags.len().max(lists.categories.len()).max(lists.lobs.len());
    let cell = |v: &[String], i: usize| v.get(i).cloned().unwrap_or_default();
    let rows: Vec<Vec<String>> = (0..max)
        .map(|i| {
            vec![
                cell(&lists.tags, i),
                cell(&lists.categories, i),
                cell(&lists.lobs, i),
            ]
        })
        .collect();
    print_table(&["TAGS", "CATEGORIES", "LOBS"], rows);
    Ok(())
}

fn add(root: &Path, kind: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let kind = ListKind::from_str(kind).with_context(|| format!("unknown list kind: {kind}"))?;

    let mut lists = Lists::load(root).context("failed to load lists")?;
    let added = lists.add(kind, value);
    lists.save(root).context("failed to save lists")?;

    if json {
        print_json(&serde_json::json!({ "kind": kind, "value": value, "added": added }))?;
    } else if added {
        println!("Added '{value}' to {kind}");
    } else {
        println!("'{value}' already in {kind}");
    }
    Ok(())
}

fn remove(root: &Path, kind: &str, value: &str, json: bool) -> anyhow::Result<()> {
    let kind = ListKind::from_str(kind).with_context(|| format!("unknown list kind: {kind}"))?;

    let mut lists = Lists::load(root).context("failed to load lists")?;
    let removed = lists.remove(kind, value);
    lists.save(root).context("failed to save lists")?;

    if json {
        print_json(&serde_json::json!({ "kind": kind, "value": value, "removed": removed }))?;
    } else if removed {
        println!("Removed '{value}' from {kind}");
    } else {
        println!("'{value}' was not in {kind}");
    }
    Ok(())
}
