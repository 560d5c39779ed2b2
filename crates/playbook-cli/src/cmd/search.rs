use crate::output::{print_json, Table};
use anyhow::Context;
use playbook_core::{
    analytics, config::Config, guide::GuideState, resource::ResourceLibrary, search,
};
use std::path::Path;

pub fn run(root: &Path, query: &str, threshold: Option<f64>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let threshold = threshold.unwrap_or(config.search.threshold);

    let state = GuideState::load(root).context("failed to load guide")?;
    let library = ResourceLibrary::load(root).context("failed to load resources")?;

    let hits = search::search_many_scored(
        query,
        search::guide_candidates(&state, &library)?,
        search::GUIDE_FIELDS,
        threshold,
    );

    let _ = analytics::record(root, "search", query);

    if json {
        let out: Vec<_> = hits
            .iter()
            .map(|h| serde_json::json!({ "score": h.score, "item": h.item }))
            .collect();
        print_json(&out)?;
        return Ok(());
    }

    if hits.is_empty() {
        println!("No matches for '{query}' (threshold {threshold}).");
        return Ok(());
    }

    let mut table = Table::new(&["SCORE", "KIND", "TITLE"]).numeric(0);
    for h in &hits {
        table.row(vec![
            format!("{:.2}", h.score),
            h.item["kind"].as_str().unwrap_or("?").to_string(),
            h.item["title"].as_str().unwrap_or("").to_string(),
        ]);
    }
    table.print();
    Ok(())
}
