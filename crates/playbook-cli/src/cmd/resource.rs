use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use playbook_core::{
    analytics,
    resource::{Resource, ResourceLibrary},
    tags,
    types::ResourceType,
};
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum ResourceSubcommand {
    /// List all resources
    List,
    /// Add a resource to the library
    Add {
        title: String,
        url: String,
        /// doc | deck | case-study | video | tool | link
        #[arg(long = "type", default_value = "link")]
        resource_type: String,
        #[arg(long)]
        industry: Option<String>,
        /// Comma-separated tags; omit to auto-suggest from the title
        #[arg(long)]
        tags: Option<String>,
    },
    /// Remove a resource by id
    Remove { id: String },
    /// Replace the tags on a resource
    Tag {
        id: String,
        /// Comma-separated tags
        tags: String,
    },
}

pub fn run(root: &Path, subcmd: ResourceSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ResourceSubcommand::List => list(root, json),
        ResourceSubcommand::Add {
            title,
            url,
            resource_type,
            industry,
            tags,
        } => add(root, &title, &url, &resource_type, industry, tags, json),
        ResourceSubcommand::Remove { id } => remove(root, &id, json),
        ResourceSubcommand::Tag { id, tags } => tag(root, &id, &tags, json),
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let library = ResourceLibrary::load(root).context("failed to load resources")?;

    if json {
        print_json(&library.items)?;
        return Ok(());
    }

    if library.items.is_empty() {
        println!("No resources yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = library
        .items
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.resource_type.to_string(),
                r.title.clone(),
                r.tags.join(","),
            ]
        })
        .collect();
    print_table(&["ID", "TYPE", "TITLE", "TAGS"], rows);
    Ok(())
}

fn add(
    root: &Path,
    title: &str,
    url: &str,
    resource_type: &str,
    industry: Option<String>,
    raw_tags: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let resource_type = ResourceType::from_str(resource_type)
        .with_context(|| format!("unknown resource type: {resource_type}"))?;

    let mut resource = Resource::new(title, url, resource_type);
    resource.industry = industry;
    resource.tags = match raw_tags {
        Some(raw) => split_tags(&raw),
        None => tags::suggest(title),
    };

    let mut library = ResourceLibrary::load(root).context("failed to load resources")?;
    let id = library.add(resource);
    library.save(root).context("failed to save resources")?;

    let _ = analytics::record(root, "resource_added", &id);

    if json {
        print_json(library.get(&id)?)?;
    } else {
        println!("Added resource: {id} — {title}");
        let added = library.get(&id)?;
        if !added.tags.is_empty() {
            println!("Tags: {}", added.tags.join(", "));
        }
    }
    Ok(())
}

fn remove(root: &Path, id: &str, json: bool) -> anyhow::Result<()> {
    let mut library = ResourceLibrary::load(root).context("failed to load resources")?;
    let removed = library
        .remove(id)
        .with_context(|| format!("resource '{id}' not found"))?;
    library.save(root).context("failed to save resources")?;

    let _ = analytics::record(root, "resource_removed", id);

    if json {
        print_json(&removed)?;
    } else {
        println!("Removed resource: {id}");
    }
    Ok(())
}

fn tag(root: &Path, id: &str, raw_tags: &str, json: bool) -> anyhow::Result<()> {
    let mut library = ResourceLibrary::load(root).context("failed to load resources")?;
    library
        .set_tags(id, split_tags(raw_tags))
        .with_context(|| format!("resource '{id}' not found"))?;
    library.save(root).context("failed to save resources")?;

    if json {
        print_json(library.get(id)?)?;
    } else {
        println!("Tagged {id}: {}", library.get(id)?.tags.join(", "));
    }
    Ok(())
}
