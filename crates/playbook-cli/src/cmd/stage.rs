use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use playbook_core::{guide::GuideState, resource::ResourceLibrary, types::StageKey};
use std::path::Path;
use std::str::FromStr;

#[derive(Subcommand)]
pub enum StageSubcommand {
    /// List all stages
    List,
    /// Show one stage's content
    Show { key: String },
    /// Append a discovery question
    AddQuestion { key: String, text: String },
    /// Append an objection with its suggested response
    AddObjection {
        key: String,
        objection: String,
        #[arg(long)]
        response: String,
    },
    /// Link a resource (by id) to a stage
    LinkResource { key: String, id: String },
    /// Unlink a resource from a stage
    UnlinkResource { key: String, id: String },
}

pub fn run(root: &Path, subcmd: StageSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        StageSubcommand::List => list(root, json),
        StageSubcommand::Show { key } => show(root, &key, json),
        StageSubcommand::AddQuestion { key, text } => add_question(root, &key, &text, json),
        StageSubcommand::AddObjection {
            key,
            objection,
            response,
        } => add_objection(root, &key, &objection, &response, json),
        StageSubcommand::LinkResource { key, id } => link_resource(root, &key, &id, true, json),
        StageSubcommand::UnlinkResource { key, id } => link_resource(root, &key, &id, false, json),
    }
}

fn parse_key(key: &str) -> anyhow::Result<StageKey> {
    StageKey::from_str(key).with_context(|| format!("unknown stage: {key}"))
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = GuideState::load(root).context("failed to load guide")?;

    if json {
        print_json(&state.stages)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .stages
        .iter()
        .map(|s| {
            vec![
                s.key.to_string(),
                s.title.clone(),
                format!("{}", s.questions.len()),
                format!("{}", s.objections.len()),
                format!("{}", s.resource_ids.len()),
            ]
        })
        .collect();
    print_table(&["KEY", "TITLE", "QUESTIONS", "OBJECTIONS", "RESOURCES"], rows);
    Ok(())
}

fn show(root: &Path, key: &str, json: bool) -> anyhow::Result<()> {
    let key = parse_key(key)?;
    let state = GuideState::load(root).context("failed to load guide")?;
    let stage = state.stage(key)?;

    if json {
        print_json(stage)?;
        return Ok(());
    }

    println!("Stage: {} — {}", stage.key, stage.title);
    if !stage.summary.is_empty() {
        println!("{}", stage.summary);
    }
    if !stage.questions.is_empty() {
        println!("\nDiscovery questions:");
        for q in &stage.questions {
            println!("  - {q}");
        }
    }
    if !stage.objections.is_empty() {
        println!("\nObjections:");
        for o in &stage.objections {
            println!("  - {}", o.objection);
            println!("    → {}", o.response);
        }
    }
    if !stage.resource_ids.is_empty() {
        let library = ResourceLibrary::load(root)?;
        println!("\nResources:");
        for id in &stage.resource_ids {
            match library.get(id) {
                Ok(r) => println!("  - {} ({})", r.title, r.url),
                Err(_) => println!("  - {id} (missing from library)"),
            }
        }
    }
    Ok(())
}

fn add_question(root: &Path, key: &str, text: &str, json: bool) -> anyhow::Result<()> {
    let key = parse_key(key)?;
    let mut state = GuideState::load(root).context("failed to load guide")?;
    state.stage_mut(key)?.add_question(text);
    state.save(root).context("failed to save guide")?;

    if json {
        print_json(state.stage(key)?)?;
    } else {
        println!("Added question to {key}");
    }
    Ok(())
}

fn add_objection(
    root: &Path,
    key: &str,
    objection: &str,
    response: &str,
    json: bool,
) -> anyhow::Result<()> {
    let key = parse_key(key)?;
    let mut state = GuideState::load(root).context("failed to load guide")?;
    state.stage_mut(key)?.add_objection(objection, response);
    state.save(root).context("failed to save guide")?;

    if json {
        print_json(state.stage(key)?)?;
    } else {
        println!("Added objection to {key}");
    }
    Ok(())
}

fn link_resource(root: &Path, key: &str, id: &str, link: bool, json: bool) -> anyhow::Result<()> {
    let key = parse_key(key)?;

    // Validate the id against the library before linking
    if link {
        let library = ResourceLibrary::load(root).context("failed to load resources")?;
        library
            .get(id)
            .with_context(|| format!("resource '{id}' not found"))?;
    }

    let mut state = GuideState::load(root).context("failed to load guide")?;
    let stage = state.stage_mut(key)?;
    if link {
        stage.link_resource(id);
    } else {
        stage.unlink_resource(id);
    }
    state.save(root).context("failed to save guide")?;

    if json {
        print_json(state.stage(key)?)?;
    } else if link {
        println!("Linked {id} to {key}");
    } else {
        println!("Unlinked {id} from {key}");
    }
    Ok(())
}
