use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use playbook_core::{analytics, guide::GuideState, persona::Persona};
use std::path::Path;

#[derive(Subcommand)]
pub enum PersonaSubcommand {
    /// Create a new persona
    Create {
        slug: String,
        #[arg(long)]
        title: Option<String>,
        /// One-liner describing the role
        #[arg(long)]
        summary: Option<String>,
        /// Line of business (see 'playbook lists show')
        #[arg(long)]
        lob: Option<String>,
    },
    /// Edit a persona's title, summary, or line of business
    Edit {
        slug: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        lob: Option<String>,
    },
    /// List all personas
    List,
    /// Show persona details
    Show { slug: String },
    /// Append a concern to a persona
    AddConcern { slug: String, text: String },
    /// Append a talking point to a persona
    AddPoint { slug: String, text: String },
    /// Remove a persona
    Remove { slug: String },
}

pub fn run(root: &Path, subcmd: PersonaSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        PersonaSubcommand::Create {
            slug,
            title,
            summary,
            lob,
        } => create(root, &slug, title, summary, lob, json),
        PersonaSubcommand::Edit {
            slug,
            title,
            summary,
            lob,
        } => edit(root, &slug, title, summary, lob, json),
        PersonaSubcommand::List => list(root, json),
        PersonaSubcommand::Show { slug } => show(root, &slug, json),
        PersonaSubcommand::AddConcern { slug, text } => add_concern(root, &slug, &text, json),
        PersonaSubcommand::AddPoint { slug, text } => add_point(root, &slug, &text, json),
        PersonaSubcommand::Remove { slug } => remove(root, &slug, json),
    }
}

fn create(
    root: &Path,
    slug: &str,
    title: Option<String>,
    summary: Option<String>,
    lob: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let title = title.unwrap_or_else(|| slug.replace('-', " "));

    let mut state = GuideState::load(root).context("failed to load guide")?;
    let mut persona = Persona::new(slug, &title);
    persona.role_summary = summary;
    persona.lob = lob;
    state
        .add_persona(persona.clone())
        .with_context(|| format!("failed to create persona '{slug}'"))?;
    state.save(root).context("failed to save guide")?;

    let _ = analytics::record(root, "persona_created", slug);

    if json {
        print_json(&persona)?;
    } else {
        println!("Created persona: {slug} — {title}");
    }
    Ok(())
}

fn edit(
    root: &Path,
    slug: &str,
    title: Option<String>,
    summary: Option<String>,
    lob: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        title.is_some() || summary.is_some() || lob.is_some(),
        "nothing to change: pass --title, --summary, or --lob"
    );

    let mut state = GuideState::load(root).context("failed to load guide")?;
    let persona = state
        .persona_mut(slug)
        .with_context(|| format!("persona '{slug}' not found"))?;
    if let Some(title) = title {
        persona.set_title(title);
    }
    if let Some(summary) = summary {
        persona.set_role_summary(Some(summary));
    }
    if let Some(lob) = lob {
        persona.set_lob(Some(lob));
    }
    state.save(root).context("failed to save guide")?;

    if json {
        print_json(state.persona(slug)?)?;
    } else {
        println!("Updated persona: {slug}");
    }
    Ok(())
}

fn list(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = GuideState::load(root).context("failed to load guide")?;

    if json {
        print_json(&state.personas)?;
        return Ok(());
    }

    if state.personas.is_empty() {
        println!("No personas yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .personas
        .iter()
        .map(|p| {
            vec![
                p.slug.clone(),
                p.title.clone(),
                p.lob.clone().unwrap_or_default(),
                format!("{}", p.concerns.len()),
            ]
        })
        .collect();
    print_table(&["SLUG", "TITLE", "LOB", "CONCERNS"], rows);
    Ok(())
}

fn show(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let state = GuideState::load(root).context("failed to load guide")?;
    let persona = state
        .persona(slug)
        .with_context(|| format!("persona '{slug}' not found"))?;

    let _ = analytics::record(root, "persona_viewed", slug);

    if json {
        print_json(persona)?;
        return Ok(());
    }

    println!("Persona: {} — {}", persona.slug, persona.title);
    if let Some(ref summary) = persona.role_summary {
        println!("Summary: {summary}");
    }
    if let Some(ref lob) = persona.lob {
        println!("LOB:     {lob}");
    }
    if !persona.concerns.is_empty() {
        println!("\nConcerns:");
        for c in &persona.concerns {
            println!("  - {c}");
        }
    }
    if !persona.talking_points.is_empty() {
        println!("\nTalking points:");
        for p in &persona.talking_points {
            println!("  - {p}");
        }
    }
    Ok(())
}

fn add_concern(root: &Path, slug: &str, text: &str, json: bool) -> anyhow::Result<()> {
    let mut state = GuideState::load(root).context("failed to load guide")?;
    state
        .persona_mut(slug)
        .with_context(|| format!("persona '{slug}' not found"))?
        .add_concern(text);
    state.save(root).context("failed to save guide")?;

    if json {
        print_json(state.persona(slug)?)?;
    } else {
        println!("Added concern to {slug}");
    }
    Ok(())
}

fn add_point(root: &Path, slug: &str, text: &str, json: bool) -> anyhow::Result<()> {
    let mut state = GuideState::load(root).context("failed to load guide")?;
    state
        .persona_mut(slug)
        .with_context(|| format!("persona '{slug}' not found"))?
        .add_talking_point(text);
    state.save(root).context("failed to save guide")?;

    if json {
        print_json(state.persona(slug)?)?;
    } else {
        println!("Added talking point to {slug}");
    }
    Ok(())
}

fn remove(root: &Path, slug: &str, json: bool) -> anyhow::Result<()> {
    let mut state = GuideState::load(root).context("failed to load guide")?;
    let removed = state
        .remove_persona(slug)
        .with_context(|| format!("persona '{slug}' not found"))?;
    state.save(root).context("failed to save guide")?;

    let _ = analytics::record(root, "persona_removed", slug);

    if json {
        print_json(&removed)?;
    } else {
        println!("Removed persona: {slug}");
    }
    Ok(())
}
