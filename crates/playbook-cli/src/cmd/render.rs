use anyhow::Context;
use playbook_core::{
    config::Config, guide::GuideState, io, render, resource::ResourceLibrary,
};
use std::path::Path;

pub fn run(root: &Path, out: Option<&Path>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let state = GuideState::load(root).context("failed to load guide")?;
    let library = ResourceLibrary::load(root).context("failed to load resources")?;

    let html = render::guide_page(&config.project.name, &state, &library.items);

    match out {
        Some(path) => {
            io::atomic_write(path, html.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}
