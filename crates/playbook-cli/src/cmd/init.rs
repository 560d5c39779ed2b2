use anyhow::Context;
use playbook_core::init::init;
use std::path::Path;

pub fn run(root: &Path, name: Option<&str>, json: bool) -> anyhow::Result<()> {
    let name = match name {
        Some(n) => n.to_string(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "playbook".to_string()),
    };

    let report = init(root, &name).context("failed to initialize playbook")?;

    if json {
        crate::output::print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "created": report.created,
        }))?;
        return Ok(());
    }

    if report.created {
        println!("Initialized playbook in {}", root.join(".playbook").display());
        println!("Next: playbook persona create <slug> --title \"...\"");
    } else {
        println!("Playbook already initialized — refreshed missing files.");
    }
    Ok(())
}
