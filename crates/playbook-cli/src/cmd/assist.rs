use crate::output::print_json;
use anyhow::Context;
use playbook_core::{analytics, assist, config::Config};
use std::io::Read as _;
use std::path::Path;

pub fn run(root: &Path, prompt: Option<&str>, set_key: bool, json: bool) -> anyhow::Result<()> {
    if set_key {
        let mut key = String::new();
        std::io::stdin()
            .read_to_string(&mut key)
            .context("failed to read key from stdin")?;
        let key = key.trim();
        anyhow::ensure!(!key.is_empty(), "no key provided on stdin");

        assist::store_key(root, key).context("failed to store key")?;
        if !json {
            println!("Key stored.");
        }
        if prompt.is_none() {
            return Ok(());
        }
    }

    let prompt = prompt.context("no prompt given (pass a prompt, or --set-key to store a key)")?;

    let key = assist::load_key(root)
        .context("no API key stored; run 'playbook assist --set-key' first")?;
    let config = Config::load(root).context("failed to load config")?;

    let client = assist::AssistClient::new(&config.assist, key);
    let answer = client.complete(prompt)?;

    let _ = analytics::record(root, "assist", prompt);

    if json {
        print_json(&serde_json::json!({ "prompt": prompt, "answer": answer }))?;
    } else {
        println!("{answer}");
    }
    Ok(())
}
