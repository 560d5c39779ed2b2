use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use playbook_core::config::{Config, WarnLevel};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,
    /// Check the configuration for problems
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    match subcmd {
        ConfigSubcommand::Show => {
            if json {
                print_json(&config)?;
            } else {
                print!("{}", serde_yaml::to_string(&config)?);
            }
            Ok(())
        }
        ConfigSubcommand::Validate => {
            let warnings = config.validate();

            if json {
                print_json(&warnings)?;
            } else if warnings.is_empty() {
                println!("Configuration OK");
            } else {
                for w in &warnings {
                    let tag = match w.level {
                        WarnLevel::Error => "error",
                        WarnLevel::Warning => "warning",
                    };
                    println!("{tag}: {}", w.message);
                }
            }

            let errors = warnings
                .iter()
                .filter(|w| w.level == WarnLevel::Error)
                .count();
            anyhow::ensure!(errors == 0, "{errors} configuration error(s)");
            Ok(())
        }
    }
}
