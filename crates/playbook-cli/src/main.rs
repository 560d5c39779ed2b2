mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    analytics::AnalyticsSubcommand, config::ConfigSubcommand, lists::ListsSubcommand,
    persona::PersonaSubcommand, resource::ResourceSubcommand, stage::StageSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "playbook",
    about = "Sales-cycle guide — manage personas, stages, resources, and search",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .playbook/ or .git/)
    #[arg(long, global = true, env = "PLAYBOOK_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a playbook in the current project
    Init {
        /// Project name (default: root directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Manage buyer personas
    Persona {
        #[command(subcommand)]
        subcommand: PersonaSubcommand,
    },

    /// Edit sales-stage content
    Stage {
        #[command(subcommand)]
        subcommand: StageSubcommand,
    },

    /// Manage the resource library
    Resource {
        #[command(subcommand)]
        subcommand: ResourceSubcommand,
    },

    /// Manage tag, category, and line-of-business vocabularies
    Lists {
        #[command(subcommand)]
        subcommand: ListsSubcommand,
    },

    /// Fuzzy-search personas, stages, and resources
    Search {
        query: String,

        /// Minimum score to include a result (default: from config)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Suggest tags for a piece of text
    Suggest { text: String },

    /// Inspect or edit the local interaction log
    Analytics {
        #[command(subcommand)]
        subcommand: AnalyticsSubcommand,
    },

    /// Render the guide to a static HTML page
    Render {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Ask the assist model a question (one-shot chat completion)
    Assist {
        /// The prompt; omit together with --set-key to only store the key
        prompt: Option<String>,

        /// Read an API key from stdin and store it (base64-obscured)
        #[arg(long)]
        set_key: bool,
    },

    /// Validate or show the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Launch the admin panel web UI
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init { name } => cmd::init::run(&root, name.as_deref(), cli.json),
        Commands::Persona { subcommand } => cmd::persona::run(&root, subcommand, cli.json),
        Commands::Stage { subcommand } => cmd::stage::run(&root, subcommand, cli.json),
        Commands::Resource { subcommand } => cmd::resource::run(&root, subcommand, cli.json),
        Commands::Lists { subcommand } => cmd::lists::run(&root, subcommand, cli.json),
        Commands::Search { query, threshold } => cmd::search::run(&root, &query, threshold, cli.json),
        Commands::Suggest { text } => cmd::suggest::run(&text, cli.json),
        Commands::Analytics { subcommand } => cmd::analytics::run(&root, subcommand, cli.json),
        Commands::Render { out } => cmd::render::run(&root, out.as_deref()),
        Commands::Assist { prompt, set_key } => {
            cmd::assist::run(&root, prompt.as_deref(), set_key, cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Ui { port, no_open } => cmd::ui::run(&root, port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
