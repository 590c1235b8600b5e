// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rag_playground::utils::RequestSpinner;
use rag_playground::utils::logging::{format_error, format_success, format_warning};
use rag_playground::{Config, Playground, QueryForm, RagClient, ResultsView, Session, UploadForm};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rag_playground")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Terminal playground for a RAG backend", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Backend base URL, overriding configuration and environment
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the backend is reachable
    Ping,

    /// Add one document to the backend index
    Upload {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Search for documents by semantic similarity
    Search {
        query: String,

        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Ask a question answered from retrieved context
    Ask {
        query: String,

        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Interactive playground
    Shell {
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rag_playground::utils::logging::init_logger(cli.color, cli.verbose);

    let config = load_config(&cli)?;
    info!("Using backend at {}", config.api.base_url);

    match cli.command {
        Commands::Ping => cmd_ping(&config).await?,
        Commands::Upload { title, text, file } => {
            cmd_upload(&config, cli.color, &title, text, file).await?
        }
        Commands::Search { query, top_k, json } => {
            let config = config.with_top_k(top_k)?;
            cmd_query(&config, cli.color, &query, QueryAction::Search, json).await?
        }
        Commands::Ask { query, top_k, json } => {
            let config = config.with_top_k(top_k)?;
            cmd_query(&config, cli.color, &query, QueryAction::Ask, json).await?
        }
        Commands::Shell { top_k } => {
            let config = config.with_top_k(top_k)?;
            cmd_shell(&config).await?
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    config
        .with_base_url(cli.base_url.clone())
        .context("Invalid --base-url")
}

fn build_playground(config: &Config) -> Result<Playground> {
    let client = RagClient::new(&config.api).context("Failed to create backend client")?;
    Ok(Playground::new(client, config.query.top_k))
}

async fn cmd_ping(config: &Config) -> Result<()> {
    let client = RagClient::new(&config.api).context("Failed to create backend client")?;

    let body = client.ping().await.context("Backend is unreachable")?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

async fn cmd_upload(
    config: &Config,
    color: bool,
    title: &str,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => String::new(),
    };

    let mut form = UploadForm::new();
    form.set_title(title);
    form.set_text(text);

    let playground = build_playground(config)?;
    let spinner = RequestSpinner::start("Uploading document", color);
    let notice = form.submit(&playground).await;
    spinner.finish();

    match notice {
        Some(notice) if notice.is_success() => {
            println!("{}", format_success(&notice.to_string()));
            Ok(())
        }
        Some(notice) => {
            eprintln!("{}", format_error(&notice.to_string()));
            Err(anyhow::anyhow!("Upload failed"))
        }
        None => {
            eprintln!("{}", format_warning("Nothing to upload: text is empty."));
            Ok(())
        }
    }
}

#[derive(Clone, Copy)]
enum QueryAction {
    Search,
    Ask,
}

async fn cmd_query(
    config: &Config,
    color: bool,
    query: &str,
    action: QueryAction,
    json: bool,
) -> Result<()> {
    let mut playground = build_playground(config)?;
    let mut form = QueryForm::new();
    form.set_query(query);

    let spinner = match action {
        QueryAction::Search => RequestSpinner::start("Searching", color),
        QueryAction::Ask => RequestSpinner::start("Asking", color),
    };
    match action {
        QueryAction::Search => form.search(&mut playground).await,
        QueryAction::Ask => form.ask(&mut playground).await,
    }
    spinner.finish();

    if json {
        println!("{}", serde_json::to_string_pretty(playground.state())?);
    } else {
        let view = ResultsView::new(config.display.preview_chars);
        print!("{}", view.render_state(playground.state()));
    }

    Ok(())
}

async fn cmd_shell(config: &Config) -> Result<()> {
    let playground = build_playground(config)?;
    let mut session = Session::new(playground, ResultsView::new(config.display.preview_chars));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session
        .run(stdin, &mut stdout)
        .await
        .context("Shell session failed")?;

    Ok(())
}
