use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use docsum_common::{logger, AppConfig, SummaryLength, SummaryTone};
use docsum_form::render::render_state;
use docsum_form::{read_file_content, Command, EndpointClient, FormState, Msg, Phase};
use std::path::{Path, PathBuf};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "docsum")]
#[command(about = "docsum - summarize text and markdown documents with your own API key", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a local document through a running server
    Summarize {
        /// Document to summarize (.txt, .md, or .pdf)
        file: PathBuf,

        /// Provider API key, sent only with this request
        #[arg(long)]
        api_key: String,

        /// Summary length: short, medium or long
        #[arg(long, default_value = "medium")]
        length: SummaryLength,

        /// Summary tone: neutral, friendly or formal
        #[arg(long, default_value = "neutral")]
        tone: SummaryTone,

        /// Base URL of the docsum server
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        server: String,

        /// Log at debug level
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        Some(Commands::Summarize {
            file,
            api_key,
            length,
            tone,
            server,
            verbose,
        }) => {
            logger::setup_console_logging(if verbose { "debug" } else { "warn" })?;
            summarize(&file, api_key, length, tone, &server).await
        }
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    logger::setup_logging(&config.get_log_path(), &config.log_level)?;

    tracing::info!("docsum starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Model: {}", config.llm_model);
    tracing::info!("  Max input: {} characters", config.max_input_chars);

    println!("Server listening on http://{}", config.server_bind_address());

    docsum_server::start_server(config).await?;
    Ok(())
}

/// Drive the form once: load the file, submit, print the outcome
async fn summarize(
    file: &Path,
    api_key: String,
    length: SummaryLength,
    tone: SummaryTone,
    server: &str,
) -> Result<()> {
    let mut state = FormState::new();

    let loaded = match read_file_content(file).await {
        Ok(content) => Msg::FileLoaded {
            name: file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            content,
        },
        Err(e) => Msg::FileFailed(e.to_string()),
    };
    state.update(loaded);
    state.update(Msg::ApiKeyChanged(api_key));
    state.update(Msg::LengthChanged(length));
    state.update(Msg::ToneChanged(tone));

    if state.phase() == Phase::FileLoaded {
        print!("{}", render_state(&state));
    }

    if let Some(Command::Submit(request)) = state.update(Msg::SubmitRequested) {
        println!("{}", render_state(&state).trim_end());
        let client = EndpointClient::new(server)?;
        let outcome = client.submit(&request).await;
        state.update(outcome);
    }

    match state.phase() {
        Phase::Succeeded => {
            println!();
            print!("{}", render_state(&state));
            Ok(())
        }
        Phase::Failed => bail!(state.error.unwrap_or_default()),
        _ => bail!("Nothing to summarize: the document is empty or the API key is missing"),
    }
}
