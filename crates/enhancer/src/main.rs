use anyhow::Result;
use clap::{Parser, Subcommand};
use enhancer_common::{logger, AppConfig};
use enhancer_templates::{build_source, parse_templates};
use std::path::PathBuf;

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
            return;
        }
    }

    // Fallback to default dotenv behavior
    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "enhancer")]
#[command(about = "Transcript enhancer - one AI enhancement per prompt template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server and browser UI
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,

        /// Template library (file path or Google Docs URL)
        #[arg(long)]
        templates: Option<String>,
    },

    /// Parse the template library and list its templates
    Templates {
        /// Template library (file path or Google Docs URL)
        #[arg(long)]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            templates,
        }) => serve(host, port, templates).await,
        Some(Commands::Templates { source }) => list_templates(source).await,
        None => serve(None, None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>, templates: Option<String>) -> Result<()> {
    let mut config = AppConfig::read_env()?;

    // Override with CLI arguments
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    if let Some(templates) = templates {
        config.template_source = templates;
    }

    config.validate()?;
    config.ensure_directories()?;

    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Transcript enhancer starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Provider: {}", config.llm_provider.as_str());
    tracing::info!("  Model: {}", config.llm_model);
    tracing::info!("  Templates: {}", config.template_source);
    tracing::info!("  Call timeout: {:?}", config.llm_timeout());

    println!("Server listening on http://{}", config.server_bind_address());

    enhancer_server::start_server(config).await?;

    Ok(())
}

async fn list_templates(source: Option<String>) -> Result<()> {
    let mut config = AppConfig::read_env()?;
    if let Some(source) = source {
        config.template_source = source;
    }

    logger::setup_console_logging(&config.log_level)?;

    let document = build_source(&config)?.load().await?;
    let templates = parse_templates(&document);

    if templates.is_empty() {
        anyhow::bail!(
            "No templates found in {}. Ensure they are separated by H1 headers (e.g., \"# My Template\").",
            config.template_source
        );
    }

    println!("{} templates in {}", templates.len(), config.template_source);
    for (i, template) in templates.iter().enumerate() {
        println!(
            "{:>3}. {} ({} chars)",
            i + 1,
            template.title,
            template.prompt.chars().count()
        );
    }

    Ok(())
}
