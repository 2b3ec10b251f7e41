use analytics::report;
use api_client::StoreClient;
use clap::{Parser, Subcommand};
use engine::InsightsEngine;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the insights application.
///
/// This binary is a thin harness around the pipeline: it stands in for the
/// voice envelope by taking the period slot from the command line and
/// printing the sentence that would be spoken back.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, if one is present.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Ask(args) => handle_ask(args).await?,
        Commands::Welcome => println!("{}", report::WELCOME),
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A voice-analytics backend that answers business-insight questions about a
/// time period.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer an insights question for a period slot value.
    Ask(AskArgs),
    /// Print the launch greeting.
    Welcome,
}

#[derive(Parser)]
struct AskArgs {
    /// The raw period slot (e.g. "2024-03", "2023-W14" or "2024-03-05").
    /// Omit it to hear how an absent slot is answered.
    #[arg(long)]
    when: Option<String>,
}

// ==============================================================================
// Ask Command Logic
// ==============================================================================

/// Builds the live pipeline and answers a single question.
async fn handle_ask(args: AskArgs) -> anyhow::Result<()> {
    let settings = configuration::load_config()?;
    let client = StoreClient::new(&settings.api);
    let engine = InsightsEngine::new(Arc::new(client));

    let spoken = engine.handle_request(args.when.as_deref()).await;
    println!("{spoken}");

    Ok(())
}
