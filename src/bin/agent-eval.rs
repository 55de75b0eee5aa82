use anyhow::Context;
use clap::Parser;

use agent_eval::api::{build_router, ServerState};
use agent_eval::backends::gemini::Gemini;

/// Command line arguments for the evaluation service.
#[derive(Parser)]
#[clap(
    name = "agent-eval",
    about = "Backend for the AI agent evaluation dashboard"
)]
struct CliArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Request timeout towards the Gemini API, in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY environment variable is required")?;
    let base_url = std::env::var("GEMINI_BASE_URL").ok();

    let gemini = Gemini::new(api_key, base_url, args.timeout)?;
    let router = build_router(ServerState { gemini });

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("agent-eval listening on {addr}");

    axum::serve(listener, router).await?;
    Ok(())
}
