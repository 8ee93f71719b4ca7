use std::sync::Arc;
use log::{error, info};

use skillgen::config::ServerConfig;
use skillgen::{serve, CompletionOracle, OpenAiClient};

#[tokio::main]
async fn main()
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("info")
    ).init();

    if let Err(e) = run().await
    {   error!("skillgen exited: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), skillgen::Error>
{   let config = ServerConfig::from_env()?;

    // Checked per request, not here
    let api_key = std::env::var("OPENAI_API_KEY").ok();
    if api_key.is_none()
    {   info!("OPENAI_API_KEY not set; generation requests will fail");
    }

    let oracle: Arc<dyn CompletionOracle>
      = Arc::new(OpenAiClient::new(api_key, &config.provider)?);

    serve(&config, oracle).await
}
