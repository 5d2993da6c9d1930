use std::sync::Arc;
use tokio::net::TcpListener;
use youtube_summarizer::{
    AppState,
    api::routes::create_router,
    config::Config,
    llm::OpenAiClient,
    tracing::init_tracing_subscriber,
    youtube::CaptionClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing_subscriber()?;

    // Load configuration; a missing API credential fails here, not at
    // the first request
    let config = Config::load()?;
    let server_addr = config.server_addr;

    let fetcher = CaptionClient::new();
    let summarizer = OpenAiClient::new(config.openai_api_key.clone());

    let app_state = AppState {
        config: Arc::new(config),
        fetcher: Arc::new(fetcher),
        summarizer: Arc::new(summarizer),
    };

    // Build the router with routes
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!(%server_addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
