use std::net::SocketAddr;

use api_server::http::{self, AppState};
use shared::config::ApiConfig;
use shared::llm::CompletionClient;
use shared::sessions::SessionStore;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api_server=debug,shared=debug,axum=info".to_string()),
        )
        .init();

    let config = match ApiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("failed to read config: {err}");
            std::process::exit(1);
        }
    };

    if config.api_key.is_none() {
        // The original keeps serving and fails chat requests with a
        // configuration error, so a missing key is not fatal at startup.
        warn!("OPENAI_API_KEY is not set; chat and summary requests will fail until it is");
    }

    let completions = match CompletionClient::new(
        config.chat_completions_url.clone(),
        config.api_key.clone(),
    ) {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build completion client: {err}");
            std::process::exit(1);
        }
    };

    let app = http::build_router(AppState {
        sessions: SessionStore::new(),
        completions,
        model: config.model,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind should succeed");

    info!(
        "api server listening on {}",
        listener.local_addr().unwrap_or(addr)
    );
    axum::serve(listener, app).await.expect("server should run");
}
