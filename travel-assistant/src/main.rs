use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use travel_assistant::assistant::Assistant;
use travel_assistant::config::AssistantConfig;
use travel_assistant::distance::DistanceMatrixClient;
use travel_assistant::llm::OpenAiClient;
use travel_assistant::web::{AppState, create_router};

/// Static assets, relative to the working directory.
const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("travel_assistant=info,tower_http=info")),
        )
        .init();

    // Fail fast: without both keys no query can be answered.
    let config = match AssistantConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    info!(model = %config.openai_model, timeout_secs = config.timeout_secs, "loaded configuration");

    let model = OpenAiClient::new(config.openai()).expect("Failed to create chat client");
    let durations =
        DistanceMatrixClient::new(config.distance_matrix()).expect("Failed to create matrix client");

    let state = AppState::new(Assistant::new(model, durations));
    let app = create_router(state, STATIC_DIR);

    let addr = config.bind_addr;
    info!("Travel Duration Assistant listening on http://{addr}");
    info!("  GET  /          - Question form");
    info!("  POST /api/ask   - Ask a question (JSON)");
    info!("  GET  /health    - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
