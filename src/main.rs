use std::sync::Arc;

use tracing::{error, info};
use warp::Filter;

use consult_relay::config::Config;
use consult_relay::llm::anthropic::AnthropicClient;
use consult_relay::llm::LlmProvider;
use consult_relay::routes::{self, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "consult_relay=info".into()),
        )
        .init();

    let config = Arc::new(Config::load());

    let provider: Arc<dyn LlmProvider> =
        match AnthropicClient::new(config.anthropic_api_key.clone(), config.model) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                error!(error = %e, "failed to initialize the completion client");
                std::process::exit(1);
            }
        };

    let state = Arc::new(AppState {
        provider,
        config: config.clone(),
    });

    let routes = routes::configure_routes(state).recover(routes::handle_rejection);

    info!(
        port = config.port,
        model = config.model.as_str(),
        static_dir = %config.static_dir.display(),
        "starting server"
    );
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
