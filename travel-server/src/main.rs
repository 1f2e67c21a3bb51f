use std::net::SocketAddr;

use travel_server::cache::{CacheConfig, CachedSearchClient};
use travel_server::search::{SearchConfig, SearchService};
use travel_server::stay::StayCatalog;
use travel_server::web::{AppState, create_router};
use travel_server::webhook::{WebhookClient, WebhookConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Webhook endpoint from environment, falling back to the default
    // local instance.
    let mut webhook_config = WebhookConfig::new();
    match std::env::var("WEBHOOK_URL") {
        Ok(url) if !url.trim().is_empty() => {
            webhook_config = webhook_config.with_endpoint(url);
        }
        _ => {
            eprintln!(
                "Warning: WEBHOOK_URL not set. Using default endpoint {}.",
                webhook_config.endpoint
            );
        }
    }

    let client = WebhookClient::new(webhook_config).expect("Failed to create webhook client");
    let cached = CachedSearchClient::new(client, &CacheConfig::default());

    let search_config = SearchConfig::default();
    let search = SearchService::new(cached, &search_config);

    let state = AppState::new(search, StayCatalog::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Travel search server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  POST /api/search  - Search journeys");
    println!("  GET  /api/stays   - Search the stay catalog");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
