// Entry point for the notifier binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,puppy_report=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let response = puppy_report::handle(serde_json::json!({ "source": "cli" })).await;
    println!("{} {}", response.status_code, response.body);

    if response.status_code >= 400 {
        std::process::exit(1);
    }
}
