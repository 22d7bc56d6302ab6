use taskboard::{app, config::Config, services::CsvStore};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Create table files with their headers if this is a fresh data dir.
    // An unwritable storage location is fatal at startup.
    let store = CsvStore::new(&config.storage);
    store.init().expect("Failed to initialize table storage");

    let app = app(store);

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        config.server.host, config.server.port
    ))
    .await
    .expect("Failed to bind server");

    tracing::info!(
        "Server running on {}:{}",
        config.server.host,
        config.server.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
