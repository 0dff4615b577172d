mod config;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    if config.runtime.api_url.is_empty() {
        tracing::warn!("API_URL not set, chat API calls go to this origin");
    }

    let state = state::AppState::new(config);
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chat-app listening");
    axum::serve(listener, app).await.expect("server failed");
}
