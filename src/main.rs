use dioxus_logger::tracing;
use fyyur::server::{
    config::Config, error::Error, model::app::AppState, router::routes, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let db = startup::connect_to_database(&config).await?;
    let session = startup::build_session_layer();

    let router = routes().with_state(AppState { db }).layer(session);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router).await?;

    Ok(())
}
