use storefront_server::{
    Config, Server, ServerState, init_logger_with_file, print_banner, setup_environment,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then configuration
    setup_environment();
    let config = Config::from_env();

    // 2. Logging
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!(
        environment = %config.environment,
        upstream = %config.catalog_base_url,
        "🛍️ Storefront server starting..."
    );

    // 3. State with the HTTP catalog source injected
    let state = ServerState::initialize(&config)?;

    // 4. Serve until Ctrl+C / SIGTERM
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
