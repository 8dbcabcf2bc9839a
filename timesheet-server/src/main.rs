use timesheet_server::{Config, Server, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    );

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        negative_cost = %config.negative_cost_policy,
        "Timesheet server starting..."
    );

    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    Ok(())
}
