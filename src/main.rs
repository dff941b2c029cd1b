mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, scheduler::battery_audit, startup, state::AppState,
    validation::ValidationRules,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    battery_audit::start_scheduler(db.clone(), &config.battery_audit_cron).await?;

    let app = router::app(AppState::new(db, ValidationRules::new()));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!("Server listening on http://{}", config.bind_address());
    tracing::info!(
        "API documentation: http://{}/swagger-ui",
        config.bind_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
