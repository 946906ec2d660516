//! Restaurants API service

use restaurants_service::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    init_tracing(&config)?;

    info!("Starting restaurants service");

    // Build application state
    let state = AppState::builder().config(config.clone()).build()?;

    // Create router
    let app = router(state);

    // Run server
    Server::new(config).serve(app).await?;

    Ok(())
}
