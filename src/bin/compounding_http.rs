//! Lambda function serving the HTTP routes (health, hello, banks, compound)

use compounding_service::api::route;
use compounding_service::ServiceConfig;
use lambda_http::{run, service_fn, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = ServiceConfig::from_env()?;
    log::info!(
        "Starting compounding_http (rounding={}, max_years={})",
        config.rounding,
        config.max_years
    );

    let config = &config;
    run(service_fn(move |event: Request| async move { route(config, event).await })).await
}
