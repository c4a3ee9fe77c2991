//! Lambda function computing growth from API Gateway proxy events

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use compounding_service::api::handle_proxy_event;
use compounding_service::ServiceConfig;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = ServiceConfig::from_env()?;
    log::info!("Starting compounding_proxy (rounding={})", config.rounding);

    let config = &config;
    run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
        Ok::<ApiGatewayProxyResponse, Error>(handle_proxy_event(config, &event.payload))
    }))
    .await
}
