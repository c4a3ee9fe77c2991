//! API Gateway proxy integration for the `lambda_runtime` function

use super::handlers;
use super::CONTENT_TYPE_JSON;
use crate::config::ServiceConfig;
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{HeaderMap, HeaderValue};

/// Compute growth for a proxy event
///
/// Failures are reported through the status code, never as a Lambda error.
pub fn handle_proxy_event(
    config: &ServiceConfig,
    event: &ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    let body = event.body.as_deref().unwrap_or_default();

    match handlers::compound(body.as_bytes(), config) {
        Ok(json) => proxy_response(200, json),
        Err(err) => proxy_response(err.status_code(), err.body()),
    }
}

fn proxy_response(status: u16, body: String) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

    let mut response = ApiGatewayProxyResponse::default();
    response.status_code = i64::from(status);
    response.headers = headers;
    response.body = Some(Body::Text(body));
    response
}
