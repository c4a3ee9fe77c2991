//! HTTP routing for the `lambda_http` function

use super::error::ApiError;
use super::handlers;
use super::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS};
use crate::config::ServiceConfig;
use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use lambda_http::http::Method;
use lambda_http::{Body, Error, Request, Response};
use log::info;

/// Known routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Health,
    Hello,
    Banks,
    Compound,
}

impl Route {
    /// Match a request path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Health),
            "/hello" => Some(Route::Hello),
            "/banks" => Some(Route::Banks),
            "/compound" => Some(Route::Compound),
            _ => None,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Route::Compound => Method::POST,
            Route::Health | Route::Hello | Route::Banks => Method::GET,
        }
    }
}

/// Dispatch one HTTP request; every response carries the CORS headers
pub async fn route(config: &ServiceConfig, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().clone();
    let path = event.uri().path().to_string();
    info!("{} {}", method, path);

    if method == Method::OPTIONS {
        return respond(config, 204, CONTENT_TYPE_TEXT, Body::Empty);
    }

    let outcome = match Route::from_path(&path) {
        None => Err(ApiError::NotFound),
        Some(route) if route.method() != method => Err(ApiError::MethodNotAllowed),
        Some(Route::Health) => Ok((CONTENT_TYPE_TEXT, Body::from(handlers::HEALTH_MESSAGE))),
        Some(Route::Hello) => Ok((CONTENT_TYPE_JSON, Body::from(handlers::hello()))),
        Some(Route::Banks) => handlers::banks(config)
            .await
            .map(|bytes| (CONTENT_TYPE_JSON, Body::from(bytes))),
        Some(Route::Compound) => handlers::compound(event.body(), config)
            .map(|json| (CONTENT_TYPE_JSON, Body::from(json))),
    };

    match outcome {
        Ok((content_type, body)) => respond(config, 200, content_type, body),
        Err(err) => respond(config, err.status_code(), CONTENT_TYPE_JSON, Body::from(err.body())),
    }
}

fn respond(
    config: &ServiceConfig,
    status: u16,
    content_type: &str,
    body: Body,
) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, config.cors_allow_origin.as_str())
        .header(ACCESS_CONTROL_ALLOW_METHODS, CORS_ALLOW_METHODS)
        .header(ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS)
        .body(body)?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GrowthResponse;

    fn request(method: Method, path: &str, body: &str) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    fn body_text(response: &Response<Body>) -> String {
        String::from_utf8(response.body().to_vec()).expect("utf-8 body")
    }

    #[test]
    fn test_route_matching() {
        assert_eq!(Route::from_path("/"), Some(Route::Health));
        assert_eq!(Route::from_path("/compound/"), Some(Route::Compound));
        assert_eq!(Route::from_path("/banks"), Some(Route::Banks));
        assert_eq!(Route::from_path("/loans"), None);
    }

    #[tokio::test]
    async fn test_compound_route() {
        let config = ServiceConfig::default();
        let response = route(
            &config,
            request(
                Method::POST,
                "/compound",
                r#"{"principal": 100000000.0, "annualRate": 10.0, "years": 10}"#,
            ),
        )
        .await
        .expect("response");

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let parsed: GrowthResponse = serde_json::from_str(&body_text(&response)).expect("json");
        assert_eq!(parsed.balances().len(), 10);
        assert_eq!(parsed.balances()[9], 259_374_246.01);
    }

    #[tokio::test]
    async fn test_bad_body_is_400() {
        let config = ServiceConfig::default();
        let response = route(&config, request(Method::POST, "/compound", "{oops"))
            .await
            .expect("response");
        assert_eq!(response.status(), 400);
        assert_eq!(body_text(&response), r#"{"message":"Invalid request body"}"#);
    }

    #[tokio::test]
    async fn test_health_and_hello() {
        let config = ServiceConfig::default();

        let health = route(&config, request(Method::GET, "/", "")).await.expect("response");
        assert_eq!(health.status(), 200);
        assert_eq!(body_text(&health), handlers::HEALTH_MESSAGE);

        let hello = route(&config, request(Method::GET, "/hello", "")).await.expect("response");
        assert_eq!(hello.status(), 200);
        assert_eq!(body_text(&hello), r#"{"message":"Hello, World!"}"#);
    }

    #[tokio::test]
    async fn test_unknown_route_and_wrong_method() {
        let config = ServiceConfig::default();

        let missing = route(&config, request(Method::GET, "/loans", "")).await.expect("response");
        assert_eq!(missing.status(), 404);

        let wrong = route(&config, request(Method::GET, "/compound", "")).await.expect("response");
        assert_eq!(wrong.status(), 405);
        assert_eq!(wrong.headers()[ACCESS_CONTROL_ALLOW_METHODS], CORS_ALLOW_METHODS);
    }

    #[tokio::test]
    async fn test_preflight() {
        let config = ServiceConfig {
            cors_allow_origin: "https://rates.example.org".to_string(),
            ..Default::default()
        };
        let response = route(&config, request(Method::OPTIONS, "/compound", ""))
            .await
            .expect("response");

        assert_eq!(response.status(), 204);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "https://rates.example.org");
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_HEADERS], CORS_ALLOW_HEADERS);
    }

    #[tokio::test]
    async fn test_banks_serves_non_utf8_file() {
        let path = std::env::temp_dir().join(format!("banks-route-{}.json", std::process::id()));
        let bytes = vec![b'{', 0xc3, 0x28, b'}'];
        std::fs::write(&path, &bytes).expect("write fixture");
        let config = ServiceConfig {
            banks_response_path: path.clone(),
            ..Default::default()
        };

        let response = route(&config, request(Method::GET, "/banks", "")).await.expect("response");
        std::fs::remove_file(&path).ok();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
        assert_eq!(response.body().to_vec(), bytes);
    }

    #[tokio::test]
    async fn test_banks_missing_file_is_500() {
        let config = ServiceConfig {
            banks_response_path: std::env::temp_dir().join("no-such-banks-response.json"),
            ..Default::default()
        };
        let response = route(&config, request(Method::GET, "/banks", "")).await.expect("response");
        assert_eq!(response.status(), 500);
        assert_eq!(body_text(&response), r#"{"message":"Unable to read file"}"#);
    }
}
