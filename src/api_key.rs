use serde::Serialize;
use tide::{Request, Response, StatusCode};
use tide::prelude::*;
use crate::config::Config;

pub const MISSING_KEY_MESSAGE: &str = "API key not set";

#[derive(Debug, Serialize)]
struct ApiKeyBody<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

/// GET /api-key
pub async fn get_api_key(req: Request<Config>) -> tide::Result<Response> {
    let res = match req.state().api_key() {
        Ok(api_key) => Response::builder(StatusCode::Ok)
            .content_type("application/json")
            .body(json!(ApiKeyBody { api_key }))
            .build(),
        Err(_) => Response::builder(StatusCode::InternalServerError)
            .content_type("application/json")
            .body(json!({ "error": MISSING_KEY_MESSAGE }))
            .build(),
    };
    Ok(res)
}
