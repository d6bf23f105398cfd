use tide::http::headers::HeaderValue;
use tide::security::{CorsMiddleware, Origin};
use tide::Server;
use crate::api_key;
use crate::config::Config;

/// Any origin, method and header may be used; credentials are never allowed alongside the wildcard.
pub fn cors() -> tide::Result<CorsMiddleware> {
    let wildcard: HeaderValue = "*".parse()?;
    Ok(CorsMiddleware::new()
        .allow_origin(Origin::Any)
        .allow_methods(wildcard.clone())
        .allow_headers(wildcard)
        .allow_credentials(false))
}

pub fn build_app(config: Config) -> tide::Result<Server<Config>> {
    let mut app = tide::with_state(config);
    app.with(cors()?);
    app.at("/api-key").get(api_key::get_api_key);
    Ok(app)
}
