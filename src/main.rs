use tide::log;
use femme::LevelFilter;
use crate::config::{Config, EnvFile, API_KEY_VAR};

mod api_key;
mod config;
mod error;
mod server;

#[async_std::main]
async fn main() -> tide::Result<()> {
    tide::log::with_level(LevelFilter::Info);
    let env_file = EnvFile::load();

    let config = Config::from_env(&env_file);
    if let Err(e) = config.api_key() {
        log::warn!("{}; /api-key will answer with an error until {} is set", e, API_KEY_VAR);
    }
    log::debug!("Starting with {:?}", config);

    let addr = config.listen_addr();
    let app = server::build_app(config)?;
    log::info!("Server running on http://{}", addr);
    app.listen(addr).await?;
    Ok(())
}
