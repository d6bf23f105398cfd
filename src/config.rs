use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tide::log;
use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "GOOGLE_GENAI_API_KEY";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5050;

/// Variables parsed from a `.env` file. They are only consulted for names the
/// process environment does not define.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Read `.env` from the working directory or one of its parents.
    pub fn load() -> Self {
        Self::from_entries(dotenv::dotenv_iter(), ".env")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::from_entries(dotenv::from_path_iter(path), &path.display().to_string())
    }

    fn from_entries<I>(entries: Result<I, dotenv::Error>, source: &str) -> Self
    where
        I: Iterator<Item = Result<(String, String), dotenv::Error>>,
    {
        let entries = match entries {
            Ok(entries) => entries,
            Err(e) if e.not_found() => {
                log::debug!("No {} file found, using process environment only", source);
                return Self::default();
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", source, e);
                return Self::default();
            }
        };

        let mut vars = HashMap::new();
        for entry in entries {
            match entry {
                Ok((name, value)) => {
                    vars.insert(name, value);
                }
                Err(dotenv::Error::Io(e)) => {
                    log::warn!("Stopped reading {}: {}", source, e);
                    break;
                }
                // LineParse carries the raw line; keep it out of the log.
                Err(dotenv::Error::LineParse(..)) => {
                    log::warn!("Skipping unparsable entry after {} variables in {}", vars.len(), source);
                }
                Err(e) => log::warn!("Skipping entry in {}: {}", source, e),
            }
        }
        log::info!("Loaded {} variables from {}", vars.len(), source);
        EnvFile { vars }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Snapshot of the environment taken once at startup and shared, read-only,
/// with every request handler.
#[derive(Clone)]
pub struct Config {
    api_key: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Build the snapshot from the process environment, falling back to `env_file`.
    pub fn from_env(env_file: &EnvFile) -> Self {
        Self::from_layers(|name| std::env::var(name).ok(), env_file)
    }

    /// A variable defined by `process`, even as an empty string, shadows the file.
    pub fn from_layers<F>(process: F, env_file: &EnvFile) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| process(name).or_else(|| env_file.get(name)))
    }

    /// Build the snapshot from an arbitrary variable lookup.
    /// An empty value is treated the same as an unset one.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            api_key: lookup(API_KEY_VAR).filter(|value| !value.is_empty()),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigError::MissingConfiguration { name: API_KEY_VAR })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_some() { "<redacted>" } else { "<unset>" };
        f.debug_struct("Config")
            .field("api_key", &api_key)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
