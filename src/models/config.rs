use anyhow::Error;
use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.json";
const ENV_KEYS: [&str; 4] = ["port", "host", "log_level", "max_body_bytes"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub max_body_bytes: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            port: 5000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    /// Defaults, then `config.json` if present, then `PORT`, `HOST`,
    /// `LOG_LEVEL` and `MAX_BODY_BYTES` from the environment.
    pub fn load() -> Result<Config, Error> {
        Config::from_figment(Config::figment())
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Json::file(CONFIG_FILE))
            .merge(Env::raw().only(&ENV_KEYS))
    }

    fn from_figment(figment: Figment) -> Result<Config, Error> {
        let config = figment.extract::<Config>()?;
        Ok(config)
    }
}
