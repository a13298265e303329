use anyhow::Result;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub port: u16,
    pub upload_dir: String,
    pub runs_dir: String,
    pub user_name: String,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::builder()
            .set_default("port", 5000)?
            .set_default("upload_dir", "data/uploads")?
            .set_default("runs_dir", "data/runs")?
            .set_default("user_name", "John Doe")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("DATAMATCH"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            upload_dir: "data/uploads".to_string(),
            runs_dir: "data/runs".to_string(),
            user_name: "John Doe".to_string(),
            log_level: "info".to_string(),
        }
    }
}
