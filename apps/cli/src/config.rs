use std::path::PathBuf;

pub struct Config {
    pub state_path: PathBuf,
    pub log_format: String,
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let state_path = std::env::var("CARTEIRA_STATE_PATH")
            .unwrap_or_else(|_| "./data/carteira.json".into())
            .into();
        let log_format = std::env::var("CARTEIRA_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        let pretty = std::env::var("CARTEIRA_PRETTY")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);
        Self {
            state_path,
            log_format,
            pretty,
        }
    }
}
