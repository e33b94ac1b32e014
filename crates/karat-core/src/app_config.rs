use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub products_path: PathBuf,
    pub static_dir: PathBuf,
    pub gold_api_key: String,
    pub gold_api_base_url: String,
    pub gold_request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("products_path", &self.products_path)
            .field("static_dir", &self.static_dir)
            .field("gold_api_key", &"[redacted]")
            .field("gold_api_base_url", &self.gold_api_base_url)
            .field(
                "gold_request_timeout_secs",
                &self.gold_request_timeout_secs,
            )
            .finish()
    }
}
