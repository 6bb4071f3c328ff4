use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Secret used to sign session tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Directory holding uploaded poster assets
    #[serde(default = "default_poster_dir")]
    pub poster_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_jwt_secret() -> String {
    // Development fallback only; set JWT_SECRET in any real deployment.
    "insecure-dev-secret".to_string()
}

fn default_poster_dir() -> String {
    "posters".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
