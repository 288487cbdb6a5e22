use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Upstream endpoint returning employee course records
    #[serde(default = "default_employee_api_url")]
    pub employee_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of nearest peers to consult per recommendation
    #[serde(default = "default_neighbor_count")]
    pub neighbor_count: usize,

    /// Maximum number of courses returned per recommendation
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
}

fn default_employee_api_url() -> String {
    "http://localhost:4000/api/admin/employee-courses".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_neighbor_count() -> usize {
    crate::services::similarity::DEFAULT_NEIGHBOR_COUNT
}

fn default_recommendation_limit() -> usize {
    crate::services::selector::DEFAULT_RECOMMENDATION_LIMIT
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
