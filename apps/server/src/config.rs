use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub plaid_client_id: String,
    pub plaid_secret: String,
    /// Legacy credential; may be empty.
    pub plaid_public_key: String,
    /// Environment selector: sandbox, development or production.
    pub plaid_environment: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("PB_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid PB_LISTEN_ADDR");
        let cors_allow = std::env::var("PB_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("PB_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            plaid_client_id: std::env::var("PLAID_CLIENT_ID").unwrap_or_default(),
            plaid_secret: std::env::var("PLAID_SECRET").unwrap_or_default(),
            plaid_public_key: std::env::var("PLAID_PUBLIC_KEY").unwrap_or_default(),
            plaid_environment: std::env::var("PLAID_ENVIRONMENT").unwrap_or_default(),
        }
    }
}
