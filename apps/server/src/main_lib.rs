use std::sync::Arc;

use plaidbridge_plaid::{Credentials, Environment, PlaidApi, PlaidClient};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    /// The configured Plaid client. Built once at startup and read-only
    /// for the life of the process; shared across concurrent requests.
    pub plaid: Arc<dyn PlaidApi>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let environment = Environment::from_selector(&config.plaid_environment);
    tracing::info!("Plaid environment in use: {:?}", environment);
    let client = PlaidClient::new(
        Credentials {
            client_id: config.plaid_client_id.clone(),
            secret: config.plaid_secret.clone(),
            public_key: config.plaid_public_key.clone(),
        },
        environment,
    );
    Arc::new(AppState {
        plaid: Arc::new(client),
    })
}
