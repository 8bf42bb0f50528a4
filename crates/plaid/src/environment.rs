//! Plaid environment selection.

const SANDBOX_URL: &str = "https://sandbox.plaid.com";
const DEVELOPMENT_URL: &str = "https://development.plaid.com";
const PRODUCTION_URL: &str = "https://production.plaid.com";

/// Plaid API environment.
///
/// Determines which upstream host the client talks to. The configuration
/// selector is case-insensitive; unset or unrecognized values fall back to
/// [`Environment::Sandbox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Development,
    Production,
}

impl Environment {
    /// Parse a configuration selector.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "production" => Self::Production,
            "development" => Self::Development,
            _ => Self::Sandbox,
        }
    }

    /// Base URL of the Plaid REST API for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_URL,
            Self::Development => DEVELOPMENT_URL,
            Self::Production => PRODUCTION_URL,
        }
    }
}
