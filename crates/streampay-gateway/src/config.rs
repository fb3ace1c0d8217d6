//! Gateway Configuration
//!
//! Credentials and endpoint selection. The gateway has a sandbox and a live
//! variant of the same initiation endpoint; which one is used depends on the
//! configured environment.

use crate::resolve::{self, Source};
use crate::Result;

const DEFAULT_SANDBOX_URL: &str = "https://sandbox.pay.streampay.example/api/v1/initiate";
const DEFAULT_LIVE_URL: &str = "https://pay.streampay.example/api/v1/initiate";

/// Which gateway variant to talk to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    /// Test transactions, no real charges
    Sandbox,
    /// Real transactions
    Live,
}

impl Environment {
    /// Lenient parse; anything that is not clearly live means sandbox
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "live" | "prod" | "production" => Environment::Live,
            _ => Environment::Sandbox,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Live => "live",
        }
    }
}

/// Gateway client configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Sandbox or live
    pub environment: Environment,

    /// API client id, embedded in every request body
    pub client_id: String,

    /// API client key, embedded in every request body
    pub client_key: String,

    /// Initiation endpoint for sandbox transactions
    pub sandbox_url: String,

    /// Initiation endpoint for live transactions
    pub live_url: String,
}

impl GatewayConfig {
    /// Create a config with default endpoint URLs
    pub fn new(
        environment: Environment,
        client_id: impl Into<String>,
        client_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            client_id: client_id.into(),
            client_key: client_key.into(),
            sandbox_url: DEFAULT_SANDBOX_URL.into(),
            live_url: DEFAULT_LIVE_URL.into(),
        }
    }

    /// Create from environment variables
    ///
    /// `STREAMPAY_CLIENT_ID` and `STREAMPAY_CLIENT_KEY` are required;
    /// `STREAMPAY_GATEWAY_ENV`, `STREAMPAY_SANDBOX_URL` and
    /// `STREAMPAY_LIVE_URL` fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let environment = resolve::first(&[
            Source::Env("STREAMPAY_GATEWAY_ENV"),
            Source::Default("sandbox"),
        ])
        .map(|v| Environment::parse(&v))
        .unwrap_or(Environment::Sandbox);

        let client_id = resolve::required(
            "STREAMPAY_CLIENT_ID",
            &[Source::Env("STREAMPAY_CLIENT_ID")],
        )?;
        let client_key = resolve::required(
            "STREAMPAY_CLIENT_KEY",
            &[Source::Env("STREAMPAY_CLIENT_KEY")],
        )?;

        let sandbox_url = resolve::first(&[
            Source::Env("STREAMPAY_SANDBOX_URL"),
            Source::Default(DEFAULT_SANDBOX_URL),
        ])
        .unwrap_or_else(|| DEFAULT_SANDBOX_URL.into());
        let live_url = resolve::first(&[
            Source::Env("STREAMPAY_LIVE_URL"),
            Source::Default(DEFAULT_LIVE_URL),
        ])
        .unwrap_or_else(|| DEFAULT_LIVE_URL.into());

        Ok(Self {
            environment,
            client_id,
            client_key,
            sandbox_url,
            live_url,
        })
    }

    /// The initiation endpoint for the configured environment
    pub fn endpoint(&self) -> &str {
        match self.environment {
            Environment::Sandbox => &self.sandbox_url,
            Environment::Live => &self.live_url,
        }
    }
}
