//! ADrive quota API client
//!
//! Obtains a usage snapshot for one account via the pool-based ADrive
//! API. A check is a strictly linear sequence of four POST calls with
//! JSON bodies:
//!
//! 1. **getPoolHost** — resolve which pool host serves the account
//! 2. **login** — establish the session (forces logout of any other
//!    active session for the same account)
//! 3. **getUsage** — fetch total/used/available capacity and
//!    percent-used
//! 4. **logout** — invalidate the session, best-effort
//!
//! Session continuity between login, getUsage and logout rides on the
//! client's cookie store. Every request carries a bounded timeout so a
//! stalled transport surfaces as a network error instead of hanging
//! the monitoring scheduler.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{CheckError, Result};
use super::session::{Session, SessionArtifact};
use super::types::{parse_capacity, Credentials, UsageSnapshot};

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the pool-discovery endpoint
const DISCOVERY_BASE_URL: &str = "https://www.adrive.com";

/// Pool discovery endpoint path
const POOL_HOST_PATH: &str = "/API/getPoolHost";

/// Login endpoint path (on the resolved pool host)
const LOGIN_PATH: &str = "/API/login";

/// Usage endpoint path (on the resolved pool host)
const USAGE_PATH: &str = "/API/getUsage";

/// Logout endpoint path (on the resolved pool host)
const LOGOUT_PATH: &str = "/API/logout";

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// API Response Types
// ============================================================================

/// Response from the pool-discovery endpoint
#[derive(Debug, Deserialize)]
struct PoolHostResponse {
    /// Pool host assigned to the account
    pool: Option<String>,
}

/// Response from the login endpoint
///
/// The API reports the login outcome as a list of `[kind, detail]`
/// message pairs rather than an HTTP status.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    /// Message entries; the first one carries the login outcome
    #[serde(default)]
    messages: Vec<Vec<String>>,
}

/// Response from the usage endpoint
#[derive(Debug, Deserialize)]
struct UsageResponse {
    /// Total capacity, formatted as `"<float> GB"`
    total: String,
    /// Used capacity, formatted as `"<float> GB"`
    used: String,
    /// Available capacity, formatted as `"<float> GB"`
    available: String,
    /// Percent of capacity used (0 - 100)
    du: f64,
}

impl TryFrom<UsageResponse> for UsageSnapshot {
    type Error = CheckError;

    fn try_from(response: UsageResponse) -> Result<UsageSnapshot> {
        Ok(UsageSnapshot {
            total_gb: parse_capacity(&response.total)?,
            used_gb: parse_capacity(&response.used)?,
            available_gb: parse_capacity(&response.available)?,
            percent_used: response.du,
        })
    }
}

/// Inspect the login message list for an error entry
///
/// The first message's kind field signals failure via a
/// case-insensitive "error" substring; the detail field then holds the
/// server-provided reason.
fn check_login_messages(response: &LoginResponse) -> Result<()> {
    if let Some(first) = response.messages.first() {
        let kind = first.first().map(String::as_str).unwrap_or("");
        if kind.to_lowercase().contains("error") {
            let detail = first
                .get(1)
                .map(String::as_str)
                .unwrap_or("no detail provided")
                .to_string();
            return Err(CheckError::Auth(detail));
        }
    }
    Ok(())
}

// ============================================================================
// AdriveClient
// ============================================================================

/// Client for the ADrive quota API
///
/// Holds one HTTP client with a cookie store for the whole invocation;
/// the login cookie is presented automatically on the usage and logout
/// calls.
pub struct AdriveClient {
    /// HTTP client for API requests
    client: Client,

    /// Base URL for pool discovery
    discovery_base: String,
}

impl AdriveClient {
    /// Create a client against the production discovery endpoint
    pub fn new() -> Result<Self> {
        Self::with_discovery_base(DISCOVERY_BASE_URL)
    }

    /// Create a client with a custom discovery base URL
    ///
    /// Useful for testing or non-standard deployments. Fails if the
    /// HTTP client cannot be built; session continuity depends on the
    /// cookie store, so there is no degraded fallback.
    pub fn with_discovery_base(discovery_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            discovery_base: discovery_base.into(),
        })
    }

    /// Resolve which pool host serves the account
    pub async fn resolve_pool(&self, email: &str) -> Result<String> {
        let url = format!("{}{}", self.discovery_base, POOL_HOST_PATH);
        log::debug!("[adrive] Resolving pool host for account");

        let body = serde_json::json!({ "email": email });
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[adrive] Pool discovery failed: HTTP {}", status);
            return Err(CheckError::Api(format!(
                "Pool discovery returned HTTP {}",
                status
            )));
        }

        let parsed: PoolHostResponse = response.json().await.map_err(|e| {
            CheckError::Parse(format!("Invalid pool discovery response: {}", e))
        })?;

        match parsed.pool {
            Some(pool) if !pool.is_empty() => {
                log::debug!("[adrive] Resolved pool host: {}", pool);
                Ok(pool)
            }
            _ => Err(CheckError::Resolution(
                "no pool host in discovery response".to_string(),
            )),
        }
    }

    /// Log in to the resolved pool and establish a session
    ///
    /// Forces logout of any other active session for the same account.
    /// The session artifact is created before the request goes out so
    /// the authentication-failure path still owns it and cleans it up.
    pub async fn login(&self, pool: &str, credentials: &Credentials) -> Result<Session> {
        let artifact = SessionArtifact::create()?;
        let url = format!("https://{}{}", pool, LOGIN_PATH);
        log::debug!("[adrive] Logging in to pool {}", pool);

        let body = serde_json::json!({
            "email": credentials.email,
            "password": credentials.password,
            "forceLogout": "1",
        });
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[adrive] Login failed: HTTP {}", status);
            return Err(CheckError::Api(format!("Login returned HTTP {}", status)));
        }

        let parsed: LoginResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Parse(format!("Invalid login response: {}", e)))?;
        check_login_messages(&parsed)?;

        artifact.record(pool)?;
        log::info!("[adrive] Login succeeded on pool {}", pool);
        Ok(Session::new(pool, artifact))
    }

    /// Fetch the usage snapshot for the logged-in account
    pub async fn fetch_usage(&self, session: &Session) -> Result<UsageSnapshot> {
        let url = format!("https://{}{}", session.pool(), USAGE_PATH);
        log::debug!("[adrive] Fetching usage from pool {}", session.pool());

        let body = serde_json::json!({});
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[adrive] Usage fetch failed: HTTP {}", status);
            return Err(CheckError::Api(format!(
                "Usage fetch returned HTTP {}",
                status
            )));
        }

        let parsed: UsageResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Parse(format!("Invalid usage response: {}", e)))?;

        let snapshot = UsageSnapshot::try_from(parsed)?;
        log::debug!(
            "[adrive] Usage: {}GB of {}GB used ({}%)",
            snapshot.used_gb,
            snapshot.total_gb,
            snapshot.percent_used
        );
        Ok(snapshot)
    }

    /// Invalidate the session on the server, best-effort
    ///
    /// The remote side effect is not critical to the reported result,
    /// so a failure here is logged and swallowed.
    pub async fn logout(&self, session: &Session) {
        let url = format!("https://{}{}", session.pool(), LOGOUT_PATH);
        log::debug!("[adrive] Logging out from pool {}", session.pool());

        let body = serde_json::json!({});
        match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                log::debug!("[adrive] Logout succeeded");
            }
            Ok(response) => {
                log::warn!("[adrive] Logout returned HTTP {}", response.status());
            }
            Err(e) => {
                log::warn!("[adrive] Logout request failed: {}", e);
            }
        }
    }

    /// Run the full check sequence for one account
    ///
    /// Resolve pool, log in, fetch usage, then log out regardless of
    /// the fetch outcome. The session (and its artifact) is released
    /// on every path out of this function.
    pub async fn check(&self, credentials: &Credentials) -> Result<UsageSnapshot> {
        let pool = self.resolve_pool(&credentials.email).await?;
        let session = self.login(&pool, credentials).await?;

        let usage = self.fetch_usage(&session).await;
        self.logout(&session).await;

        usage
    }
}

// ============================================================================
// Tests
// ============================================================================
