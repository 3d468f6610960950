//! Contact-enrichment gateway.
//!
//! Given a founder's name parts and a company domain, resolves an email
//! address: one bounded request to the people-search API when a key is
//! configured, and a deterministic synthetic address in every other case.
//! The gateway never fails and never blocks extraction — any lookup
//! problem degrades to the synthetic address.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use leadbase_shared::{LeadbaseError, Result};

/// People-search endpoint of the enrichment provider.
const DEFAULT_ENDPOINT: &str = "https://api.apollo.io/v1/people/search";

/// Timeout for the single lookup request. A stuck external call must not
/// stall a processing run.
const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// User-Agent string for lookup requests.
const USER_AGENT: &str = concat!("Leadbase/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    q_person_first_name: &'a str,
    q_person_last_name: &'a str,
    q_organization_domains: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct Person {
    #[serde(default)]
    email: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Enrichment API client. Cheap to clone per processing run.
#[derive(Debug, Clone)]
pub struct EnrichClient {
    api_key: Option<String>,
    endpoint: String,
    client: reqwest::Client,
}

impl EnrichClient {
    /// Build a client. `api_key: None` means synthetic addresses only.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Build a client against a specific endpoint (used by tests).
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()
            .map_err(|e| LeadbaseError::Enrichment(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Resolve an email address for the given person at the given domain.
    ///
    /// Single attempt, no retry; every failure path returns the synthetic
    /// address instead of an error.
    pub async fn lookup_email(&self, first_name: &str, last_name: &str, domain: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no enrichment API key configured, using synthetic address");
            return synthetic_email(first_name, last_name, domain);
        };

        match self.search(api_key, first_name, last_name, domain).await {
            Ok(Some(email)) => email,
            Ok(None) => {
                debug!(first_name, last_name, domain, "no email in lookup result");
                synthetic_email(first_name, last_name, domain)
            }
            Err(e) => {
                warn!(error = %e, first_name, last_name, domain, "email lookup failed");
                synthetic_email(first_name, last_name, domain)
            }
        }
    }

    /// Issue the search request and pull the first returned email, if any.
    async fn search(
        &self,
        api_key: &str,
        first_name: &str,
        last_name: &str,
        domain: &str,
    ) -> Result<Option<String>> {
        let payload = SearchRequest {
            api_key,
            q_person_first_name: first_name,
            q_person_last_name: last_name,
            q_organization_domains: domain,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LeadbaseError::Enrichment(format!("{}: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadbaseError::Enrichment(format!(
                "{}: HTTP {status}",
                self.endpoint
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| LeadbaseError::Enrichment(format!("malformed response: {e}")))?;

        // Only the first returned person is considered.
        Ok(body
            .people
            .into_iter()
            .next()
            .map(|p| p.email)
            .filter(|email| !email.is_empty()))
    }
}

/// Deterministic placeholder address: `first.last@domain`, lowercased.
pub fn synthetic_email(first_name: &str, last_name: &str, domain: &str) -> String {
    format!(
        "{}.{}@{domain}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn synthetic_email_lowercases() {
        assert_eq!(
            synthetic_email("John", "Smith", "acme.com"),
            "john.smith@acme.com"
        );
        assert_eq!(synthetic_email("Ada", "", "acme.io"), "ada.@acme.io");
    }

    #[tokio::test]
    async fn no_key_short_circuits_without_request() {
        // Endpoint is unroutable; a request attempt would error, but the
        // missing key means none is made.
        let client = EnrichClient::with_endpoint(None, "http://127.0.0.1:1/none").unwrap();
        let email = client.lookup_email("John", "Smith", "acme.com").await;
        assert_eq!(email, "john.smith@acme.com");
    }

    #[tokio::test]
    async fn lookup_returns_api_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/people/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "people": [{"email": "jsmith@acme.com"}]
            })))
            .mount(&server)
            .await;

        let client = EnrichClient::with_endpoint(
            Some("test-key".into()),
            format!("{}/v1/people/search", server.uri()),
        )
        .unwrap();

        let email = client.lookup_email("John", "Smith", "acme.com").await;
        assert_eq!(email, "jsmith@acme.com");
    }

    #[tokio::test]
    async fn empty_people_list_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/people/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"people": []})),
            )
            .mount(&server)
            .await;

        let client = EnrichClient::with_endpoint(
            Some("test-key".into()),
            format!("{}/v1/people/search", server.uri()),
        )
        .unwrap();

        let email = client.lookup_email("John", "Smith", "acme.com").await;
        assert_eq!(email, "john.smith@acme.com");
    }

    #[tokio::test]
    async fn blank_email_in_result_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/people/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "people": [{"email": ""}]
            })))
            .mount(&server)
            .await;

        let client = EnrichClient::with_endpoint(
            Some("test-key".into()),
            format!("{}/v1/people/search", server.uri()),
        )
        .unwrap();

        let email = client.lookup_email("John", "Smith", "acme.com").await;
        assert_eq!(email, "john.smith@acme.com");
    }

    #[tokio::test]
    async fn malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/people/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = EnrichClient::with_endpoint(
            Some("test-key".into()),
            format!("{}/v1/people/search", server.uri()),
        )
        .unwrap();

        let email = client.lookup_email("John", "Smith", "acme.com").await;
        assert_eq!(email, "john.smith@acme.com");
    }

    #[tokio::test]
    async fn http_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/people/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = EnrichClient::with_endpoint(
            Some("test-key".into()),
            format!("{}/v1/people/search", server.uri()),
        )
        .unwrap();

        let email = client.lookup_email("John", "Smith", "acme.com").await;
        assert_eq!(email, "john.smith@acme.com");
    }
}
