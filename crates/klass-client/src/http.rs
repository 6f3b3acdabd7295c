//! Blocking HTTP transport for the KLASS API.

use std::sync::OnceLock;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use klass_model::SsbSectionsResponse;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Synchronous client for the KLASS API.
///
/// Holds the reqwest client and a per-client cache of the SSB section
/// list (fetched lazily, at most once). All endpoint methods live in
/// the `endpoints` module; wrappers in this crate take the client by
/// reference and never store it.
pub struct KlassClient {
    config: ClientConfig,
    http: Client,
    sections: OnceLock<Vec<String>>,
}

impl KlassClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            config,
            http,
            sections: OnceLock::new(),
        })
    }

    /// A client against the production KLASS instance.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a JSON resource relative to the base URL.
    ///
    /// Non-2xx responses surface as [`ClientError::Http`] with the body
    /// included, decode failures as [`ClientError::Decode`]. No retries.
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.config.url(path);
        debug!(%url, ?query, "requesting");
        let response = self.http.get(&url).query(query).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                url,
                body,
            });
        }
        serde_json::from_str(&body).map_err(|source| ClientError::Decode { url, source })
    }

    /// The full SSB section list, fetched once per client.
    pub fn section_names(&self) -> Result<&[String]> {
        if let Some(names) = self.sections.get() {
            return Ok(names);
        }
        let response: SsbSectionsResponse = self.get_json("ssbsection", &[])?;
        let names: Vec<String> = response.names().map(str::to_string).collect();
        Ok(self.sections.get_or_init(|| names))
    }

    /// Resolves an `ssbSection` argument against the section list.
    ///
    /// The API wants the full section name ("320 - Avdeling for ...");
    /// a bare section number is expanded to the matching name, and a
    /// full name is checked for membership.
    pub fn resolve_section(&self, section: &str) -> Result<String> {
        let wanted = section.trim();
        let names = self.section_names()?;
        if !wanted.is_empty() && wanted.chars().all(|c| c.is_ascii_digit()) {
            let found = names
                .iter()
                .find(|name| name.split_whitespace().next() == Some(wanted));
            return found.cloned().ok_or_else(|| ClientError::InvalidParameter {
                name: "ssbSection".to_string(),
                reason: format!("no SSB section numbered '{wanted}'"),
            });
        }
        names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| ClientError::InvalidParameter {
                name: "ssbSection".to_string(),
                reason: format!("'{section}' is not a known SSB section"),
            })
    }
}
