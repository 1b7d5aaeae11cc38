//! # Site Domain
//!
//! The merchant site's origin, checked in three independent steps: the
//! string must parse as a URL, must use secure transport, and its host must
//! sit under the allow-listed production suffix. Each failing step reports
//! its own violation so an integrator sees everything wrong at once.
//!
//! Matching is host-suffix based after a real URL parse, not pattern based.
//! `http://localhost:3000` is the single development exception; it bypasses
//! both the transport and the suffix rule.

use crate::error::{ValidationError, ValidationResult, Violation};
use serde::{Deserialize, Serialize};
use url::Url;

/// Allow-listed production host suffix
pub const PRODUCTION_SUFFIX: &str = ".ic0.app";

/// Development exception host
pub const DEV_HOST: &str = "localhost";

/// Development exception port
pub const DEV_PORT: u16 = 3000;

/// A validated merchant site origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteDomain(String);

impl SiteDomain {
    /// Validate a raw domain string, reporting violations under `"domain"`
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let mut violations = Vec::new();
        match Self::parse_at(input, "domain", &mut violations) {
            Some(domain) => Ok(domain),
            None => Err(ValidationError::new(violations)),
        }
    }

    /// Validate a raw domain string at the given field path, appending one
    /// violation per failing check. Returns the domain only if every check
    /// passed.
    pub(crate) fn parse_at(
        input: &str,
        path: &str,
        violations: &mut Vec<Violation>,
    ) -> Option<Self> {
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(_) => {
                violations.push(Violation::schema(
                    path,
                    format!("\"{}\" is not a well-formed URL", input),
                ));
                return None;
            }
        };

        let host = url.host_str().unwrap_or_default();
        let is_dev = host == DEV_HOST && url.port() == Some(DEV_PORT);
        let before = violations.len();

        if url.scheme() != "https" && !is_dev {
            violations.push(Violation::schema(
                path,
                format!(
                    "scheme \"{}\" is not allowed: checkout requires https outside the {}:{} development exception",
                    url.scheme(),
                    DEV_HOST,
                    DEV_PORT
                ),
            ));
        }

        if !host.ends_with(PRODUCTION_SUFFIX) && !is_dev {
            violations.push(Violation::schema(
                path,
                format!(
                    "host \"{}\" is outside the allowed {} suffix",
                    host, PRODUCTION_SUFFIX
                ),
            ));
        }

        if violations.len() == before {
            Some(SiteDomain(input.to_string()))
        } else {
            None
        }
    }

    /// The original domain string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SiteDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
