// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-shot backend endpoint resolution.
//!
//! At startup the application probes the local development host once. If
//! the probe answers with the expected sentinel message within the timeout,
//! the local host is kept; on any other outcome (timeout, connection error,
//! non-2xx, wrong or missing sentinel) the production host is selected.
//! The resolved [`Endpoint`] is a plain value, so the choice cannot drift
//! afterwards even if the local backend comes up later.

use std::time::Duration;

use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Local development backend probed first.
pub const LOCAL_BASE_URL: &str = "http://localhost:8000";

/// Production backend used when the local probe fails.
pub const PRODUCTION_BASE_URL: &str = "https://orca-app-8ua27.ondigitalocean.app";

/// `message` value the backend root endpoint must return for a probe to
/// count as verified.
pub const SENTINEL_MESSAGE: &str = "Welcome to the Job Processing API";

const PROBE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Where a resolved base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
	/// The local probe answered with the sentinel.
	Local,
	/// The probe failed or answered with something else.
	Production,
	/// The base URL was supplied directly, skipping the probe.
	Fixed,
}

/// A resolved backend endpoint. Obtain one from [`resolve_endpoint`], or
/// from [`Endpoint::fixed`] when the base URL is already known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	base_url: String,
	source: EndpointSource,
}

impl Endpoint {
	/// Wraps `base_url` without probing. Trailing slashes are trimmed so
	/// path concatenation stays predictable.
	#[must_use]
	pub fn fixed(base_url: impl Into<String>) -> Self {
		Self {
			base_url: normalize_base(base_url.into()),
			source: EndpointSource::Fixed,
		}
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	#[must_use]
	pub fn source(&self) -> EndpointSource {
		self.source
	}
}

/// Probe configuration. The defaults match the shipped application; tests
/// point the URLs at mock servers and shorten the timeout.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
	local_base_url: String,
	production_base_url: String,
	probe_timeout: Duration,
}

impl Default for EndpointConfig {
	fn default() -> Self {
		Self {
			local_base_url: LOCAL_BASE_URL.to_string(),
			production_base_url: PRODUCTION_BASE_URL.to_string(),
			probe_timeout: PROBE_TIMEOUT,
		}
	}
}

impl EndpointConfig {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_local_base_url(mut self, url: impl Into<String>) -> Self {
		self.local_base_url = url.into();
		self
	}

	#[must_use]
	pub fn with_production_base_url(mut self, url: impl Into<String>) -> Self {
		self.production_base_url = url.into();
		self
	}

	#[must_use]
	pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
		self.probe_timeout = timeout;
		self
	}
}

#[derive(Debug, Deserialize)]
struct ProbeBody {
	message: Option<String>,
}

/// Resolves the backend endpoint by probing the configured local host once.
///
/// This never fails: every probe outcome maps to one of the two hosts. The
/// probe is the only request in the client layer that carries a timeout.
#[instrument(skip(config), fields(local = %config.local_base_url))]
pub async fn resolve_endpoint(config: EndpointConfig) -> Endpoint {
	let probe_client = reqwest::Client::builder()
		.user_agent(crate::USER_AGENT)
		.timeout(config.probe_timeout)
		.build()
		.expect("failed to build HTTP client");

	match probe(&probe_client, &config.local_base_url).await {
		Ok(Some(message)) if message == SENTINEL_MESSAGE => {
			info!(base_url = %config.local_base_url, "Local backend verified");
			Endpoint {
				base_url: normalize_base(config.local_base_url),
				source: EndpointSource::Local,
			}
		}
		Ok(message) => {
			warn!(?message, "Unexpected probe response, selecting production endpoint");
			Endpoint {
				base_url: normalize_base(config.production_base_url),
				source: EndpointSource::Production,
			}
		}
		Err(error) => {
			warn!(error = %error, "Local probe failed, selecting production endpoint");
			Endpoint {
				base_url: normalize_base(config.production_base_url),
				source: EndpointSource::Production,
			}
		}
	}
}

async fn probe(
	client: &reqwest::Client,
	base_url: &str,
) -> std::result::Result<Option<String>, reqwest::Error> {
	let body: ProbeBody = client
		.get(base_url)
		.send()
		.await?
		.error_for_status()?
		.json()
		.await?;
	Ok(body.message)
}

fn normalize_base(url: String) -> String {
	url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fixed_endpoint_trims_trailing_slashes() {
		let endpoint = Endpoint::fixed("http://localhost:9999///");
		assert_eq!(endpoint.base_url(), "http://localhost:9999");
		assert_eq!(endpoint.source(), EndpointSource::Fixed);
	}

	#[test]
	fn default_config_targets_the_shipped_hosts() {
		let config = EndpointConfig::default();
		assert_eq!(config.local_base_url, LOCAL_BASE_URL);
		assert_eq!(config.production_base_url, PRODUCTION_BASE_URL);
		assert_eq!(config.probe_timeout, Duration::from_millis(2000));
	}

	#[test]
	fn config_builders_override_each_field() {
		let config = EndpointConfig::new()
			.with_local_base_url("http://localhost:1234")
			.with_production_base_url("https://prod.example.com")
			.with_probe_timeout(Duration::from_millis(50));
		assert_eq!(config.local_base_url, "http://localhost:1234");
		assert_eq!(config.production_base_url, "https://prod.example.com");
		assert_eq!(config.probe_timeout, Duration::from_millis(50));
	}
}
