// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client layer for the Job Processing API.
//!
//! [`resolve_endpoint`] picks the backend host once at startup, and
//! [`ApiClient`] exposes every backend capability as a typed async method
//! over the resolved [`Endpoint`]. All failures are normalized into the
//! single [`ApiError`] shape.
//!
//! ```no_run
//! use jobscout_client::{resolve_endpoint, ApiClient, EndpointConfig};
//!
//! # async fn demo() -> jobscout_client::Result<()> {
//! let endpoint = resolve_endpoint(EndpointConfig::default()).await;
//! let client = ApiClient::new(endpoint);
//! let jobs = client.list_jobs(Some(20)).await?;
//! println!("{} open roles", jobs.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;

/// User-Agent sent by the probe and by every API request.
pub(crate) const USER_AGENT: &str = concat!("jobscout/", env!("CARGO_PKG_VERSION"));

pub use client::ApiClient;
pub use endpoint::{
	resolve_endpoint, Endpoint, EndpointConfig, EndpointSource, LOCAL_BASE_URL,
	PRODUCTION_BASE_URL, SENTINEL_MESSAGE,
};
pub use error::{
	ApiError, ApiErrorKind, Result, EMPTY_SKILLS_MESSAGE, FILE_TOO_LARGE_MESSAGE,
	INVALID_RESPONSE_MESSAGE, NETWORK_ERROR_MESSAGE, SERVER_ERROR_MESSAGE,
	UNSUPPORTED_FILE_TYPE_MESSAGE,
};
