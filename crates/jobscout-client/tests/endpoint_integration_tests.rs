// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for endpoint resolution.
//!
//! Tests cover:
//! - Sentinel verification keeping the local host
//! - Wrong sentinel, probe errors, and slow probes selecting production
//! - The probe running exactly once, with no retries

use std::time::Duration;

use jobscout_client::{resolve_endpoint, EndpointConfig, EndpointSource, SENTINEL_MESSAGE};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTION: &str = "https://prod.example.com";

/// Probe config pointed at the mock server, with a short timeout so the
/// slow-probe test stays fast.
fn probe_config(local: &MockServer) -> EndpointConfig {
	EndpointConfig::new()
		.with_local_base_url(local.uri())
		.with_production_base_url(PRODUCTION)
		.with_probe_timeout(Duration::from_millis(250))
}

#[tokio::test]
async fn correct_sentinel_keeps_the_local_host() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(json!({ "message": SENTINEL_MESSAGE })),
		)
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Local);
	assert_eq!(endpoint.base_url(), server.uri());
}

#[tokio::test]
async fn wrong_sentinel_selects_production() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(
			ResponseTemplate::new(200).set_body_json(json!({ "message": "Some other API" })),
		)
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
	assert_eq!(endpoint.base_url(), PRODUCTION);
}

#[tokio::test]
async fn missing_message_field_selects_production() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
}

#[tokio::test]
async fn probe_error_status_selects_production() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
}

#[tokio::test]
async fn non_json_probe_body_selects_production() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>welcome</html>"))
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
}

#[tokio::test]
async fn slow_probe_times_out_and_selects_production() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({ "message": SENTINEL_MESSAGE }))
				.set_delay(Duration::from_millis(800)),
		)
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
	assert_eq!(endpoint.base_url(), PRODUCTION);
}

#[tokio::test]
async fn unreachable_local_host_selects_production() {
	let config = EndpointConfig::new()
		.with_local_base_url("http://invalid.invalid")
		.with_production_base_url(PRODUCTION)
		.with_probe_timeout(Duration::from_millis(250));

	let endpoint = resolve_endpoint(config).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
}

#[tokio::test]
async fn probe_runs_exactly_once() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/"))
		.respond_with(ResponseTemplate::new(500))
		.expect(1)
		.mount(&server)
		.await;

	let endpoint = resolve_endpoint(probe_config(&server)).await;

	assert_eq!(endpoint.source(), EndpointSource::Production);
	server.verify().await;
}
