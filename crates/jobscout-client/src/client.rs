// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed client for the Job Processing API.
//!
//! One method per backend capability; every method is a single outbound
//! request with no retries and no caching. All failures surface as
//! [`ApiError`] via one normalization path, so callers can rely on the
//! error shape regardless of which operation failed.

use jobscout_core::{
	Acknowledgement, Job, RecommendedJob, RecommendedSkill, ResumeAnalysis, UniversityStats,
	User,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::endpoint::Endpoint;
use crate::error::{
	ApiError, Result, EMPTY_SKILLS_MESSAGE, FILE_TOO_LARGE_MESSAGE, INVALID_RESPONSE_MESSAGE,
	SERVER_ERROR_MESSAGE, UNSUPPORTED_FILE_TYPE_MESSAGE,
};

/// Client for the Job Processing API over a resolved [`Endpoint`].
#[derive(Debug, Clone)]
pub struct ApiClient {
	http_client: Client,
	endpoint: Endpoint,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
	username: &'a str,
	password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
	detail: Option<String>,
	message: Option<String>,
}

impl ApiClient {
	/// Creates a client over an already-resolved endpoint.
	///
	/// Requests carry no timeout; the startup probe in
	/// [`crate::resolve_endpoint`] is the only time-bounded call in this
	/// crate.
	pub fn new(endpoint: Endpoint) -> Self {
		let http_client = Client::builder()
			.user_agent(crate::USER_AGENT)
			.build()
			.expect("failed to build HTTP client");
		Self {
			http_client,
			endpoint,
		}
	}

	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}

	/// Authenticates with the backend. The returned [`User`] is the whole
	/// session; the backend issues no token.
	#[instrument(skip(self, password), fields(username = %username))]
	pub async fn login(&self, username: &str, password: &str) -> Result<User> {
		let request = self
			.http_client
			.post(self.url("/login"))
			.json(&Credentials { username, password });
		self.execute(request).await
	}

	/// Registers a new account. Registration does not establish a session;
	/// callers follow up with [`ApiClient::login`] using the same
	/// credentials.
	#[instrument(skip(self, password), fields(username = %username))]
	pub async fn register(&self, username: &str, password: &str) -> Result<Acknowledgement> {
		let request = self
			.http_client
			.post(self.url("/signup"))
			.json(&Credentials { username, password });
		self.execute(request).await
	}

	/// Lists job postings, newest first, optionally capped at `limit`.
	#[instrument(skip(self))]
	pub async fn list_jobs(&self, limit: Option<u32>) -> Result<Vec<Job>> {
		let mut request = self.http_client.get(self.url("/jobs/all"));
		if let Some(limit) = limit {
			request = request.query(&[("limit", limit)]);
		}
		self.execute(request).await
	}

	/// Lists jobs posted by an exact company name.
	#[instrument(skip(self))]
	pub async fn jobs_by_company(&self, company: &str) -> Result<Vec<Job>> {
		let path = format!("/jobs/company/{}", urlencoding::encode(company));
		self.get_json(&path).await
	}

	/// Lists jobs whose title contains `title`.
	#[instrument(skip(self))]
	pub async fn jobs_by_title(&self, title: &str) -> Result<Vec<Job>> {
		let path = format!("/jobs/title/{}", urlencoding::encode(title));
		self.get_json(&path).await
	}

	/// Lists jobs matching any of `skills`. Each skill is percent-encoded
	/// individually and the encoded values are joined with commas, so a
	/// comma inside a skill never splits it into two.
	///
	/// An empty `skills` slice is rejected locally without sending a
	/// request.
	#[instrument(skip(self, skills), fields(count = skills.len()))]
	pub async fn jobs_by_skills<S: AsRef<str>>(&self, skills: &[S]) -> Result<Vec<Job>> {
		if skills.is_empty() {
			return Err(ApiError::new(400, EMPTY_SKILLS_MESSAGE));
		}
		let path = format!("/jobs/skills/{}", encoded_skills_segment(skills));
		self.get_json(&path).await
	}

	/// Uploads a PDF resume for analysis. Size and type are validated by
	/// the backend; its 413/415 verdicts map to the fixed messages in
	/// [`crate::error`].
	#[instrument(skip(self, file), fields(username = %username, file_name = %file_name, bytes = file.len()))]
	pub async fn upload_resume(
		&self,
		file: Vec<u8>,
		file_name: &str,
		username: &str,
	) -> Result<ResumeAnalysis> {
		let part = Part::bytes(file)
			.file_name(file_name.to_owned())
			.mime_str("application/pdf")
			.expect("failed to set resume mime type");
		let form = Form::new()
			.part("file", part)
			.text("username", username.to_owned());
		let request = self
			.http_client
			.post(self.url("/upload_resume"))
			.multipart(form);
		self.execute(request).await
	}

	/// Returns the job recommendations from the stored analysis of the
	/// account's most recent resume upload.
	#[instrument(skip(self, password), fields(username = %username))]
	pub async fn recommended_jobs(
		&self,
		username: &str,
		password: &str,
	) -> Result<Vec<RecommendedJob>> {
		let analysis = self.stored_analysis(username, password).await?;
		Ok(analysis.recommended_jobs)
	}

	/// Returns the skills-to-learn recommendations from the stored
	/// analysis of the account's most recent resume upload.
	#[instrument(skip(self, password), fields(username = %username))]
	pub async fn recommended_skills(
		&self,
		username: &str,
		password: &str,
	) -> Result<Vec<RecommendedSkill>> {
		let analysis = self.stored_analysis(username, password).await?;
		Ok(analysis.recommended_skills_to_learn)
	}

	/// Market trend series for the analytics views.
	#[instrument(skip(self))]
	pub async fn market_trends(&self) -> Result<Value> {
		self.get_json("/get_market_trend").await
	}

	/// Industry growth figures for the analytics views.
	#[instrument(skip(self))]
	pub async fn industry_growth(&self) -> Result<Value> {
		self.get_json("/get_industry_growth").await
	}

	/// Processed Singapore labor statistics.
	#[instrument(skip(self))]
	pub async fn labor_stats(&self) -> Result<Value> {
		self.get_json("/processed_singapore_labor_stats").await
	}

	/// Graduate starting pay series.
	#[instrument(skip(self))]
	pub async fn graduate_starting_pay(&self) -> Result<Value> {
		self.get_json("/get_graduate_starting_pay_data").await
	}

	/// The most requested skills across all postings, optionally capped at
	/// `limit`.
	#[instrument(skip(self))]
	pub async fn top_skills(&self, limit: Option<u32>) -> Result<Value> {
		let mut request = self.http_client.get(self.url("/top_skills"));
		if let Some(limit) = limit {
			request = request.query(&[("limit", limit)]);
		}
		self.execute(request).await
	}

	/// Graduate employment statistics nested by university, faculty, and
	/// course.
	#[instrument(skip(self))]
	pub async fn university_stats(&self) -> Result<UniversityStats> {
		self.get_json("/university_stats").await
	}

	async fn stored_analysis(&self, username: &str, password: &str) -> Result<ResumeAnalysis> {
		let request = self
			.http_client
			.get(self.url("/upload_resume"))
			.query(&[("username", username), ("password", password)]);
		self.execute(request).await
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		self.execute(self.http_client.get(self.url(path))).await
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.endpoint.base_url(), path)
	}

	/// Sends `request` and maps every outcome onto the error contract.
	async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
		let response = request.send().await.map_err(|error| {
			warn!(error = %error, "Request failed before a response arrived");
			ApiError::network()
		})?;

		let status = response.status();
		debug!(status = %status, "Received response");

		if !status.is_success() {
			return Err(normalize_failure(status, response).await);
		}

		response.json::<T>().await.map_err(|error| {
			warn!(error = %error, "Response body did not decode");
			ApiError::new(status.as_u16(), INVALID_RESPONSE_MESSAGE)
		})
	}
}

fn encoded_skills_segment<S: AsRef<str>>(skills: &[S]) -> String {
	skills
		.iter()
		.map(|skill| urlencoding::encode(skill.as_ref()))
		.collect::<Vec<_>>()
		.join(",")
}

/// Maps a non-2xx response to the fixed message table. 500, 413 and 415
/// carry fixed messages regardless of body; any other status prefers the
/// body's `detail` field, then `message`, then a generic line.
async fn normalize_failure(status: StatusCode, response: Response) -> ApiError {
	let code = status.as_u16();
	match code {
		500 => ApiError::new(code, SERVER_ERROR_MESSAGE),
		413 => ApiError::new(code, FILE_TOO_LARGE_MESSAGE),
		415 => ApiError::new(code, UNSUPPORTED_FILE_TYPE_MESSAGE),
		_ => {
			let message = response
				.json::<ErrorBody>()
				.await
				.ok()
				.and_then(|body| body.detail.or(body.message))
				.unwrap_or_else(|| format!("Request failed with status {code}"));
			ApiError::new(code, message)
		}
	}
}
