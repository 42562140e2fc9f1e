// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The uniform error shape for every client operation.
//!
//! Callers never see a raw transport or decode error. Everything is mapped
//! to [`ApiError`], whose `message` is ready to show to a user and whose
//! `status` is the HTTP status of the failed response, with `0` reserved
//! for "no response was received at all".

use thiserror::Error;

/// Shown when no response arrived: timeout, DNS failure, connection refused.
pub const NETWORK_ERROR_MESSAGE: &str =
	"Network error. Please check your connection and try again.";

/// Shown for HTTP 500 regardless of the response body.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// Shown for HTTP 413 regardless of the response body.
pub const FILE_TOO_LARGE_MESSAGE: &str = "File size too large. Maximum file size is 5MB.";

/// Shown for HTTP 415 regardless of the response body.
pub const UNSUPPORTED_FILE_TYPE_MESSAGE: &str =
	"Unsupported file type. Please upload a PDF file.";

/// Shown when a 2xx response body does not decode into the expected type.
pub const INVALID_RESPONSE_MESSAGE: &str = "Received an invalid response from the server.";

/// Rejection for a skills search with no skills. No request is sent.
pub const EMPTY_SKILLS_MESSAGE: &str = "At least one skill is required.";

/// Error record returned by every [`crate::ApiClient`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
	/// HTTP status of the failed response, or `0` when none was received.
	pub status: u16,
	/// User-presentable description of the failure.
	pub message: String,
}

impl ApiError {
	pub fn new(status: u16, message: impl Into<String>) -> Self {
		Self {
			status,
			message: message.into(),
		}
	}

	/// The request never produced a response.
	pub fn network() -> Self {
		Self::new(0, NETWORK_ERROR_MESSAGE)
	}

	/// Coarse classification by status range.
	pub fn kind(&self) -> ApiErrorKind {
		match self.status {
			0 => ApiErrorKind::Transport,
			400..=499 => ApiErrorKind::Client,
			500..=599 => ApiErrorKind::Server,
			_ => ApiErrorKind::Other,
		}
	}
}

/// Status-range classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
	/// No HTTP response was received (status 0).
	Transport,
	/// 4xx: the request was rejected.
	Client,
	/// 5xx: the backend failed.
	Server,
	/// Any other status, including a 2xx whose body failed to decode.
	Other,
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_classifies_by_status_range() {
		assert_eq!(ApiError::network().kind(), ApiErrorKind::Transport);
		assert_eq!(ApiError::new(400, "bad").kind(), ApiErrorKind::Client);
		assert_eq!(ApiError::new(413, "big").kind(), ApiErrorKind::Client);
		assert_eq!(ApiError::new(500, "boom").kind(), ApiErrorKind::Server);
		assert_eq!(ApiError::new(503, "down").kind(), ApiErrorKind::Server);
		assert_eq!(ApiError::new(200, "odd").kind(), ApiErrorKind::Other);
	}

	#[test]
	fn network_error_uses_the_fixed_message_and_status_zero() {
		let error = ApiError::network();
		assert_eq!(error.status, 0);
		assert_eq!(error.message, NETWORK_ERROR_MESSAGE);
	}

	#[test]
	fn display_includes_message_and_status() {
		let error = ApiError::new(413, FILE_TOO_LARGE_MESSAGE);
		assert_eq!(
			error.to_string(),
			"File size too large. Maximum file size is 5MB. (status 413)"
		);
	}
}
