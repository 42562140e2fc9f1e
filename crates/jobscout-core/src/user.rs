// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Account types for the authentication operations.

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by `POST /login`.
///
/// The backend issues no token or cookie; holding a `User` in memory is the
/// whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub username: String,
	/// Skills extracted from the account's most recent resume upload.
	/// Empty until the user has uploaded a resume.
	#[serde(default)]
	pub skills: Vec<String>,
}

/// Acknowledgement body returned by `POST /signup`.
///
/// Registration does not establish a session. Callers follow up with a
/// login using the same credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
	pub message: String,
}
