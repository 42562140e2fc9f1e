// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Job listing records.

use serde::{Deserialize, Serialize};

/// A single job listing from the Job Processing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
	pub id: String,
	pub job_title: String,
	pub company: String,
	/// Posting date as the backend formats it, e.g. `"2023-07-15"`.
	pub date: String,
	pub job_link: String,
	#[serde(default)]
	pub skills: Vec<String>,
}
