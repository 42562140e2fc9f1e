// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resume analysis results from the upload pipeline.

use serde::{Deserialize, Serialize};

/// Full analysis returned by `POST /upload_resume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
	pub message: String,
	#[serde(default)]
	pub extracted_skills: Vec<String>,
	#[serde(default)]
	pub ai_improvements: String,
	#[serde(default)]
	pub recommended_jobs: Vec<RecommendedJob>,
	#[serde(default)]
	pub recommended_skills_to_learn: Vec<RecommendedSkill>,
}

/// A listing matched against the skills extracted from an uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedJob {
	pub job_title: String,
	pub company: String,
	pub job_link: String,
	/// Share of the listing's required skills covered by the resume, 0-100.
	pub match_percentage: f64,
	#[serde(default)]
	pub matching_skills: Vec<String>,
}

/// A skill worth learning, ranked by how often listings ask for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedSkill {
	pub skill: String,
	/// Number of listings that mention the skill.
	pub frequency: u32,
	#[serde(default)]
	pub example_jobs: Vec<String>,
}
