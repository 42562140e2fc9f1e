// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Graduate employment statistics keyed by university, faculty, and course.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Year label (e.g. `"2021"`) mapped to a metric value for that year.
pub type YearSeries = BTreeMap<String, f64>;

/// Outcome series for a single course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseStatistics {
	#[serde(default)]
	pub employment_rate_overall: YearSeries,
	#[serde(default)]
	pub gross_monthly_mean: YearSeries,
}

/// Course name mapped to its statistics.
pub type CourseMap = BTreeMap<String, CourseStatistics>;

/// Faculty name mapped to its courses.
pub type FacultyMap = BTreeMap<String, CourseMap>;

/// University name mapped to its faculties. This is the whole
/// `GET /university_stats` payload.
pub type UniversityStats = BTreeMap<String, FacultyMap>;
