// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core domain types for the jobscout client layer.
//!
//! These are the wire records exchanged with the Job Processing API. Field
//! names mirror the backend JSON exactly, so every type here derives the
//! serde traits and nothing in this crate performs I/O.

pub mod job;
pub mod resume;
pub mod university;
pub mod user;

pub use job::Job;
pub use resume::{RecommendedJob, RecommendedSkill, ResumeAnalysis};
pub use university::{CourseMap, CourseStatistics, FacultyMap, UniversityStats, YearSeries};
pub use user::{Acknowledgement, User};
