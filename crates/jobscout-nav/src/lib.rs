// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route table and navigation gating for the jobscout shell.
//!
//! The shell consults [`decide`] before completing any route change. The
//! verdict is pure data; actually performing the redirect (and later
//! consulting the `redirect` query parameter after a login) stays the
//! shell's job.
//!
//! ```
//! use jobscout_nav::{decide, NavDecision};
//!
//! let verdict = decide("/resume", false);
//! assert_eq!(
//! 	verdict,
//! 	NavDecision::RedirectTo {
//! 		path: "/login",
//! 		redirect: Some("/resume".to_owned()),
//! 	},
//! );
//! assert_eq!(verdict.href().as_deref(), Some("/login?redirect=%2Fresume"));
//! ```

pub mod decision;
pub mod route;

pub use decision::{decide, post_login_target, NavDecision};
pub use route::{find_route, Capability, Route, HOME, LOGIN, ROUTES};
