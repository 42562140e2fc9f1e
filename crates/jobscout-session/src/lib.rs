// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session gate for the jobscout shell.
//!
//! Ties the client layer and the route table together: a [`Session`] runs
//! the auth operations against the backend, tracks the signed-in user in
//! memory, and answers the shell's "may this navigation proceed" question
//! through [`Session::decide_navigation`].
//!
//! ```no_run
//! use jobscout_session::{ApiClient, Session};
//! use jobscout_client::{resolve_endpoint, EndpointConfig};
//!
//! # async fn demo() {
//! let endpoint = resolve_endpoint(EndpointConfig::default()).await;
//! let session = Session::new(ApiClient::new(endpoint));
//!
//! let verdict = session.decide_navigation("/resume");
//! assert!(!verdict.is_allowed());
//! # }
//! ```

pub mod session;

pub use session::{Session, SessionSnapshot, SessionState};

pub use jobscout_client::{ApiClient, ApiError, Result};
pub use jobscout_core::User;
pub use jobscout_nav::NavDecision;
