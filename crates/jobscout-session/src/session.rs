// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory authentication session.
//!
//! A [`Session`] owns the API client and the mutable authentication state.
//! Cloning the handle is cheap and every clone observes the same state.
//! Nothing is persisted; reloading the shell starts a fresh anonymous
//! session.

use std::sync::Arc;

use jobscout_client::{ApiClient, Result};
use jobscout_core::User;
use jobscout_nav::{decide, NavDecision};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	/// No user is signed in.
	Anonymous,
	/// A login or register call is in flight.
	Authenticating,
	/// A user is signed in.
	Authenticated,
}

/// Point-in-time copy of the session, read under a single lock
/// acquisition so the fields are mutually consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
	pub user: Option<User>,
	pub state: SessionState,
	pub loading: bool,
	pub error: Option<String>,
}

#[derive(Debug, Default)]
struct AuthState {
	user: Option<User>,
	loading: bool,
	error: Option<String>,
}

/// Shared handle to the authentication state.
#[derive(Clone)]
pub struct Session {
	inner: Arc<SessionInner>,
}

struct SessionInner {
	client: ApiClient,
	state: RwLock<AuthState>,
}

impl Session {
	/// Creates an anonymous session over `client`.
	pub fn new(client: ApiClient) -> Self {
		Self {
			inner: Arc::new(SessionInner {
				client,
				state: RwLock::new(AuthState::default()),
			}),
		}
	}

	/// The signed-in user, if any.
	pub fn current_user(&self) -> Option<User> {
		self.inner.state.read().user.clone()
	}

	/// Derived from the presence of a user, never stored separately.
	pub fn is_authenticated(&self) -> bool {
		self.inner.state.read().user.is_some()
	}

	/// True while a login or register call is in flight. Advisory only:
	/// meant to disable a submit control, not to act as a lock.
	pub fn is_loading(&self) -> bool {
		self.inner.state.read().loading
	}

	/// Message of the most recent failed auth operation. Cleared by the
	/// next attempt and by logout.
	pub fn error(&self) -> Option<String> {
		self.inner.state.read().error.clone()
	}

	pub fn state(&self) -> SessionState {
		let state = self.inner.state.read();
		derive_state(&state)
	}

	/// Consistent copy of the whole session for guard evaluation or UI
	/// binding, taken under one lock acquisition.
	pub fn snapshot(&self) -> SessionSnapshot {
		let state = self.inner.state.read();
		SessionSnapshot {
			user: state.user.clone(),
			state: derive_state(&state),
			loading: state.loading,
			error: state.error.clone(),
		}
	}

	/// Signs in. On success the session becomes authenticated; on failure
	/// the failure message lands in [`Session::error`] and the error is
	/// also returned, so the invoking view decides how to display it.
	#[instrument(skip(self, password), fields(username = %username))]
	pub async fn login(&self, username: &str, password: &str) -> Result<User> {
		self.begin_attempt();
		let outcome = self.inner.client.login(username, password).await;
		self.finish_attempt(outcome)
	}

	/// Registers and immediately signs in with the same credentials. A
	/// failure in either step reports the whole call as failed.
	#[instrument(skip(self, password), fields(username = %username))]
	pub async fn register(&self, username: &str, password: &str) -> Result<User> {
		self.begin_attempt();
		let outcome = self.register_then_login(username, password).await;
		self.finish_attempt(outcome)
	}

	/// Clears the signed-in user and any error. Cannot fail; calling it
	/// repeatedly or while anonymous is a no-op.
	pub fn logout(&self) {
		let mut state = self.inner.state.write();
		state.user = None;
		state.error = None;
	}

	/// Gate for the shell's router: decides whether navigating to `target`
	/// may proceed under the current session. Redirects are control flow,
	/// never errors.
	pub fn decide_navigation(&self, target: &str) -> NavDecision {
		let verdict = decide(target, self.is_authenticated());
		debug!(target = %target, allowed = verdict.is_allowed(), "Navigation decided");
		verdict
	}

	async fn register_then_login(&self, username: &str, password: &str) -> Result<User> {
		self.inner.client.register(username, password).await?;
		self.inner.client.login(username, password).await
	}

	fn begin_attempt(&self) {
		let mut state = self.inner.state.write();
		state.loading = true;
		state.error = None;
	}

	// Guards are taken after the response has arrived, never across an
	// await point.
	fn finish_attempt(&self, outcome: Result<User>) -> Result<User> {
		let mut state = self.inner.state.write();
		state.loading = false;
		match outcome {
			Ok(user) => {
				info!(username = %user.username, "Authenticated");
				state.user = Some(user.clone());
				state.error = None;
				Ok(user)
			}
			Err(error) => {
				warn!(status = error.status, "Authentication failed");
				state.error = Some(error.message.clone());
				Err(error)
			}
		}
	}
}

fn derive_state(state: &AuthState) -> SessionState {
	if state.loading {
		SessionState::Authenticating
	} else if state.user.is_some() {
		SessionState::Authenticated
	} else {
		SessionState::Anonymous
	}
}
