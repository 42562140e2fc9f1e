// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pure navigation gating.
//!
//! [`decide`] inspects the route table and the caller's authentication
//! state and returns a verdict. It performs no I/O and holds no state, so
//! the shell can call it before every route change and tests can drive it
//! without a browser.

use crate::route::{find_route, Capability, HOME, LOGIN};

/// Verdict for a single navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDecision {
	/// Proceed to the requested path unmodified.
	Allow,
	/// Navigate to `path` instead. When `redirect` is set, the shell is
	/// expected to carry it as a `redirect` query parameter so the login
	/// view can send the user back after a successful sign-in.
	RedirectTo {
		path: &'static str,
		redirect: Option<String>,
	},
}

impl NavDecision {
	#[must_use]
	pub fn is_allowed(&self) -> bool {
		matches!(self, NavDecision::Allow)
	}

	/// Renders a redirect verdict as a navigable href, percent-encoding
	/// the carried path. Returns `None` for [`NavDecision::Allow`].
	#[must_use]
	pub fn href(&self) -> Option<String> {
		match self {
			NavDecision::Allow => None,
			NavDecision::RedirectTo { path, redirect } => Some(match redirect {
				Some(target) => format!("{path}?redirect={}", urlencoding::encode(target)),
				None => (*path).to_owned(),
			}),
		}
	}
}

/// Decides whether a navigation to `target` may proceed.
///
/// `target` is the full requested path, optionally carrying a query string
/// or fragment; route lookup uses only the path portion, tolerating a
/// single trailing slash (`/resume/` gates like `/resume`), while a
/// redirect to login carries the full original string. The guest rule is
/// evaluated before the auth rule. Paths outside the route table are
/// allowed through so the shell's catch-all view can handle them.
#[must_use]
pub fn decide(target: &str, is_authenticated: bool) -> NavDecision {
	let Some(route) = find_route(path_of(target)) else {
		return NavDecision::Allow;
	};
	match route.capability {
		Capability::RequiresGuest if is_authenticated => NavDecision::RedirectTo {
			path: HOME,
			redirect: None,
		},
		Capability::RequiresAuth if !is_authenticated => NavDecision::RedirectTo {
			path: LOGIN,
			redirect: Some(target.to_owned()),
		},
		_ => NavDecision::Allow,
	}
}

/// Destination to visit after a successful login, given the raw
/// (percent-encoded) `redirect` query parameter from the login page URL.
///
/// Only local absolute paths are honored; anything else (absent, empty,
/// undecodable, an external or protocol-relative URL) falls back to home,
/// so a crafted link cannot bounce a fresh login off-site.
#[must_use]
pub fn post_login_target(redirect: Option<&str>) -> String {
	let Some(raw) = redirect else {
		return HOME.to_owned();
	};
	match urlencoding::decode(raw) {
		Ok(decoded) if decoded.starts_with('/') && !decoded.starts_with("//") => {
			decoded.into_owned()
		}
		_ => HOME.to_owned(),
	}
}

fn path_of(target: &str) -> &str {
	let end = target.find(|c| c == '?' || c == '#').unwrap_or(target.len());
	let path = &target[..end];
	// One optional trailing slash, mirroring the shell router's non-strict
	// matching. `/` itself stays intact.
	match path.strip_suffix('/') {
		Some(stripped) if !stripped.is_empty() => stripped,
		_ => path,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::route::{Route, ROUTES};
	use proptest::prelude::*;

	fn routes_with(capability: Capability) -> impl Iterator<Item = &'static Route> {
		ROUTES.iter().filter(move |route| route.capability == capability)
	}

	#[test]
	fn anonymous_is_sent_to_login_from_every_auth_gated_route() {
		for route in routes_with(Capability::RequiresAuth) {
			let verdict = decide(route.path, false);
			assert_eq!(
				verdict,
				NavDecision::RedirectTo {
					path: LOGIN,
					redirect: Some(route.path.to_owned()),
				},
				"route {} should bounce anonymous visitors to login",
				route.path
			);
		}
	}

	#[test]
	fn authenticated_is_sent_home_from_every_guest_only_route() {
		for route in routes_with(Capability::RequiresGuest) {
			let verdict = decide(route.path, true);
			assert_eq!(
				verdict,
				NavDecision::RedirectTo { path: HOME, redirect: None },
				"route {} should bounce authenticated visitors home, never to login",
				route.path
			);
		}
	}

	#[test]
	fn public_routes_admit_everyone() {
		for route in routes_with(Capability::Public) {
			assert!(decide(route.path, false).is_allowed());
			assert!(decide(route.path, true).is_allowed());
		}
	}

	#[test]
	fn auth_gated_route_admits_authenticated_visitors() {
		assert!(decide("/resume", true).is_allowed());
	}

	#[test]
	fn guest_only_routes_admit_anonymous_visitors() {
		assert!(decide("/login", false).is_allowed());
		assert!(decide("/register", false).is_allowed());
	}

	#[test]
	fn redirect_carries_the_full_original_target() {
		let verdict = decide("/resume?tab=history#top", false);
		assert_eq!(
			verdict,
			NavDecision::RedirectTo {
				path: LOGIN,
				redirect: Some("/resume?tab=history#top".to_owned()),
			}
		);
	}

	#[test]
	fn href_percent_encodes_the_carried_path() {
		let verdict = decide("/resume", false);
		assert_eq!(verdict.href().as_deref(), Some("/login?redirect=%2Fresume"));
	}

	#[test]
	fn href_is_bare_path_for_home_redirects() {
		let verdict = decide("/login", true);
		assert_eq!(verdict.href().as_deref(), Some("/"));
	}

	#[test]
	fn unknown_paths_fall_through_to_the_shell() {
		assert!(decide("/nonexistent", false).is_allowed());
		assert!(decide("/nonexistent", true).is_allowed());
	}

	#[test]
	fn a_single_trailing_slash_gates_like_the_bare_route() {
		assert_eq!(
			decide("/resume/", false),
			NavDecision::RedirectTo {
				path: LOGIN,
				redirect: Some("/resume/".to_owned()),
			}
		);
		assert_eq!(
			decide("/login/", true),
			NavDecision::RedirectTo { path: HOME, redirect: None }
		);
		assert!(decide("/resume/", true).is_allowed());
		assert!(decide("/jobs/", false).is_allowed());
	}

	#[test]
	fn doubled_trailing_slashes_fall_outside_the_table() {
		assert!(decide("/resume//", false).is_allowed());
		assert!(decide("/login//", true).is_allowed());
	}

	#[test]
	fn post_login_target_falls_back_to_home() {
		assert_eq!(post_login_target(None), "/");
		assert_eq!(post_login_target(Some("")), "/");
	}

	#[test]
	fn post_login_target_decodes_the_carried_path() {
		assert_eq!(post_login_target(Some("%2Fresume")), "/resume");
		assert_eq!(post_login_target(Some("%2Fresume%3Ftab%3Dhistory")), "/resume?tab=history");
	}

	#[test]
	fn post_login_target_rejects_non_local_destinations() {
		assert_eq!(post_login_target(Some("https%3A%2F%2Fevil.example")), "/");
		assert_eq!(post_login_target(Some("%2F%2Fevil.example")), "/");
		assert_eq!(post_login_target(Some("resume")), "/");
	}

	proptest! {
		#[test]
		fn decide_never_panics(target in ".{0,64}", is_authenticated in any::<bool>()) {
			let _ = decide(&target, is_authenticated);
		}

		#[test]
		fn paths_outside_the_table_always_allow(
			suffix in "[a-z]{1,12}",
			is_authenticated in any::<bool>(),
		) {
			let target = format!("/unknown-{suffix}");
			prop_assert!(decide(&target, is_authenticated).is_allowed());
		}

		#[test]
		fn carried_paths_survive_the_href_roundtrip(
			path in "/([a-zA-Z0-9?=&# ][a-zA-Z0-9/?=&# ]{0,31})?",
		) {
			let verdict = NavDecision::RedirectTo {
				path: LOGIN,
				redirect: Some(path.clone()),
			};
			let href = verdict.href().unwrap();
			let raw = href.strip_prefix("/login?redirect=").unwrap();
			prop_assert_eq!(post_login_target(Some(raw)), path);
		}
	}
}
