// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The static route table served by the application shell.

/// Path of the home route, the destination for authenticated users who hit
/// a guest-only page.
pub const HOME: &str = "/";

/// Path of the login route, the destination for anonymous users who hit an
/// auth-only page.
pub const LOGIN: &str = "/login";

/// What a visitor's session must look like to enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
	/// Anyone may enter.
	Public,
	/// Authenticated users only; anonymous visitors are sent to login.
	RequiresAuth,
	/// Anonymous visitors only; authenticated users are sent home.
	RequiresGuest,
}

/// One entry in the route table. `name` identifies the view the shell
/// renders for the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
	pub path: &'static str,
	pub name: &'static str,
	pub capability: Capability,
}

/// Every route the shell serves, in declaration order.
pub const ROUTES: &[Route] = &[
	Route { path: HOME, name: "home", capability: Capability::Public },
	Route { path: "/jobs", name: "jobs", capability: Capability::Public },
	Route { path: "/analytics", name: "analytics", capability: Capability::Public },
	Route { path: "/market", name: "market", capability: Capability::Public },
	Route { path: "/resume", name: "resume", capability: Capability::RequiresAuth },
	Route { path: LOGIN, name: "login", capability: Capability::RequiresGuest },
	Route { path: "/register", name: "register", capability: Capability::RequiresGuest },
];

/// Looks up a route by exact path match. Query strings and fragments must
/// already be stripped; unknown paths return `None`.
#[must_use]
pub fn find_route(path: &str) -> Option<&'static Route> {
	ROUTES.iter().find(|route| route.path == path)
}
