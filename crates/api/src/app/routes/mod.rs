use axum::Router;

use crate::app::AppState;

pub mod system;

/// Served by `system::health`; groups may not mount here.
const HEALTH_PREFIX: &str = "/health";

/// Route groups supplied by collaborator crates, mounted under `/api`.
///
/// Groups keep their registration order. A group that is never supplied is
/// simply not mounted, so its paths fall through to the 404 handler.
#[derive(Default)]
pub struct RouteGroups {
    groups: Vec<(String, Router<AppState>)>,
}

impl RouteGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the authentication routes at `/api/auth`.
    pub fn auth(self, router: Router<AppState>) -> Self {
        self.mount("/auth", router)
    }

    /// Mount the medication routes at `/api/medications`.
    pub fn medications(self, router: Router<AppState>) -> Self {
        self.mount("/medications", router)
    }

    /// Mount `router` at `/api{prefix}`.
    ///
    /// # Panics
    ///
    /// If `prefix` is empty, `/` or the reserved `/health`. Overlapping
    /// prefixes panic when the application router is built, as with
    /// [`Router::nest`].
    pub fn mount(mut self, prefix: &str, router: Router<AppState>) -> Self {
        let prefix = normalize_prefix(prefix);
        assert!(prefix.len() > 1, "route group prefix must name a path segment");
        assert!(
            prefix != HEALTH_PREFIX,
            "route group prefix {prefix} is reserved for the liveness endpoint"
        );
        self.groups.push((prefix, router));
        self
    }

    /// Prefixes relative to `/api`, in registration order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(prefix, _)| prefix.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn into_inner(self) -> Vec<(String, Router<AppState>)> {
        self.groups
    }
}

fn normalize_prefix(prefix: &str) -> String {
    format!("/{}", prefix.trim().trim_matches('/'))
}
