//! Route paths, the known route set, and navigation lifecycle events.

use std::fmt;

use crate::core::error::PrefetchError;

// ============================================================================
// RoutePath
// ============================================================================

/// A validated route path (always starts with `/`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    /// Parse a route string.
    ///
    /// Query strings and fragments are not part of a route and are rejected
    /// along with anything that does not begin with `/`.
    pub fn parse(raw: &str) -> Result<Self, PrefetchError> {
        if !raw.starts_with('/') || raw.contains(['?', '#']) || raw.contains(char::is_whitespace)
        {
            return Err(PrefetchError::MalformedRoute(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Parse an untyped route descriptor.
    ///
    /// Only bare strings are accepted. Structured values (an options object
    /// in place of a path, numbers, arrays) are rejected before they can
    /// reach a prefetch primitive.
    pub fn from_descriptor(value: &serde_json::Value) -> Result<Self, PrefetchError> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            other => Err(PrefetchError::MalformedRoute(other.to_string())),
        }
    }

    /// The landing route.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a navigation item for `self` is highlighted while `current`
    /// is shown. The root only matches exactly; other routes match their
    /// own subtree.
    pub fn is_active_for(&self, current: &RoutePath) -> bool {
        if self.0 == "/" {
            return current.0 == "/";
        }
        current.0 == self.0
            || current
                .0
                .strip_prefix(self.0.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Current path from the browser location.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .and_then(|p| Self::parse(&p).ok())
            .unwrap_or_else(Self::root)
    }

    /// Push this route onto the browser history stack.
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&self.0));
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// RouteSet
// ============================================================================

/// Ordered, duplicate-free set of known routes. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<RoutePath>,
}

impl RouteSet {
    /// Build a route set, rejecting malformed or duplicate entries.
    pub fn new<I, S>(routes: I) -> Result<Self, PrefetchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<RoutePath> = Vec::new();
        for raw in routes {
            let path = RoutePath::parse(raw.as_ref())?;
            if out.contains(&path) {
                return Err(PrefetchError::DuplicateRoute(path.to_string()));
            }
            out.push(path);
        }
        Ok(Self { routes: out })
    }

    /// The site's configured routes.
    pub fn configured() -> Self {
        // Constants are validated by the tests below.
        Self::new(crate::config::routes::KNOWN).unwrap_or_else(|_| Self {
            routes: vec![RoutePath::root()],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoutePath> {
        self.routes.iter()
    }

    pub fn contains(&self, path: &RoutePath) -> bool {
        self.routes.contains(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Navigation events
// ============================================================================

/// Monotonic navigation sequence number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavSeq(pub u64);

/// Navigation lifecycle event emitted by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A navigation began.
    Start { seq: NavSeq },
    /// The navigation with `seq` finished and `path` is now displayed.
    Complete { seq: NavSeq, path: RoutePath },
    /// The navigation with `seq` failed.
    Error { seq: NavSeq },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_accepts_paths() {
        assert_eq!(RoutePath::parse("/").unwrap().as_str(), "/");
        assert_eq!(RoutePath::parse("/about").unwrap().as_str(), "/about");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(RoutePath::parse("").is_err());
        assert!(RoutePath::parse("about").is_err());
        assert!(RoutePath::parse("/about?x=1").is_err());
        assert!(RoutePath::parse("/about#top").is_err());
        assert!(RoutePath::parse("/a b").is_err());
    }

    #[test]
    fn test_descriptor_requires_string() {
        assert_eq!(
            RoutePath::from_descriptor(&json!("/projects")).unwrap(),
            RoutePath::parse("/projects").unwrap()
        );
        assert!(matches!(
            RoutePath::from_descriptor(&json!({ "href": "/projects", "priority": true })),
            Err(PrefetchError::MalformedRoute(_))
        ));
        assert!(RoutePath::from_descriptor(&json!(42)).is_err());
        assert!(RoutePath::from_descriptor(&json!(["/"])).is_err());
        assert!(RoutePath::from_descriptor(&serde_json::Value::Null).is_err());
    }

    #[test]
    fn test_route_set_rejects_duplicates() {
        assert!(matches!(
            RouteSet::new(["/", "/about", "/about"]),
            Err(PrefetchError::DuplicateRoute(p)) if p == "/about"
        ));
        assert!(RouteSet::new(["/", "about"]).is_err());
    }

    #[test]
    fn test_configured_routes_are_valid() {
        let set = RouteSet::new(crate::config::routes::KNOWN).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set, RouteSet::configured());
        assert_eq!(
            crate::config::routes::KNOWN.len(),
            crate::config::routes::LABELS.len()
        );
    }

    #[test]
    fn test_is_active_for() {
        let root = RoutePath::root();
        let projects = RoutePath::parse("/projects").unwrap();

        assert!(root.is_active_for(&root));
        assert!(!root.is_active_for(&projects));
        assert!(projects.is_active_for(&projects));
        assert!(projects.is_active_for(&RoutePath::parse("/projects/zk").unwrap()));
        assert!(!projects.is_active_for(&RoutePath::parse("/projectsx").unwrap()));
        assert!(!projects.is_active_for(&root));
    }
}
