//! Error types for the navigation core.
//!
//! None of these reach the component tree. They exist so that each failure
//! is named where it is caught and logged:
//!
//! - [`PrefetchError`] - route validation and prefetch primitive failures
//! - [`BeaconError`] - visit notification delivery
//! - [`NavigationError`] - router failures reported as `NavigationEvent::Error`

use thiserror::Error;

/// Route validation and prefetch failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefetchError {
    /// Route descriptor was not a bare path string starting with `/`.
    #[error("malformed route descriptor: {0}")]
    MalformedRoute(String),
    /// Route listed twice in a route set.
    #[error("duplicate route: {0}")]
    DuplicateRoute(String),
    /// Browser document not available.
    #[error("document not available")]
    NoDocument,
    /// The underlying prefetch primitive failed.
    #[error("prefetch of {path} failed: {reason}")]
    Failed { path: String, reason: String },
}

/// Visit beacon failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeaconError {
    /// Payload could not be serialized.
    #[error("failed to encode beacon payload: {0}")]
    Encode(String),
    /// Request could not be sent.
    #[error("beacon request failed: {0}")]
    Network(String),
}

/// Router failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Target path is not a known route.
    #[error("no route for {0}")]
    UnknownRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PrefetchError::MalformedRoute("{}".into()).to_string(),
            "malformed route descriptor: {}"
        );
        assert_eq!(
            PrefetchError::Failed {
                path: "/about".into(),
                reason: "offline".into()
            }
            .to_string(),
            "prefetch of /about failed: offline"
        );
        assert_eq!(
            NavigationError::UnknownRoute("/nope".into()).to_string(),
            "no route for /nope"
        );
        assert_eq!(
            BeaconError::Network("timeout".into()).to_string(),
            "beacon request failed: timeout"
        );
    }
}
