use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

/// A failure reported by a [`crate::Router`] when performing a navigation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The target is the current location.
    #[error("already at '{0}'")]
    Duplicated(String),
    #[error("no route matches '{0}'")]
    NotFound(String),
    /// A navigation guard rejected the navigation.
    #[error("navigation to '{0}' was aborted")]
    Aborted(String),
    /// A newer navigation superseded this one before it completed.
    #[error("navigation to '{0}' was superseded")]
    Cancelled(String),
    #[error("{0}")]
    Other(String),
}

impl NavigationError {
    pub fn is_duplicated(&self) -> bool {
        matches!(self, Self::Duplicated(_))
    }
}

/// The failure of loading the router.
///
/// The load runs only once, but its outcome is handed to every waiting caller, so the
/// underlying error is shared.
#[derive(Clone)]
pub struct LoadError(Arc<anyhow::Error>);

impl LoadError {
    /// The error the loader reported.
    pub fn inner(&self) -> &anyhow::Error {
        &self.0
    }
}

impl From<anyhow::Error> for LoadError {
    fn from(err: anyhow::Error) -> Self {
        Self(Arc::new(err))
    }
}

impl Debug for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.0.as_ref(), f)
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // the causes are reported through `source()`
        Display::fmt(self.0.as_ref(), f)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load router")]
    Load(#[from] LoadError),
    /// A navigation failure the suppression policy let through.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("navigation cancelled")]
    Cancelled,
    #[error("timed out waiting for the router")]
    Timeout,
    #[error("no navigator installed")]
    NotInstalled,
    #[error("a navigator is already installed")]
    AlreadyInstalled,
}
