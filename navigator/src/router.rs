use crate::error::NavigationError;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// The way a navigation treats the history.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NavigationKind {
    /// Overwrite the current history entry.
    Replace,
    /// Append a new history entry.
    Push,
}

/// The routing object navigations get delegated to.
///
/// Matching paths to routes and keeping the history is entirely up to the implementation.
#[async_trait]
pub trait Router: Send + Sync {
    /// Navigate to `path`, replacing the current history entry.
    async fn replace(&self, path: &str) -> Result<(), NavigationError>;

    /// Navigate to `path`, pushing a new history entry.
    async fn push(&self, path: &str) -> Result<(), NavigationError>;

    async fn navigate(&self, kind: NavigationKind, path: &str) -> Result<(), NavigationError> {
        match kind {
            NavigationKind::Replace => self.replace(path).await,
            NavigationKind::Push => self.push(path).await,
        }
    }
}

/// Provides the router, once.
///
/// A [`crate::LazyNavigator`] calls [`RouterLoader::load`] at most once during its lifetime,
/// no matter how many navigations wait for it. Any `Fn() -> Future<Output = anyhow::Result<Arc<R>>>`
/// closure is a loader.
#[async_trait]
pub trait RouterLoader<R>: Send + Sync
where
    R: Router + ?Sized,
{
    async fn load(&self) -> anyhow::Result<Arc<R>>;
}

#[async_trait]
impl<F, Fut, R> RouterLoader<R> for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<Arc<R>>> + Send + 'static,
    R: Router + ?Sized + 'static,
{
    async fn load(&self) -> anyhow::Result<Arc<R>> {
        (self)().await
    }
}
