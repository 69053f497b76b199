use crate::config::NavigatorConfig;
use crate::error::{Error, LoadError};
use crate::policy::SuppressPolicy;
use crate::router::{NavigationKind, Router, RouterLoader};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

type PendingRouter<R> = Shared<BoxFuture<'static, Result<Arc<R>, LoadError>>>;

enum Slot<R: ?Sized> {
    Empty,
    Loading(PendingRouter<R>),
    Ready(Arc<R>),
    Failed(LoadError),
}

/// An observable view of where the router loading is at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nobody asked for the router yet.
    Empty,
    Loading,
    Ready,
    /// The loader failed. This is final, there is no retry.
    Failed,
}

/// Defers navigations until the router is available.
///
/// The router is requested from the [`RouterLoader`] on the first navigation. The load runs as
/// its own tokio task, so it completes even if no caller is left waiting for it. All navigations
/// issued while it loads wait for that same load, so the loader runs at most once, even if
/// waiting callers get cancelled or time out. Once loaded, the router is kept for the lifetime
/// of the navigator. A failed load is kept as well, and reported to all callers.
///
/// Failures of the navigation itself are filtered through the [`SuppressPolicy`]. The default
/// absorbs all of them, so that a navigation only fails if the router can't be loaded.
pub struct LazyNavigator<R>
where
    R: Router + ?Sized + 'static,
{
    loader: Arc<dyn RouterLoader<R>>,
    slot: Arc<Mutex<Slot<R>>>,
    policy: SuppressPolicy,
    load_timeout: Option<Duration>,
}

impl<R> Debug for LazyNavigator<R>
where
    R: Router + ?Sized + 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyNavigator")
            .field("state", &self.state())
            .field("policy", &self.policy)
            .field("load_timeout", &self.load_timeout)
            .finish()
    }
}

impl<R> LazyNavigator<R>
where
    R: Router + ?Sized + 'static,
{
    pub fn new<L>(loader: L) -> Self
    where
        L: RouterLoader<R> + 'static,
    {
        Self {
            loader: Arc::new(loader),
            slot: Arc::new(Mutex::new(Slot::Empty)),
            policy: Default::default(),
            load_timeout: None,
        }
    }

    pub fn from_config<L>(loader: L, config: &NavigatorConfig) -> Self
    where
        L: RouterLoader<R> + 'static,
    {
        Self::new(loader)
            .with_policy(config.suppress)
            .with_load_timeout(config.load_timeout())
    }

    pub fn with_policy(mut self, policy: SuppressPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Limit the time a single navigation waits for the router. The load itself continues, and
    /// completes for later navigations.
    pub fn with_load_timeout(mut self, load_timeout: impl Into<Option<Duration>>) -> Self {
        self.load_timeout = load_timeout.into();
        self
    }

    pub fn policy(&self) -> SuppressPolicy {
        self.policy
    }

    pub fn state(&self) -> LoadState {
        match &*self.slot.lock() {
            Slot::Empty => LoadState::Empty,
            Slot::Loading(_) => LoadState::Loading,
            Slot::Ready(_) => LoadState::Ready,
            Slot::Failed(_) => LoadState::Failed,
        }
    }

    /// Number of callers currently waiting for the router to load.
    #[cfg(test)]
    fn waiters(&self) -> usize {
        match &*self.slot.lock() {
            // one reference is held by the slot itself
            Slot::Loading(pending) => pending.strong_count().unwrap_or(1) - 1,
            _ => 0,
        }
    }

    /// Start loading the router. The outcome is recorded in the slot by the load task itself.
    ///
    /// Must be called from within a tokio runtime.
    fn spawn_load(&self) -> PendingRouter<R> {
        let loader = self.loader.clone();
        let slot = self.slot.clone();

        tokio::spawn(async move {
            let result = loader.load().await.map_err(LoadError::from);
            Self::record(&mut slot.lock(), &result);
            result
        })
        .map(|joined| joined.unwrap_or_else(|err| Err(anyhow::Error::from(err).into())))
        .boxed()
        .shared()
    }

    fn record(slot: &mut Slot<R>, result: &Result<Arc<R>, LoadError>) {
        if let Slot::Loading(_) = slot {
            *slot = match result {
                Ok(router) => {
                    log::info!("Router loaded");
                    Slot::Ready(router.clone())
                }
                Err(err) => {
                    log::warn!("Failed to load router: {:#}", err.inner());
                    Slot::Failed(err.clone())
                }
            };
        }
    }

    /// Get the router, loading it if nobody did so far.
    pub async fn router(&self) -> Result<Arc<R>, Error> {
        let pending = {
            let mut slot = self.slot.lock();
            match &*slot {
                Slot::Ready(router) => return Ok(router.clone()),
                Slot::Failed(err) => return Err(err.clone().into()),
                Slot::Loading(pending) => pending.clone(),
                Slot::Empty => {
                    log::debug!("Loading router");
                    let pending = self.spawn_load();
                    *slot = Slot::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.await;

        // the load task records its outcome, unless it panicked
        Self::record(&mut self.slot.lock(), &result);

        Ok(result?)
    }

    /// Navigate to `path`, replacing the current history entry.
    pub async fn navigate_replace(&self, path: &str) -> Result<(), Error> {
        self.navigate(NavigationKind::Replace, path, None).await
    }

    /// Navigate to `path`, pushing a new history entry.
    pub async fn navigate_push(&self, path: &str) -> Result<(), Error> {
        self.navigate(NavigationKind::Push, path, None).await
    }

    pub async fn navigate_replace_with(&self, path: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.navigate(NavigationKind::Replace, path, Some(cancel)).await
    }

    pub async fn navigate_push_with(&self, path: &str, cancel: &CancellationToken) -> Result<(), Error> {
        self.navigate(NavigationKind::Push, path, Some(cancel)).await
    }

    /// Wait for the router and navigate.
    ///
    /// If `cancel` fires before the navigation completed, [`Error::Cancelled`] is returned. This
    /// doesn't cancel loading the router, which other callers might still wait for.
    pub async fn navigate(
        &self,
        kind: NavigationKind,
        path: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<(), Error> {
        match cancel {
            Some(cancel) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        log::debug!("Cancelled {kind} navigation to '{path}'");
                        Err(Error::Cancelled)
                    }
                    result = self.navigate_now(kind, path) => result,
                }
            }
            None => self.navigate_now(kind, path).await,
        }
    }

    async fn navigate_now(&self, kind: NavigationKind, path: &str) -> Result<(), Error> {
        let router = self.wait_for_router().await?;

        match router.navigate(kind, path).await {
            Ok(()) => Ok(()),
            Err(err) if self.policy.suppresses(&err) => {
                if !err.is_duplicated() {
                    log::debug!("Ignoring failed {kind} navigation to '{path}': {err}");
                }
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn wait_for_router(&self) -> Result<Arc<R>, Error> {
        match self.load_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.router())
                .await
                .map_err(|_| Error::Timeout)?,
            None => self.router().await,
        }
    }
}
