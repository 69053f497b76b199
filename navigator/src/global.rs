//! One navigator for the whole process.
//!
//! An application installs the navigator once during startup, providing the loader of its
//! router. Afterwards, any part of the application can navigate, without holding a reference
//! to the router or the navigator.

use crate::config::NavigatorConfig;
use crate::error::Error;
use crate::navigator::LazyNavigator;
use crate::router::{Router, RouterLoader};
use std::sync::OnceLock;

static NAVIGATOR: OnceLock<LazyNavigator<dyn Router>> = OnceLock::new();

/// Install the process-wide navigator, using the default configuration.
///
/// Only the first installation takes effect, any later one fails with [`Error::AlreadyInstalled`].
pub fn install<L>(loader: L) -> Result<(), Error>
where
    L: RouterLoader<dyn Router> + 'static,
{
    install_navigator(LazyNavigator::new(loader))
}

pub fn install_with_config<L>(loader: L, config: &NavigatorConfig) -> Result<(), Error>
where
    L: RouterLoader<dyn Router> + 'static,
{
    install_navigator(LazyNavigator::from_config(loader, config))
}

pub fn install_navigator(navigator: LazyNavigator<dyn Router>) -> Result<(), Error> {
    NAVIGATOR.set(navigator).map_err(|_| Error::AlreadyInstalled)?;
    log::debug!("Installed process-wide navigator");
    Ok(())
}

/// The installed navigator, if any.
pub fn navigator() -> Option<&'static LazyNavigator<dyn Router>> {
    NAVIGATOR.get()
}

fn installed() -> Result<&'static LazyNavigator<dyn Router>, Error> {
    navigator().ok_or(Error::NotInstalled)
}

/// Navigate to `path` using the installed navigator, replacing the current history entry.
pub async fn navigate_replace(path: &str) -> Result<(), Error> {
    installed()?.navigate_replace(path).await
}

/// Navigate to `path` using the installed navigator, pushing a new history entry.
pub async fn navigate_push(path: &str) -> Result<(), Error> {
    installed()?.navigate_push(path).await
}
