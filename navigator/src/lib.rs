//! Navigate before the router is there.
//!
//! Applications often load their router lazily, while other parts of the application already
//! want to navigate. The [`LazyNavigator`] accepts navigations right away, loads the router on
//! first use, exactly once, and then delegates to it.
//!
//! Navigating to the current location, and most other navigation failures, are of no interest
//! to the caller. By default, they are absorbed. The only failure reported is the router failing
//! to load. This can be tuned using a [`SuppressPolicy`].
//!
//! ```rust
//! use async_trait::async_trait;
//! use navigator::{LazyNavigator, NavigationError, Router};
//! use std::sync::Arc;
//!
//! struct MyRouter;
//!
//! #[async_trait]
//! impl Router for MyRouter {
//!     async fn replace(&self, path: &str) -> Result<(), NavigationError> {
//!         Err(NavigationError::Duplicated(path.to_string()))
//!     }
//!
//!     async fn push(&self, _path: &str) -> Result<(), NavigationError> {
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), navigator::Error> {
//! let navigator: LazyNavigator<MyRouter> =
//!     LazyNavigator::new(|| async { Ok::<_, anyhow::Error>(Arc::new(MyRouter)) });
//!
//! navigator.navigate_push("/packages").await?;
//! // already there, absorbed
//! navigator.navigate_replace("/packages").await?;
//! # Ok(())
//! # }
//! ```
//!
//! For a single navigator shared by the whole process, see [`install`] and the free functions
//! [`navigate_replace`] and [`navigate_push`].

mod config;
mod error;
mod global;
mod navigator;
mod policy;
mod router;

pub use config::*;
pub use error::*;
pub use global::*;
pub use navigator::*;
pub use policy::*;
pub use router::*;
