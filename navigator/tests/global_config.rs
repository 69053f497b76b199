use async_trait::async_trait;
use navigator::{Error, NavigationError, NavigatorConfig, Router, SuppressPolicy};
use std::sync::Arc;
use std::time::Duration;

/// Knows only the root route.
struct RootOnly;

#[async_trait]
impl Router for RootOnly {
    async fn replace(&self, path: &str) -> Result<(), NavigationError> {
        match path {
            "/" => Err(NavigationError::Duplicated(path.to_string())),
            _ => Err(NavigationError::NotFound(path.to_string())),
        }
    }

    async fn push(&self, path: &str) -> Result<(), NavigationError> {
        self.replace(path).await
    }
}

/// The navigator is process-wide, so everything runs in a single test.
#[tokio::test]
async fn process_wide_navigator_with_config() {
    let _ = env_logger::try_init();

    let config = NavigatorConfig {
        suppress: SuppressPolicy::Duplicates,
        router_load_timeout: Some(Duration::from_secs(5).into()),
    };

    navigator::install_with_config(
        || async { Ok::<_, anyhow::Error>(Arc::new(RootOnly) as Arc<dyn Router>) },
        &config,
    )
    .unwrap();

    let installed = navigator::navigator().unwrap();
    assert_eq!(installed.policy(), SuppressPolicy::Duplicates);

    let err = navigator::navigate_push("/missing").await.unwrap_err();
    assert!(
        matches!(&err, Error::Navigation(NavigationError::NotFound(path)) if path == "/missing"),
        "unexpected: {err}"
    );

    // duplicates are still absorbed
    navigator::navigate_push("/").await.unwrap();
    navigator::navigate_replace("/").await.unwrap();

    let second = navigator::install_with_config(
        || async { Ok::<_, anyhow::Error>(Arc::new(RootOnly) as Arc<dyn Router>) },
        &config,
    );
    assert!(matches!(second, Err(Error::AlreadyInstalled)));
}
