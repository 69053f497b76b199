use async_trait::async_trait;
use navigator::{Error, LoadState, NavigationError, Router};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct History {
    entries: Mutex<Vec<String>>,
}

impl History {
    fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

#[async_trait]
impl Router for History {
    async fn replace(&self, path: &str) -> Result<(), NavigationError> {
        let mut entries = self.entries.lock();
        if entries.last().map(String::as_str) == Some(path) {
            return Err(NavigationError::Duplicated(path.to_string()));
        }
        entries.pop();
        entries.push(path.to_string());
        Ok(())
    }

    async fn push(&self, path: &str) -> Result<(), NavigationError> {
        let mut entries = self.entries.lock();
        if entries.last().map(String::as_str) == Some(path) {
            return Err(NavigationError::Duplicated(path.to_string()));
        }
        entries.push(path.to_string());
        Ok(())
    }
}

/// The navigator is process-wide, so everything runs in a single test.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn process_wide_navigator() {
    let _ = env_logger::try_init();

    assert!(navigator::navigator().is_none());
    assert!(matches!(
        navigator::navigate_push("/").await,
        Err(Error::NotInstalled)
    ));

    let history = Arc::new(History::default());
    let loads = Arc::new(AtomicUsize::new(0));

    navigator::install({
        let history = history.clone();
        let loads = loads.clone();
        move || {
            let history = history.clone();
            let loads = loads.clone();
            async move {
                loads.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok::<_, anyhow::Error>(history as Arc<dyn Router>)
            }
        }
    })
    .unwrap();

    let second = navigator::install(|| async { Err::<Arc<dyn Router>, _>(anyhow::anyhow!("not used")) });
    assert!(matches!(second, Err(Error::AlreadyInstalled)));

    assert_eq!(
        navigator::navigator().map(|navigator| navigator.state()),
        Some(LoadState::Empty)
    );

    let tasks: Vec<_> = (0..16)
        .map(|i| tokio::spawn(async move { navigator::navigate_push(&format!("/item/{i}")).await }))
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(history.entries().len(), 16);

    // duplicates are absorbed
    let current = history.entries().last().cloned().unwrap();
    navigator::navigate_push(&current).await.unwrap();
    navigator::navigate_replace(&current).await.unwrap();
    assert_eq!(history.entries().len(), 16);

    navigator::navigate_replace("/done").await.unwrap();
    assert_eq!(history.entries().last().map(String::as_str), Some("/done"));
    assert_eq!(history.entries().len(), 16);

    assert_eq!(loads.load(Ordering::SeqCst), 1);
}
