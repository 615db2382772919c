use std::path::Path;

use crate::config::DatabaseConfig;
use crate::database::Store;

/// Returns an initialized store backed by a file inside `dir`
///
/// Each test should pass its own temporary directory so stores never overlap.
///
/// # Panics
/// Panics if the store cannot be created or seeded. Tests should fail fast if
/// setup is broken.
///
/// # Example
/// ```no_run
/// use vulnerable_app::testing::setup;
///
/// # async fn example() {
/// let dir = tempfile::tempdir().unwrap();
/// let store = setup::store(dir.path()).await;
/// # }
/// ```
pub async fn store(dir: &Path) -> Store {
    let store = uninitialized_store(dir);

    store
        .initialize()
        .await
        .expect("Failed to initialize store");

    store
}

/// Returns a store handle for a file inside `dir` without creating anything
pub fn uninitialized_store(dir: &Path) -> Store {
    Store::new(&DatabaseConfig {
        path: dir.join("vulnerable.db").display().to_string(),
    })
}
