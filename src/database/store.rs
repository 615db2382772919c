use std::future::Future;
use std::pin::Pin;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use vulnerable_app_migration::{Migrator, MigratorTrait};

use crate::config::DatabaseConfig;

/// Handle to the single-file store
///
/// Holds only the connection URL. Connections are acquired per operation with
/// [`Store::open`] or, preferably, [`Store::execute`], which also releases them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    url: String,
}

impl Store {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self::from_url(config.url())
    }

    pub fn from_url<T: Into<String>>(url: T) -> Self {
        Self { url: url.into() }
    }

    /// Open a fresh connection; the caller owns closing it
    pub async fn open(&self) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(self.url.clone());
        options.max_connections(1).sqlx_logging(false);

        Database::connect(options).await.inspect_err(|e| {
            ::tracing::error!(url = %self.url, error = %e, "Failed to open store");
        })
    }

    /// Run `f` against a connection that is closed before this returns,
    /// whether `f` succeeded or not
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sea_orm::{DbErr, EntityTrait};
    /// use vulnerable_app::database::Store;
    /// use vulnerable_app::entities::v1::users;
    ///
    /// # async fn example(store: Store) -> Result<(), DbErr> {
    /// let users = store
    ///     .execute(|db| Box::pin(async move { users::Entity::find().all(db).await }))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<F, T>(&self, f: F) -> Result<T, DbErr>
    where
        F: for<'c> FnOnce(
            &'c DatabaseConnection,
        ) -> Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>,
    {
        let db = self.open().await?;
        let result = f(&db).await;

        if let Err(e) = db.close().await {
            ::tracing::warn!(error = %e, "Failed to close store connection");
        }

        result
    }

    /// Create the tables and insert the demo rows if the store is empty
    ///
    /// Safe to call on every start; existing rows are never duplicated.
    #[::tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn initialize(&self) -> Result<(), DbErr> {
        self.execute(|db| Box::pin(async move { Migrator::up(db, None).await }))
            .await?;

        ::tracing::info!("Store initialized");

        Ok(())
    }
}
