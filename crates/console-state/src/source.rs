//! Data source capability
//!
//! Resource stores never branch on where their data comes from. They are
//! handed a [`ConsoleDataSource`]; during development that is the
//! [`MockDataSource`](crate::mock::MockDataSource), in production an
//! implementation backed by the console API. [`select_source`] picks between
//! them from `CONSOLE_USE_MOCK_DATA`.

use async_trait::async_trait;
use console_api::ConsoleConfig;
use console_model::{Organisation, Permission, Product, Role, Subscription, User};
use std::sync::Arc;

use crate::error::DataResult;

/// Organisation-scoped data the console displays.
#[async_trait]
pub trait ConsoleDataSource: Send + Sync {
    /// Permission catalog visible to the organisation.
    async fn permissions(&self, organisation: &Organisation) -> DataResult<Vec<Permission>>;

    /// Roles owned by the organisation.
    async fn roles(&self, organisation: &Organisation) -> DataResult<Vec<Role>>;

    /// Members of the organisation.
    async fn users(&self, organisation: &Organisation) -> DataResult<Vec<User>>;

    /// Products available to the organisation.
    async fn products(&self, organisation: &Organisation) -> DataResult<Vec<Product>>;

    /// Every subscription the organisation holds, unfiltered.
    async fn subscriptions(&self, organisation: &Organisation) -> DataResult<Vec<Subscription>>;
}

/// Pick the data source the stores read from.
///
/// Returns a [`MockDataSource`](crate::mock::MockDataSource) with the
/// configured latency when `use_mock_data` is set, otherwise `backend`.
/// Without the `mock` feature the flag is ignored and `backend` is returned.
pub fn select_source(
    config: &ConsoleConfig,
    backend: Arc<dyn ConsoleDataSource>,
) -> Arc<dyn ConsoleDataSource> {
    if !config.use_mock_data {
        return backend;
    }

    #[cfg(feature = "mock")]
    {
        tracing::info!(latency_ms = config.mock_latency_ms, "Serving console data from mock source");
        Arc::new(crate::mock::MockDataSource::from_config(config))
    }

    #[cfg(not(feature = "mock"))]
    {
        tracing::warn!("Mock data requested but the mock feature is disabled; using backend source");
        backend
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::mock::MockDataSource;

    /// Source that always fails, standing in for an unreachable backend.
    struct OfflineBackend;

    #[async_trait]
    impl ConsoleDataSource for OfflineBackend {
        async fn permissions(&self, _: &Organisation) -> DataResult<Vec<Permission>> {
            Err(DataError::Unavailable("offline".to_string()))
        }

        async fn roles(&self, _: &Organisation) -> DataResult<Vec<Role>> {
            Err(DataError::Unavailable("offline".to_string()))
        }

        async fn users(&self, _: &Organisation) -> DataResult<Vec<User>> {
            Err(DataError::Unavailable("offline".to_string()))
        }

        async fn products(&self, _: &Organisation) -> DataResult<Vec<Product>> {
            Err(DataError::Unavailable("offline".to_string()))
        }

        async fn subscriptions(&self, _: &Organisation) -> DataResult<Vec<Subscription>> {
            Err(DataError::Unavailable("offline".to_string()))
        }
    }

    fn config(use_mock_data: bool) -> ConsoleConfig {
        ConsoleConfig {
            use_mock_data,
            mock_latency_ms: 0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_mock_flag_selects_mock_source() {
        let source = select_source(&config(true), Arc::new(OfflineBackend));
        let org = MockDataSource::organisations().remove(0);

        assert_eq!(source.users(&org).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_backend_used_when_mock_disabled() {
        let source = select_source(&config(false), Arc::new(OfflineBackend));
        let org = MockDataSource::organisations().remove(0);

        assert!(matches!(source.users(&org).await, Err(DataError::Unavailable(_))));
    }
}
