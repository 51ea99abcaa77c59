//! Organisation-scoped resource store
//!
//! A [`Resource`] binds an asynchronous [`Loader`] to held data, a busy flag
//! and a `refetch` operation. It is the state half of a view: the view hands
//! it the selected organisation and renders from [`Resource::snapshot`].
//!
//! ## Fetch lifecycle
//!
//! ```text
//! set_organisation(Some(org)) ── id changed? ──► refetch()
//!                                                  │ generation += 1, loading = true
//!                                                  ▼
//!                                            loader.load(org)
//!                                                  │
//!                      generation still current? ──┤── no ──► discard
//!                                                  ▼
//!                         Ok ─► replace data   Err ─► log + notify
//!                                                  │
//!                                            loading = false
//! ```
//!
//! Every fetch is tagged with a generation number. Starting a fetch or
//! changing the organisation bumps the generation, so a result that settles
//! after a newer fetch started is dropped instead of overwriting newer data.
//! The loader future itself is not cancelled.

use async_trait::async_trait;
use console_model::Organisation;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::error::DataResult;
use crate::notify::{Notification, Notifier};

/// Fetches one resource's data for an organisation.
#[async_trait]
pub trait Loader: Send + Sync + 'static {
    /// Data held by the store; `Default` is the empty state.
    type Data: Default + Clone + Send + Sync + 'static;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Generic message shown to the user when a fetch fails.
    fn failure_message(&self) -> &'static str {
        "Something went wrong while loading data. Please try again."
    }

    /// Load the data for `organisation`.
    async fn load(&self, organisation: &Organisation) -> DataResult<Self::Data>;
}

/// Point-in-time view of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<D> {
    /// Held data
    pub data: D,

    /// Whether a fetch is in flight
    pub loading: bool,
}

#[derive(Debug)]
struct StoreState<D> {
    data: D,
    loading: bool,
    organisation: Option<Organisation>,
    generation: u64,
}

/// Organisation-scoped resource store.
///
/// Cloning a store yields another handle to the same state.
pub struct Resource<L: Loader> {
    loader: Arc<L>,
    notifier: Arc<dyn Notifier>,
    state: Arc<RwLock<StoreState<L::Data>>>,
}

impl<L: Loader> Clone for Resource<L> {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
        }
    }
}

impl<L: Loader> std::fmt::Debug for Resource<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("loader", &self.loader.name())
            .finish()
    }
}

impl<L: Loader> Resource<L> {
    /// Create an empty store with no organisation selected.
    pub fn new(loader: L, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            loader: Arc::new(loader),
            notifier,
            state: Arc::new(RwLock::new(StoreState {
                data: L::Data::default(),
                loading: false,
                organisation: None,
                generation: 0,
            })),
        }
    }

    /// Select the organisation the store is scoped to.
    ///
    /// A fetch runs only when the organisation id differs from the current
    /// one. Selecting no organisation leaves the held data untouched and
    /// invalidates any fetch still in flight.
    pub async fn set_organisation(&self, organisation: Option<Organisation>) {
        let should_fetch = {
            let mut state = self.state.write().await;
            let current_id = state.organisation.as_ref().map(|o| o.id);
            let next_id = organisation.as_ref().map(|o| o.id);

            if current_id == next_id {
                // Same tenant; keep the fresher copy of its fields.
                state.organisation = organisation;
                false
            } else {
                debug!(
                    resource = self.loader.name(),
                    ?current_id,
                    ?next_id,
                    "Organisation changed"
                );
                state.generation += 1;
                state.organisation = organisation;
                if state.organisation.is_none() {
                    state.loading = false;
                }
                state.organisation.is_some()
            }
        };

        if should_fetch {
            self.refetch().await;
        }
    }

    /// Fetch again for the current organisation.
    ///
    /// Does nothing when no organisation is selected.
    pub async fn refetch(&self) {
        let (organisation, generation) = {
            let mut state = self.state.write().await;
            let Some(organisation) = state.organisation.clone() else {
                debug!(resource = self.loader.name(), "No organisation selected, skipping fetch");
                return;
            };
            state.generation += 1;
            state.loading = true;
            (organisation, state.generation)
        };

        let result = self.loader.load(&organisation).await;

        let failure = {
            let mut state = self.state.write().await;
            if state.generation != generation {
                debug!(
                    resource = self.loader.name(),
                    generation,
                    current = state.generation,
                    "Discarding superseded fetch result"
                );
                return;
            }

            state.loading = false;
            match result {
                Ok(data) => {
                    state.data = data;
                    None
                }
                Err(e) => Some(e),
            }
        };

        if let Some(e) = failure {
            error!(
                resource = self.loader.name(),
                organisation_id = %organisation.id,
                error = %e,
                "Failed to load resource"
            );
            self.notifier
                .notify(Notification::error(self.loader.failure_message()));
        }
    }

    /// Current data and busy flag.
    pub async fn snapshot(&self) -> Snapshot<L::Data> {
        let state = self.state.read().await;
        Snapshot {
            data: state.data.clone(),
            loading: state.loading,
        }
    }

    /// Clone of the held data.
    pub async fn data(&self) -> L::Data {
        self.state.read().await.data.clone()
    }

    /// Read the held data without cloning it.
    pub async fn read<R>(&self, f: impl FnOnce(&L::Data) -> R) -> R {
        let state = self.state.read().await;
        f(&state.data)
    }

    /// Whether a fetch is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// The organisation the store is scoped to.
    pub async fn organisation(&self) -> Option<Organisation> {
        self.state.read().await.organisation.clone()
    }

    /// Mutate the held data locally, without contacting the data source.
    pub(crate) async fn update<R>(&self, f: impl FnOnce(&mut L::Data) -> R) -> R {
        let mut state = self.state.write().await;
        f(&mut state.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use crate::notify::MemoryNotifier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Loader returning the organisation's name, counting calls.
    struct NameLoader {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl Loader for NameLoader {
        type Data = Vec<String>;

        fn name(&self) -> &'static str {
            "names"
        }

        async fn load(&self, organisation: &Organisation) -> DataResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DataError::Unavailable("down".to_string()));
            }
            Ok(vec![organisation.name.clone()])
        }
    }

    fn store(fail: bool) -> (Resource<NameLoader>, MemoryNotifier) {
        let notifier = MemoryNotifier::new();
        let loader = NameLoader {
            calls: AtomicUsize::new(0),
            fail,
        };
        (Resource::new(loader, Arc::new(notifier.clone())), notifier)
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let (store, _) = store(false);
        let snapshot = store.snapshot().await;

        assert!(snapshot.data.is_empty());
        assert!(!snapshot.loading);
        assert!(store.organisation().await.is_none());
    }

    #[tokio::test]
    async fn test_fetches_on_organisation_change_only() {
        let (store, _) = store(false);
        let org = Organisation::new("Acme");

        store.set_organisation(Some(org.clone())).await;
        store.set_organisation(Some(org.clone())).await;

        assert_eq!(store.loader.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.data().await, vec!["Acme".to_string()]);
    }

    #[tokio::test]
    async fn test_refetch_without_organisation_is_noop() {
        let (store, notifier) = store(false);

        store.refetch().await;

        assert_eq!(store.loader.calls.load(Ordering::SeqCst), 0);
        assert!(!store.is_loading().await);
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_failure_notifies_and_clears_loading() {
        let (store, notifier) = store(true);

        store.set_organisation(Some(Organisation::new("Acme"))).await;

        let snapshot = store.snapshot().await;
        assert!(snapshot.data.is_empty());
        assert!(!snapshot.loading);

        let notifications = notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0], Notification::error(store.loader.failure_message()));
    }

    #[tokio::test]
    async fn test_read_and_update() {
        let (store, _) = store(false);
        store.set_organisation(Some(Organisation::new("Acme"))).await;

        store.update(|names| names.push("extra".to_string())).await;

        assert_eq!(store.read(|names| names.len()).await, 2);
    }
}
