//! Per-entity fetch state containers
//!
//! Every screen-facing fetch goes through the same small state
//! machine: `loading -> success | error`, re-entering `loading` on a
//! manual refetch or a key change. Failures are absorbed into state and
//! never propagate past the container; a failed refetch keeps the last
//! successful data visible (stale-but-visible policy).
//!
//! Overlapping refetches are resolved with a generation counter: each
//! fetch invocation takes a fresh generation, and a settling fetch
//! writes its result only while its generation is still current. The
//! newest issued fetch therefore always wins, never a slow straggler.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use tracing::debug;

use crate::error::ApiError;

type FetchResult<T> = std::result::Result<T, ApiError>;

/// Snapshot of one container's state
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// Last successfully fetched value; survives later failures
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

struct QueryCore<T> {
    state: tokio::sync::RwLock<QueryState<T>>,
    generation: AtomicU64,
}

impl<T> QueryCore<T> {
    fn new() -> Self {
        Self {
            state: tokio::sync::RwLock::new(QueryState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Enter loading and claim a new generation for this fetch
    ///
    /// The bump happens under the state lock so it serializes with
    /// every staleness check in `settle`.
    async fn begin(&self) -> u64 {
        let mut state = self.state.write().await;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        state.is_loading = true;
        state.error = None;
        generation
    }

    /// Record a settled fetch, unless a newer one has been issued
    async fn settle(&self, generation: u64, result: FetchResult<T>) {
        let mut state = self.state.write().await;
        // Checked under the lock: a newer fetch may have begun while
        // this result was waiting for it
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Dropping stale fetch result");
            return;
        }
        match result {
            Ok(data) => {
                state.data = Some(data);
                state.error = None;
            }
            // Previous data intentionally kept readable
            Err(error) => {
                state.error = Some(error);
            }
        }
        state.is_loading = false;
    }

    /// Invalidate any in-flight fetch without touching state
    async fn invalidate(&self) {
        let _state = self.state.write().await;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Fetch container for a parameterless query
pub struct Query<T> {
    core: Arc<QueryCore<T>>,
    fetcher: Arc<dyn Fn() -> BoxFuture<'static, FetchResult<T>> + Send + Sync>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Query<T> {
    pub fn new<F, Fut>(fetcher: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        Self {
            core: Arc::new(QueryCore::new()),
            fetcher: Arc::new(move || Box::pin(fetcher()) as BoxFuture<'static, FetchResult<T>>),
        }
    }

    /// Run the fetch and record the outcome
    ///
    /// Safe to call concurrently from clones; see the module docs for
    /// how overlapping calls resolve.
    pub async fn refetch(&self) {
        let generation = self.core.begin().await;
        let result = (self.fetcher)().await;
        self.core.settle(generation, result).await;
    }

    pub async fn snapshot(&self) -> QueryState<T> {
        self.core.state.read().await.clone()
    }

    pub async fn data(&self) -> Option<T> {
        self.core.state.read().await.data.clone()
    }

    pub async fn error(&self) -> Option<ApiError> {
        self.core.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.core.state.read().await.is_loading
    }
}

/// Key types a [`KeyedQuery`] can be parameterized by
///
/// `is_absent` marks the values that suppress fetching entirely, the
/// way a screen renders before its route params resolve.
pub trait QueryKey: Clone + PartialEq + Send + Sync + 'static {
    fn is_absent(&self) -> bool;
}

impl QueryKey for u64 {
    fn is_absent(&self) -> bool {
        *self == 0
    }
}

impl QueryKey for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// Fetch container parameterized by an entity key
///
/// While the key is absent (`None`, `0`, empty) no fetch is issued and
/// the container stays in its initial `is_loading = true, data = None`
/// state. Setting a new present key re-runs the fetch.
pub struct KeyedQuery<K, T> {
    core: Arc<QueryCore<T>>,
    key: Arc<Mutex<Option<K>>>,
    fetcher: Arc<dyn Fn(K) -> BoxFuture<'static, FetchResult<T>> + Send + Sync>,
}

impl<K, T> Clone for KeyedQuery<K, T> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
            key: Arc::clone(&self.key),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<K, T> KeyedQuery<K, T>
where
    K: QueryKey,
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(fetcher: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = FetchResult<T>> + Send + 'static,
    {
        Self {
            core: Arc::new(QueryCore::new()),
            key: Arc::new(Mutex::new(None)),
            fetcher: Arc::new(move |key| {
                Box::pin(fetcher(key)) as BoxFuture<'static, FetchResult<T>>
            }),
        }
    }

    pub fn key(&self) -> Option<K> {
        self.key.lock().unwrap().clone()
    }

    /// Install a key, fetching when it changed to a present value
    ///
    /// Absent keys act as a guard clause: nothing is fetched and any
    /// in-flight fetch is invalidated.
    pub async fn set_key(&self, key: Option<K>) {
        let effective = key.filter(|k| !k.is_absent());
        let changed = {
            let mut slot = self.key.lock().unwrap();
            if *slot == effective {
                false
            } else {
                *slot = effective.clone();
                true
            }
        };

        match effective {
            None => self.core.invalidate().await,
            Some(key) if changed => self.run(key).await,
            Some(_) => {}
        }
    }

    /// Re-run the fetch for the current key; no-op while the key is absent
    pub async fn refetch(&self) {
        if let Some(key) = self.key() {
            self.run(key).await;
        }
    }

    async fn run(&self, key: K) {
        let generation = self.core.begin().await;
        let result = (self.fetcher)(key).await;
        self.core.settle(generation, result).await;
    }

    pub async fn snapshot(&self) -> QueryState<T> {
        self.core.state.read().await.clone()
    }

    pub async fn data(&self) -> Option<T> {
        self.core.state.read().await.data.clone()
    }

    pub async fn error(&self) -> Option<ApiError> {
        self.core.state.read().await.error.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.core.state.read().await.is_loading
    }
}
