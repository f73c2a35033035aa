//! Fingerprint-keyed LRU chart cache.
//!
//! Endpoints that derive several views from one birth rebuild nothing:
//! the first request builds the D1, later ones take it by `Arc`.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::chart::D1Chart;
use crate::error::ChartError;

pub struct ChartCache {
    inner: Mutex<LruCache<String, Arc<D1Chart>>>,
}

impl ChartCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Fetch the chart for a fingerprint, building it on miss.
    ///
    /// The build closure runs outside the cache lock so a slow build
    /// never blocks readers of other entries.
    pub fn get_or_build<F>(&self, key: &str, build: F) -> Result<Arc<D1Chart>, ChartError>
    where
        F: FnOnce() -> Result<D1Chart, ChartError>,
    {
        if let Some(hit) = self.inner.lock().get(key) {
            debug!(key, "chart cache hit");
            return Ok(Arc::clone(hit));
        }

        let chart = Arc::new(build()?);
        self.inner
            .lock()
            .put(key.to_string(), Arc::clone(&chart));
        debug!(key, "chart cache fill");
        Ok(chart)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ChartCache {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(64).expect("nonzero"))
    }
}
