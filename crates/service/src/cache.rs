//! Rendered-page cache keyed by route path.
//!
//! Page renderers insert full HTML documents; the invalidation subscriber
//! evicts routes after a successful content mutation. Entries also age
//! out on TTL so a missed eviction can only go stale for a bounded time.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

#[derive(Clone)]
pub struct PageCache {
    inner: Cache<String, Arc<str>>,
}

impl PageCache {
    pub fn new(max_pages: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_pages)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }

    pub async fn get(&self, route: &str) -> Option<Arc<str>> {
        self.inner.get(route).await
    }

    pub async fn insert(&self, route: &str, html: String) {
        self.inner.insert(route.to_string(), Arc::from(html)).await;
    }

    pub async fn invalidate(&self, route: &str) {
        self.inner.invalidate(route).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get_roundtrips() {
        let cache = PageCache::new(4, Duration::from_secs(60));
        cache.insert("/", "<html>home</html>".to_string()).await;
        let hit = cache.get("/").await.expect("cached");
        assert_eq!(&*hit, "<html>home</html>");
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let cache = PageCache::new(4, Duration::from_secs(60));
        cache.insert("/case-studies", "<html>cs</html>".to_string()).await;
        cache.invalidate("/case-studies").await;
        assert!(cache.get("/case-studies").await.is_none());
    }
}
