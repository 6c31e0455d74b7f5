//! Content-change events and the subscriber that maps them to cached
//! routes.
//!
//! Mutation handlers publish a `ContentEvent` after every successful
//! write; the subscriber decides which routes must be recomputed and
//! evicts them from the page cache. The write path never touches route
//! strings directly.

use tracing::debug;

use crate::cache::PageCache;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Services,
    WorkingProcesses,
    TeamMembers,
    Testimonials,
    CaseStudies,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Services => "services",
            ContentKind::WorkingProcesses => "working_processes",
            ContentKind::TeamMembers => "team_members",
            ContentKind::Testimonials => "testimonials",
            ContentKind::CaseStudies => "case_studies",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ContentEvent {
    pub kind: ContentKind,
}

/// Route paths whose cached output a change to `kind` makes stale.
/// Every section renders on the home page; case studies also have a
/// listing page of their own.
pub fn affected_routes(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::CaseStudies => &["/", "/case-studies"],
        _ => &["/"],
    }
}

#[async_trait::async_trait]
pub trait InvalidationSink: Send + Sync {
    async fn publish(&self, event: ContentEvent);
}

pub struct RouteInvalidator {
    cache: PageCache,
}

impl RouteInvalidator {
    pub fn new(cache: PageCache) -> Self {
        Self { cache }
    }
}

#[async_trait::async_trait]
impl InvalidationSink for RouteInvalidator {
    async fn publish(&self, event: ContentEvent) {
        for route in affected_routes(event.kind) {
            self.cache.invalidate(route).await;
            debug!(kind = event.kind.as_str(), route, "evicted cached page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn every_kind_touches_home() {
        for kind in [
            ContentKind::Services,
            ContentKind::WorkingProcesses,
            ContentKind::TeamMembers,
            ContentKind::Testimonials,
            ContentKind::CaseStudies,
        ] {
            assert!(affected_routes(kind).contains(&"/"));
        }
    }

    #[test]
    fn case_studies_also_touch_their_listing() {
        assert_eq!(affected_routes(ContentKind::CaseStudies), &["/", "/case-studies"]);
        assert_eq!(affected_routes(ContentKind::Services), &["/"]);
    }

    #[tokio::test]
    async fn publish_evicts_exactly_the_affected_routes() {
        let cache = PageCache::new(8, Duration::from_secs(60));
        cache.insert("/", "home".to_string()).await;
        cache.insert("/case-studies", "cs".to_string()).await;

        let sink = RouteInvalidator::new(cache.clone());
        sink.publish(ContentEvent { kind: ContentKind::Services }).await;

        assert!(cache.get("/").await.is_none());
        assert!(cache.get("/case-studies").await.is_some(), "unrelated route survives");

        sink.publish(ContentEvent { kind: ContentKind::CaseStudies }).await;
        assert!(cache.get("/case-studies").await.is_none());
    }
}
