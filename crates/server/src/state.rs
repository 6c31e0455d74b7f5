use std::sync::Arc;

use handlebars::Handlebars;
use models::db::DataClients;
use service::cache::PageCache;
use service::invalidation::InvalidationSink;

/// Shared handler state. `clients.admin` backs the mutation routes,
/// `clients.public` backs page rendering.
#[derive(Clone)]
pub struct ServerState {
    pub clients: DataClients,
    pub cache: PageCache,
    pub invalidator: Arc<dyn InvalidationSink>,
    pub hb: Arc<Handlebars<'static>>,
}
