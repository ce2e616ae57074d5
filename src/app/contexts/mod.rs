//! Reactive domain contexts.
//!
//! Each context is a Copy struct of Signals binding one domain service to
//! one [`ResourceCache`]. The shared commit discipline lives in
//! [`CacheHandles`]: issue a sequence ticket, run the service call, and only
//! commit the response if the ticket is still the latest of its kind.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::load_config_or_default;
use crate::domain::Keyed;
use crate::services::{
    AuthService, CarrierService, OrderService, RouteService, ServiceResult, ShipmentService,
};
use crate::session::{default_store, SessionStore};
use crate::state::{RequestSequencer, ResourceCache, Ticket};

mod auth;
mod carriers;
mod orders;
mod routes;
mod shipments;

pub use auth::{use_auth, use_auth_provider, AuthContext};
pub use carriers::{use_carrier_provider, use_carriers, CarrierContext};
pub use orders::{use_order_provider, use_orders, OrderContext};
pub use routes::{use_route_provider, use_routes, RouteContext};
pub use shipments::{use_shipment_provider, use_shipments, ShipmentContext};

/// The injected service bundle every context draws from. Built once at the
/// app root; tests build their own against a mock backend.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<AuthService>,
    pub orders: Arc<OrderService>,
    pub shipments: Arc<ShipmentService>,
    pub carriers: Arc<CarrierService>,
    pub routes: Arc<RouteService>,
}

impl Services {
    pub fn new(api_url: &str, session: Arc<dyn SessionStore>) -> Self {
        let api = Arc::new(ApiClient::new(api_url, session.clone()));
        Self {
            auth: Arc::new(AuthService::new(api.clone(), session)),
            orders: Arc::new(OrderService::new(api.clone())),
            shipments: Arc::new(ShipmentService::new(api.clone())),
            carriers: Arc::new(CarrierService::new(api.clone())),
            routes: Arc::new(RouteService::new(api)),
        }
    }
}

/// Provide the service bundle and every domain context. Call once at the
/// app root, after the theme/notice providers.
pub fn use_portal_providers() {
    let services = use_hook(|| {
        let config = load_config_or_default();
        Services::new(&config.api_url, default_store())
    });
    use_context_provider(|| services);

    use_auth_provider();
    use_order_provider();
    use_shipment_provider();
    use_carrier_provider();
    use_route_provider();
}

/// Cache + sequencer signal pair with the shared commit discipline.
pub(crate) struct CacheHandles<T: 'static> {
    cache: Signal<ResourceCache<T>>,
    seq: Signal<RequestSequencer>,
}

impl<T: 'static> Clone for CacheHandles<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CacheHandles<T> {}

impl<T: Keyed + Clone + 'static> CacheHandles<T> {
    /// Hook: create the signals inside a provider.
    pub fn use_handles() -> Self {
        let cache = use_signal(ResourceCache::<T>::new);
        let seq = use_signal(RequestSequencer::new);
        Self { cache, seq }
    }

    pub fn snapshot(&self) -> ResourceCache<T> {
        (self.cache)()
    }

    /// Issue a ticket for `op` and flip the cache into its loading state.
    pub fn begin(&self, op: &'static str) -> Ticket {
        let mut seq = self.seq;
        let ticket = seq.write().begin(op);
        let mut cache = self.cache;
        cache.with_mut(ResourceCache::begin);
        ticket
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        self.seq.peek().is_current(ticket)
    }

    /// Commit a listing. Stale responses mutate nothing - the newer
    /// operation owns the loading/error flags.
    pub fn commit_list(&self, ticket: Ticket, result: ServiceResult<Vec<T>>) {
        if !self.is_current(&ticket) {
            return;
        }
        let mut cache = self.cache;
        cache.with_mut(|c| {
            match result {
                Ok(items) => c.set_collection(items),
                Err(err) => c.fail(err.user_message()),
            }
            c.finish();
        });
    }

    /// Commit a single-record fetch into `current`.
    pub fn commit_current(&self, ticket: Ticket, result: ServiceResult<T>) {
        if !self.is_current(&ticket) {
            return;
        }
        let mut cache = self.cache;
        cache.with_mut(|c| {
            match result {
                Ok(item) => c.set_current(item),
                Err(err) => c.fail(err.user_message()),
            }
            c.finish();
        });
    }

    /// Commit a creation. Returns whether the record was committed.
    pub fn commit_created(&self, ticket: Ticket, result: ServiceResult<T>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        let mut cache = self.cache;
        let mut committed = false;
        cache.with_mut(|c| {
            match result {
                Ok(item) => {
                    c.commit_created(item);
                    committed = true;
                }
                Err(err) => c.fail(err.user_message()),
            }
            c.finish();
        });
        committed
    }

    /// Commit an update (replace-in-place by `id`). Returns whether the
    /// record was committed.
    pub fn commit_updated(&self, ticket: Ticket, id: &str, result: ServiceResult<T>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        let mut cache = self.cache;
        let mut committed = false;
        cache.with_mut(|c| {
            match result {
                Ok(item) => {
                    c.commit_updated(id, item);
                    committed = true;
                }
                Err(err) => c.fail(err.user_message()),
            }
            c.finish();
        });
        committed
    }

    /// Commit a deletion. Returns whether the record was removed.
    pub fn commit_removed(&self, ticket: Ticket, id: &str, result: ServiceResult<()>) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }
        let mut cache = self.cache;
        let mut committed = false;
        cache.with_mut(|c| {
            match result {
                Ok(()) => {
                    c.commit_removed(id);
                    committed = true;
                }
                Err(err) => c.fail(err.user_message()),
            }
            c.finish();
        });
        committed
    }

    /// Finish an operation whose result lives outside the cache (clears
    /// loading only).
    pub fn settle(&self, ticket: Ticket) {
        if !self.is_current(&ticket) {
            return;
        }
        let mut cache = self.cache;
        cache.with_mut(ResourceCache::finish);
    }

    /// Abandon an operation that never issued a request (local precondition
    /// failure) without touching the data.
    pub fn abandon(&self, ticket: Ticket, message: impl Into<String>) {
        if !self.is_current(&ticket) {
            return;
        }
        let mut cache = self.cache;
        cache.with_mut(|c| {
            c.fail(message);
            c.finish();
        });
    }

    pub fn clear_current(&self) {
        let mut cache = self.cache;
        cache.with_mut(ResourceCache::clear_current);
    }
}
