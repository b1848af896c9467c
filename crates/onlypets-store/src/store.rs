//! # Application State Store
//!
//! `AppStore` owns every session collection and funnels all mutation
//! through its documented operations. Views receive an `Arc<AppStore>`
//! explicitly; there is no global instance.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    AppStore Operations                                  │
//! │                                                                         │
//! │  View Event                Store Operation           State Change       │
//! │  ──────────                ───────────────           ────────────       │
//! │                                                                         │
//! │  App start ──────────────► load_initial_data() ────► pets/services/...  │
//! │                            (once per session)        loading, error     │
//! │                                                                         │
//! │  Heart icon ─────────────► toggle_wishlist() ──────► wishlist ± item    │
//! │                                                                         │
//! │  Add to cart ────────────► add_to_cart() ──────────► qty += 1 / push    │
//! │  Quantity stepper ───────► update_cart_quantity() ─► qty = n / remove   │
//! │  Remove / checkout ──────► remove_from_cart() / clear_cart()            │
//! │                                                                         │
//! │  Booking form ───────────► has_booking_conflict() ─► (read only)        │
//! │                            add_booking() ──────────► bookings.push      │
//! │                                                                         │
//! │  Notifications ──────────► add_toast() / remove_toast() / expire_toasts │
//! │  Sign in button ─────────► toggle_auth_modal() / submit_auth()          │
//! │                                                                         │
//! │  Every mutation that changes state bumps the revision on the watch     │
//! │  channel so subscribed views re-render.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! Collections sit behind a `std::sync::RwLock`. Guards are only held for
//! the duration of a synchronous closure and never across an `.await`, so
//! the store is `Send + Sync` and can be shared through `Arc`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tokio::sync::{watch, OnceCell};
use tracing::{debug, error, info, warn};

use onlypets_core::booking::BookingLedger;
use onlypets_core::cart::{Cart, CartItem, CartTotals, CartUpdate};
use onlypets_core::images::ImageResolver;
use onlypets_core::toast::ToastQueue;
use onlypets_core::wishlist::{Toggle, Wishlist};
use onlypets_core::{
    catalog, validation, Booking, CoreResult, Pet, Product, Service, TimeSlot, Toast, ToastId, ToastKind, WishlistItem,
    DEFAULT_BOOKING_SEED_OFFSET_DAYS,
};

use crate::config::StorefrontConfig;
use crate::source::PetSource;
use crate::view::{HeaderBadges, StoreSnapshot};

/// Shown when the data source fails.
pub const LOAD_FAILED_MESSAGE: &str = "An error occurred while fetching initial data.";

/// Shown when the data source answers with no pets.
pub const NO_PETS_MESSAGE: &str =
    "Could not fetch pet data. Please check if your API key is configured correctly.";

/// Longest accepted toast TTL.
pub const MAX_TOAST_TTL_SECS: u64 = 86_400;

// =============================================================================
// Settings
// =============================================================================

/// Runtime knobs the store needs from configuration.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    /// `None` keeps toasts until removed explicitly.
    pub toast_ttl: Option<Duration>,
    pub booking_seed_offset_days: i64,
    pub image_base_url: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            toast_ttl: None,
            booking_seed_offset_days: DEFAULT_BOOKING_SEED_OFFSET_DAYS,
            image_base_url: onlypets_core::images::DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

impl From<&StorefrontConfig> for StoreSettings {
    fn from(config: &StorefrontConfig) -> Self {
        StoreSettings {
            toast_ttl: config
                .toasts
                .ttl_secs
                .map(|secs| Duration::seconds(secs.min(MAX_TOAST_TTL_SECS) as i64)),
            booking_seed_offset_days: config.catalog.booking_seed_offset_days,
            image_base_url: config.display.image_base_url.clone(),
        }
    }
}

// =============================================================================
// Session State
// =============================================================================

#[derive(Debug)]
struct SessionState {
    pets: Vec<Pet>,
    services: Vec<Service>,
    products: Vec<Product>,
    wishlist: Wishlist,
    cart: Cart,
    bookings: BookingLedger,
    toasts: ToastQueue,
    auth_modal_open: bool,
    loading: bool,
    error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            pets: Vec::new(),
            services: Vec::new(),
            products: Vec::new(),
            wishlist: Wishlist::new(),
            cart: Cart::new(),
            bookings: BookingLedger::new(),
            toasts: ToastQueue::new(),
            auth_modal_open: false,
            // The session starts in the loading state until the first load finishes.
            loading: true,
            error: None,
        }
    }
}

// =============================================================================
// AppStore
// =============================================================================

/// The storefront's single source of truth.
pub struct AppStore {
    source: Arc<dyn PetSource>,
    images: ImageResolver,
    settings: StoreSettings,
    state: RwLock<SessionState>,
    load: OnceCell<()>,
    revision: watch::Sender<u64>,
}

impl AppStore {
    /// Creates a store with default settings.
    pub fn new(source: Arc<dyn PetSource>) -> Self {
        Self::with_settings(source, StoreSettings::default())
    }

    /// Creates a store configured from a loaded [`StorefrontConfig`].
    pub fn from_config(source: Arc<dyn PetSource>, config: &StorefrontConfig) -> Self {
        Self::with_settings(source, StoreSettings::from(config))
    }

    pub fn with_settings(source: Arc<dyn PetSource>, settings: StoreSettings) -> Self {
        let (revision, _) = watch::channel(0);

        AppStore {
            source,
            images: ImageResolver::new(settings.image_base_url.clone()),
            settings,
            state: RwLock::new(SessionState::default()),
            load: OnceCell::new(),
            revision,
        }
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        // Every mutation is a single total step, so poisoned state is still consistent.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `f` under the write lock. `f` reports whether it changed
    /// anything; the revision is bumped before the lock is released, and
    /// only for real changes.
    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> (R, bool)) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let (result, changed) = f(&mut state);
        if changed {
            self.revision.send_modify(|rev| *rev += 1);
        }
        result
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        self.update(|state| (f(state), true))
    }

    // =========================================================================
    // Initial load
    // =========================================================================

    /// Populates pets, services, products and seeded bookings.
    ///
    /// Runs at most once per store. Concurrent callers wait for the same
    /// load; later callers return immediately. Never fails: a source error
    /// is recorded in [`AppStore::error`] and the collections stay empty.
    pub async fn load_initial_data(&self) {
        self.load.get_or_init(|| self.run_initial_load()).await;
    }

    /// True once the initial load has completed (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.load.initialized()
    }

    async fn run_initial_load(&self) {
        info!("Loading initial storefront data");
        self.mutate(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self.source.fetch_pets().await;
        let today = Utc::now().date_naive();

        self.mutate(|state| {
            match result {
                Ok(pets) => {
                    if pets.is_empty() {
                        warn!("Pet data source returned no pets");
                        state.error = Some(NO_PETS_MESSAGE.to_string());
                    }

                    state.pets = pets
                        .into_iter()
                        .map(|pet| pet.with_resolved_images(&self.images))
                        .collect();

                    state.services = catalog::services()
                        .into_iter()
                        .map(|service| service.with_resolved_image(&self.images))
                        .collect();

                    state.products = catalog::products();

                    // Seeded bookings go first; anything booked while the
                    // load was in flight is kept after them.
                    let mut ledger = BookingLedger::from(catalog::seed_bookings(
                        today,
                        self.settings.booking_seed_offset_days,
                    ));
                    for booking in state.bookings.bookings() {
                        ledger.record(booking.clone());
                    }
                    state.bookings = ledger;

                    info!(
                        pets = state.pets.len(),
                        services = state.services.len(),
                        products = state.products.len(),
                        "Initial data loaded"
                    );
                }
                Err(e) => {
                    error!(error = %e, "Failed to load initial data");
                    state.error = Some(LOAD_FAILED_MESSAGE.to_string());
                }
            }
            state.loading = false;
        });
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Removes the item if its id is saved, otherwise appends it.
    pub fn toggle_wishlist(&self, item: WishlistItem) -> Toggle {
        let id = item.id.clone();
        let outcome = self.mutate(|state| state.wishlist.toggle(item));
        debug!(id = %id, ?outcome, "toggle_wishlist");
        outcome
    }

    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.read().wishlist.contains(id)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of `product`, merging with an existing entry.
    ///
    /// Returns the entry's quantity after the add.
    pub fn add_to_cart(&self, product: &Product) -> u32 {
        let quantity = self.mutate(|state| state.cart.add(product));
        debug!(product_id = %product.id, quantity, "add_to_cart");
        quantity
    }

    /// Removes the entry for `product_id`; no-op if absent.
    pub fn remove_from_cart(&self, product_id: &str) -> bool {
        let removed = self.update(|state| {
            let removed = state.cart.remove(product_id);
            (removed, removed)
        });
        debug!(product_id = %product_id, removed, "remove_from_cart");
        removed
    }

    /// Sets the quantity for `product_id`. `n <= 0` removes the entry.
    pub fn update_cart_quantity(&self, product_id: &str, n: i64) -> CartUpdate {
        let outcome = self.update(|state| {
            let before = state.cart.get(product_id).map(|item| item.quantity);
            let outcome = state.cart.update_quantity(product_id, n);
            let changed = match outcome {
                CartUpdate::Set(quantity) => before != Some(quantity),
                CartUpdate::Removed => true,
                CartUpdate::Missing => false,
            };
            (outcome, changed)
        });
        debug!(product_id = %product_id, requested = n, ?outcome, "update_cart_quantity");
        outcome
    }

    pub fn clear_cart(&self) {
        self.update(|state| {
            let changed = !state.cart.is_empty();
            state.cart.clear();
            ((), changed)
        });
        debug!("clear_cart");
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Records a booking. Conflicting bookings are stored too; callers
    /// check [`AppStore::has_booking_conflict`] first if they want to refuse.
    pub fn add_booking(&self, booking: Booking) {
        debug!(
            service_id = %booking.service_id,
            date = %booking.date,
            slot = %booking.time_slot,
            "add_booking"
        );
        self.mutate(|state| state.bookings.record(booking));
    }

    pub fn has_booking_conflict(&self, booking: &Booking) -> bool {
        self.read().bookings.has_conflict(booking)
    }

    pub fn booked_slots(&self, service_id: &str, date: NaiveDate) -> Vec<TimeSlot> {
        self.read().bookings.booked_slots(service_id, date)
    }

    /// Checks a booking form before submit: known service, date not before
    /// `today`, slot still free. Does not record anything.
    pub fn check_booking(&self, booking: &Booking, today: NaiveDate) -> CoreResult<()> {
        let state = self.read();
        validation::validate_booking(booking, &state.services, today)?;
        state.bookings.check_available(booking)
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Raises a toast and returns its id for later removal.
    pub fn add_toast(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let message = message.into();
        let id = self.mutate(|state| state.toasts.push(message, kind, Utc::now()));
        debug!(%id, ?kind, "add_toast");
        id
    }

    pub fn remove_toast(&self, id: ToastId) -> bool {
        let removed = self.update(|state| {
            let removed = state.toasts.remove(id);
            (removed, removed)
        });
        debug!(%id, removed, "remove_toast");
        removed
    }

    /// Drops toasts older than the configured TTL.
    ///
    /// Does nothing when no TTL is configured. Returns the number removed.
    pub fn expire_toasts(&self, now: DateTime<Utc>) -> usize {
        let Some(ttl) = self.settings.toast_ttl else {
            return 0;
        };

        let removed = self.update(|state| {
            let removed = state.toasts.expire(now, ttl);
            (removed, removed > 0)
        });
        if removed > 0 {
            debug!(removed, "expire_toasts");
        }
        removed
    }

    // =========================================================================
    // Auth modal
    // =========================================================================

    pub fn toggle_auth_modal(&self, is_open: bool) {
        self.update(|state| {
            let changed = state.auth_modal_open != is_open;
            state.auth_modal_open = is_open;
            ((), changed)
        });
        debug!(is_open, "toggle_auth_modal");
    }

    pub fn is_auth_modal_open(&self) -> bool {
        self.read().auth_modal_open
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn pets(&self) -> Vec<Pet> {
        self.read().pets.clone()
    }

    pub fn pet(&self, id: &str) -> Option<Pet> {
        self.read().pets.iter().find(|p| p.id == id).cloned()
    }

    pub fn services(&self) -> Vec<Service> {
        self.read().services.clone()
    }

    pub fn service(&self, id: &str) -> Option<Service> {
        self.read().services.iter().find(|s| s.id == id).cloned()
    }

    pub fn products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn wishlist(&self) -> Vec<WishlistItem> {
        self.read().wishlist.items().to_vec()
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.read().cart.items().to_vec()
    }

    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(&self.read().cart)
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.read().bookings.bookings().to_vec()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.read().toasts.toasts().to_vec()
    }

    /// Counts shown on the header icons.
    pub fn header_badges(&self) -> HeaderBadges {
        let state = self.read();
        HeaderBadges {
            wishlist_count: state.wishlist.len(),
            cart_quantity: state.cart.total_quantity(),
        }
    }

    /// Consistent copy of the whole session for a full re-render.
    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.read();
        // Bumped only while the write lock is held, so this matches `state`.
        let revision = *self.revision.borrow();
        StoreSnapshot {
            revision,
            pets: state.pets.clone(),
            services: state.services.clone(),
            products: state.products.clone(),
            wishlist: state.wishlist.items().to_vec(),
            cart: state.cart.items().to_vec(),
            cart_totals: CartTotals::from(&state.cart),
            bookings: state.bookings.bookings().to_vec(),
            toasts: state.toasts.toasts().to_vec(),
            is_auth_modal_open: state.auth_modal_open,
            loading: state.loading,
            error: state.error.clone(),
        }
    }

    // =========================================================================
    // Change notifications
    // =========================================================================

    /// Subscribes to the revision counter. It increases after every mutation
    /// that changed the session.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::source::{FailingPetSource, GeneratedPetSource, StaticPetSource};
    use async_trait::async_trait;
    use onlypets_core::{CoreError, Money, WishlistKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn store() -> AppStore {
        AppStore::new(Arc::new(GeneratedPetSource::new(4)))
    }

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(1_000))
    }

    fn wish(id: &str) -> WishlistItem {
        WishlistItem {
            id: id.to_string(),
            name: id.to_string(),
            image_url: String::new(),
            kind: WishlistKind::Product,
        }
    }

    fn quantities(store: &AppStore) -> Vec<(String, u32)> {
        store
            .cart()
            .into_iter()
            .map(|i| (i.product.id, i.quantity))
            .collect()
    }

    /// Counts fetches and yields once so concurrent callers interleave.
    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PetSource for CountingSource {
        async fn fetch_pets(&self) -> Result<Vec<Pet>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(vec![GeneratedPetSource::generate_pet(0)])
        }
    }

    /// Blocks until released so tests can act while the load is in flight.
    struct GatedSource {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl PetSource for GatedSource {
        async fn fetch_pets(&self) -> Result<Vec<Pet>, SourceError> {
            self.gate.notified().await;
            Ok(vec![GeneratedPetSource::generate_pet(1)])
        }
    }

    // -------------------------------------------------------------------------
    // Initial load
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_starts_loading_with_empty_collections() {
        let store = store();
        assert!(store.loading());
        assert!(!store.is_loaded());
        assert!(store.pets().is_empty());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_successful_load_populates_everything() {
        let store = store();
        store.load_initial_data().await;

        assert!(!store.loading());
        assert!(store.is_loaded());
        assert!(store.error().is_none());
        assert_eq!(store.pets().len(), 4);
        assert_eq!(store.services().len(), 5);
        assert!(!store.products().is_empty());

        assert!(store
            .pets()
            .iter()
            .all(|p| p.image_urls.len() == onlypets_core::PET_IMAGE_COUNT));
        assert!(store.services().iter().all(|s| !s.image_url.is_empty()));
    }

    #[tokio::test]
    async fn test_load_seeds_conflict_booking() {
        let store = store();
        store.load_initial_data().await;

        let expected_date = Utc::now().date_naive() + Duration::days(5);
        let seeded = Booking::new("service_01", expected_date, TimeSlot::Morning);

        assert_eq!(store.bookings(), vec![seeded.clone()]);
        assert!(store.has_booking_conflict(&seeded));
        assert_eq!(
            store.booked_slots("service_01", expected_date),
            vec![TimeSlot::Morning]
        );
    }

    #[tokio::test]
    async fn test_failed_load_sets_error_and_clears_loading() {
        let store = AppStore::new(Arc::new(FailingPetSource::new("generator offline")));
        store.load_initial_data().await;

        assert!(!store.loading());
        assert_eq!(store.error().as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert!(store.pets().is_empty());
        assert!(store.services().is_empty());
        assert!(store.products().is_empty());
        assert!(store.bookings().is_empty());
    }

    #[tokio::test]
    async fn test_empty_source_sets_error_but_loads_catalog() {
        let store = AppStore::new(Arc::new(StaticPetSource::new(vec![])));
        store.load_initial_data().await;

        assert!(!store.loading());
        assert_eq!(store.error().as_deref(), Some(NO_PETS_MESSAGE));
        assert!(store.pets().is_empty());
        assert_eq!(store.services().len(), 5);
    }

    #[tokio::test]
    async fn test_out_of_range_seed_offset_loads_without_seed() {
        for offset in [100_000_000, i64::MAX] {
            let settings = StoreSettings {
                booking_seed_offset_days: offset,
                ..StoreSettings::default()
            };
            let store = AppStore::with_settings(Arc::new(GeneratedPetSource::new(2)), settings);
            store.load_initial_data().await;

            assert!(store.is_loaded());
            assert!(!store.loading());
            assert!(store.error().is_none());
            assert_eq!(store.pets().len(), 2);
            assert!(store.bookings().is_empty());
        }
    }

    #[tokio::test]
    async fn test_unvalidated_config_offset_does_not_break_load() {
        let config: StorefrontConfig =
            toml::from_str("[catalog]\nbooking_seed_offset_days = 100000000").unwrap();
        assert!(config.validate().is_err());

        let store = AppStore::from_config(Arc::new(GeneratedPetSource::new(1)), &config);
        store.load_initial_data().await;

        assert!(!store.loading());
        assert!(store.bookings().is_empty());
        // Lock is healthy afterwards.
        store.add_to_cart(&product("p1"));
        assert_eq!(store.cart().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_loads_query_source_once() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let store = AppStore::new(source.clone());

        tokio::join!(store.load_initial_data(), store.load_initial_data());
        store.load_initial_data().await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.pets().len(), 1);
    }

    #[tokio::test]
    async fn test_bookings_made_during_load_are_kept() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(AppStore::new(Arc::new(GatedSource { gate: gate.clone() })));

        let loader = {
            let store = store.clone();
            tokio::spawn(async move { store.load_initial_data().await })
        };

        let early = Booking::new(
            "service_03",
            Utc::now().date_naive() + Duration::days(1),
            TimeSlot::Evening,
        );
        store.add_booking(early.clone());
        gate.notify_one();
        loader.await.unwrap();

        let bookings = store.bookings();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].service_id, "service_01");
        assert_eq!(bookings[1], early);
    }

    // -------------------------------------------------------------------------
    // Wishlist
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_wishlist_twice_restores_state() {
        let store = store();
        store.toggle_wishlist(wish("a"));
        let before = store.wishlist();

        assert_eq!(store.toggle_wishlist(wish("b")), Toggle::Added);
        assert!(store.is_wishlisted("b"));
        assert_eq!(store.toggle_wishlist(wish("b")), Toggle::Removed);

        assert_eq!(store.wishlist(), before);
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_to_cart_twice_yields_quantity_two() {
        let store = store();
        let p = product("p1");

        store.add_to_cart(&p);
        store.add_to_cart(&p);

        assert_eq!(quantities(&store), vec![("p1".to_string(), 2)]);
    }

    #[test]
    fn test_cart_scenario() {
        let store = store();
        let p1 = product("p1");

        assert!(store.cart().is_empty());
        store.add_to_cart(&p1);
        assert_eq!(quantities(&store), vec![("p1".to_string(), 1)]);
        store.add_to_cart(&p1);
        assert_eq!(quantities(&store), vec![("p1".to_string(), 2)]);
        store.update_cart_quantity("p1", 1);
        assert_eq!(quantities(&store), vec![("p1".to_string(), 1)]);
        store.remove_from_cart("p1");
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let store = store();
        store.add_to_cart(&product("p1"));
        store.add_to_cart(&product("p2"));

        assert_eq!(store.update_cart_quantity("p1", 0), CartUpdate::Removed);
        assert_eq!(store.update_cart_quantity("p2", -5), CartUpdate::Removed);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_absent_id_leaves_cart_unchanged() {
        let store = store();
        store.add_to_cart(&product("p1"));
        let before = store.cart();

        assert!(!store.remove_from_cart("ghost"));
        assert_eq!(store.update_cart_quantity("ghost", 3), CartUpdate::Missing);
        assert_eq!(store.cart(), before);
    }

    #[test]
    fn test_clear_cart_and_badges() {
        let store = store();
        store.add_to_cart(&product("p1"));
        store.add_to_cart(&product("p1"));
        store.add_to_cart(&product("p2"));
        store.toggle_wishlist(wish("w1"));

        let badges = store.header_badges();
        assert_eq!(badges.wishlist_count, 1);
        assert_eq!(badges.cart_quantity, 3);
        assert_eq!(store.cart_totals().subtotal.cents(), 3_000);

        store.clear_cart();
        assert!(store.cart().is_empty());
        assert_eq!(store.header_badges().cart_quantity, 0);
    }

    // -------------------------------------------------------------------------
    // Bookings
    // -------------------------------------------------------------------------

    #[test]
    fn test_duplicate_bookings_are_both_stored() {
        let store = store();
        let booking = Booking::new(
            "service_02",
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            TimeSlot::Afternoon,
        );

        assert!(!store.has_booking_conflict(&booking));
        store.add_booking(booking.clone());
        assert!(store.has_booking_conflict(&booking));
        store.add_booking(booking.clone());

        assert_eq!(store.bookings(), vec![booking.clone(), booking]);
    }

    #[tokio::test]
    async fn test_check_booking() {
        let store = store();
        store.load_initial_data().await;

        let today = Utc::now().date_naive();
        let seeded_date = today + Duration::days(5);

        let free = Booking::new("service_02", seeded_date, TimeSlot::Morning);
        assert!(store.check_booking(&free, today).is_ok());

        let taken = Booking::new("service_01", seeded_date, TimeSlot::Morning);
        assert!(matches!(
            store.check_booking(&taken, today),
            Err(CoreError::SlotTaken { .. })
        ));

        let unknown = Booking::new("service_99", seeded_date, TimeSlot::Evening);
        assert!(matches!(
            store.check_booking(&unknown, today),
            Err(CoreError::ServiceNotFound(_))
        ));

        let past = Booking::new("service_02", today - Duration::days(1), TimeSlot::Evening);
        assert!(matches!(
            store.check_booking(&past, today),
            Err(CoreError::Validation(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Toasts
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_then_remove_toast_leaves_empty() {
        let store = store();
        let id = store.add_toast("x", ToastKind::Success);

        assert_eq!(store.toasts().len(), 1);
        assert!(store.remove_toast(id));
        assert!(store.toasts().is_empty());
    }

    #[test]
    fn test_identical_toasts_are_not_deduplicated() {
        let store = store();
        let a = store.add_toast("Saved", ToastKind::Info);
        let b = store.add_toast("Saved", ToastKind::Info);

        assert_ne!(a, b);
        assert_eq!(store.toasts().len(), 2);
        assert!(!store.remove_toast(ToastId(u64::MAX)));
        assert_eq!(store.toasts().len(), 2);
    }

    #[test]
    fn test_expire_toasts_without_ttl_is_noop() {
        let store = store();
        store.add_toast("sticky", ToastKind::Info);

        let far_future = Utc::now() + Duration::days(365);
        assert_eq!(store.expire_toasts(far_future), 0);
        assert_eq!(store.toasts().len(), 1);
    }

    #[test]
    fn test_expire_toasts_with_ttl() {
        let settings = StoreSettings {
            toast_ttl: Some(Duration::seconds(5)),
            ..StoreSettings::default()
        };
        let store = AppStore::with_settings(Arc::new(GeneratedPetSource::new(1)), settings);
        store.add_toast("short lived", ToastKind::Success);

        assert_eq!(store.expire_toasts(Utc::now()), 0);
        assert_eq!(store.expire_toasts(Utc::now() + Duration::seconds(6)), 1);
        assert!(store.toasts().is_empty());
    }

    // -------------------------------------------------------------------------
    // Auth modal and notifications
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_auth_modal() {
        let store = store();
        assert!(!store.is_auth_modal_open());
        store.toggle_auth_modal(true);
        assert!(store.is_auth_modal_open());
        store.toggle_auth_modal(false);
        assert!(!store.is_auth_modal_open());
    }

    #[test]
    fn test_mutations_bump_revision() {
        let store = store();
        let mut rx = store.subscribe();
        assert_eq!(store.revision(), 0);

        store.add_to_cart(&product("p1"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);

        store.toggle_auth_modal(true);
        store.add_toast("hi", ToastKind::Info);
        assert_eq!(*rx.borrow_and_update(), 3);

        // Reads do not notify.
        let _ = store.snapshot();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_noop_mutations_keep_revision() {
        let store = store();
        store.add_to_cart(&product("p1"));
        store.add_toast("hi", ToastKind::Info);
        let mut rx = store.subscribe();
        let _ = rx.borrow_and_update();

        assert!(!store.remove_from_cart("ghost"));
        assert_eq!(store.update_cart_quantity("ghost", 4), CartUpdate::Missing);
        assert_eq!(store.update_cart_quantity("p1", 1), CartUpdate::Set(1));
        assert!(!store.remove_toast(ToastId(u64::MAX)));
        store.toggle_auth_modal(false);
        assert_eq!(store.expire_toasts(Utc::now()), 0);

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.revision(), 2);

        store.update_cart_quantity("p1", 3);
        store.clear_cart();
        store.clear_cart();
        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn test_snapshot_revision_matches_state() {
        let store = store();
        store.add_to_cart(&product("p1"));
        store.toggle_auth_modal(true);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.revision, 2);
        assert_eq!(snapshot.revision, store.revision());
        assert_eq!(snapshot.cart.len(), 1);
        assert!(snapshot.is_auth_modal_open);
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = StorefrontConfig::default();
        config.toasts.ttl_secs = Some(1_000_000);
        config.catalog.booking_seed_offset_days = 9;

        let settings = StoreSettings::from(&config);
        assert_eq!(settings.toast_ttl, Some(Duration::seconds(MAX_TOAST_TTL_SECS as i64)));
        assert_eq!(settings.booking_seed_offset_days, 9);
    }
}
