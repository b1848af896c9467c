//! # OnlyPets Storefront Library
//!
//! Wires configuration, logging and the session store together. `main.rs`
//! only parses arguments and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! onlypets_storefront_lib/
//! ├── lib.rs      ◄─── You are here (startup, toast reaper)
//! └── main.rs     ◄─── Argument parsing, runtime
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use onlypets_store::{AppStore, GeneratedPetSource, StorefrontConfig};

/// How often the reaper sweeps expired toasts.
pub const TOAST_REAP_INTERVAL: Duration = Duration::from_millis(500);

/// Options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    /// Overrides the configured pet count.
    pub pet_count: Option<usize>,
    /// Print the loaded session as JSON on stdout.
    pub print_snapshot: bool,
    /// Write the effective configuration back to the config file.
    pub write_config: bool,
}

/// Runs one storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < storefront.toml < ONLYPETS_* env                       │
/// │     • invalid config falls back to defaults with a warning              │
/// │     • --write-config saves the effective config back to disk            │
/// │                                                                         │
/// │  2. Build Store ──────────────────────────────────────────────────────► │
/// │     • GeneratedPetSource with configured count and latency              │
/// │     • AppStore behind Arc, shared with the toast reaper                 │
/// │                                                                         │
/// │  3. Initial Load ─────────────────────────────────────────────────────► │
/// │     • pets, services, products, seeded booking                          │
/// │     • failures surface as the store's error message                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(options: RunOptions) -> Result<(), Box<dyn Error>> {
    info!("Starting OnlyPets storefront session");

    let mut config = StorefrontConfig::load_or_default(options.config_path.clone());
    if let Some(count) = options.pet_count.filter(|&n| n > 0) {
        config.catalog.pet_count = count;
    }
    if options.write_config {
        config.save(options.config_path.clone())?;
    }
    info!(
        pet_count = config.catalog.pet_count,
        toast_ttl = ?config.toast_ttl(),
        "Configuration loaded"
    );

    let source = GeneratedPetSource::new(config.catalog.pet_count)
        .with_latency(config.simulated_latency());
    let store = Arc::new(AppStore::from_config(Arc::new(source), &config));

    let reaper = config
        .toast_ttl()
        .map(|_| spawn_toast_reaper(store.clone(), TOAST_REAP_INTERVAL));

    store.load_initial_data().await;

    match store.error() {
        Some(message) => warn!(%message, "Storefront loaded with an error"),
        None => {
            let badges = store.header_badges();
            info!(
                pets = store.pets().len(),
                services = store.services().len(),
                products = store.products().len(),
                bookings = store.bookings().len(),
                wishlist = badges.wishlist_count,
                cart = badges.cart_quantity,
                subtotal = %store
                    .cart_totals()
                    .subtotal
                    .format_with_symbol(&config.display.currency_symbol),
                "Storefront ready"
            );
        }
    }

    if options.print_snapshot {
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    }

    if let Some(handle) = reaper {
        handle.abort();
    }

    Ok(())
}

/// Periodically drops toasts older than the store's TTL.
pub fn spawn_toast_reaper(store: Arc<AppStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let removed = store.expire_toasts(Utc::now());
            if removed > 0 {
                debug!(removed, "Expired toasts");
            }
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=onlypets_store=trace` - Show trace for the store only
/// - Default: INFO, DEBUG for onlypets crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,onlypets_store=debug,onlypets_storefront_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
