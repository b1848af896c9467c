//! # onlypets-store: Session State for the OnlyPets Storefront
//!
//! Owns every session collection and exposes the operations views call.
//! The only asynchronous step is the one-shot initial load from a
//! [`PetSource`]; everything else is a synchronous mutation that bumps the
//! store's revision.
//!
//! ## Crate Layout
//! ```text
//! onlypets_store/
//! ├── lib.rs      ◄─── You are here
//! ├── store.rs    ◄─── AppStore: collections, load, mutations, change feed
//! ├── auth.rs     ◄─── Simulated login/signup submit
//! ├── source.rs   ◄─── PetSource trait + generated/static/failing sources
//! ├── view.rs     ◄─── HeaderBadges, StoreSnapshot
//! ├── config.rs   ◄─── StorefrontConfig (defaults < TOML < env)
//! └── error.rs    ◄─── SourceError, StoreError
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use onlypets_store::{AppStore, GeneratedPetSource};
//!
//! # async fn demo() {
//! let store = Arc::new(AppStore::new(Arc::new(GeneratedPetSource::new(6))));
//! store.load_initial_data().await;
//!
//! let products = store.products();
//! store.add_to_cart(&products[0]);
//! assert_eq!(store.header_badges().cart_quantity, 1);
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod source;
pub mod store;
pub mod view;

pub use auth::AuthMode;
pub use config::StorefrontConfig;
pub use error::{SourceError, StoreError, StoreResult};
pub use source::{FailingPetSource, GeneratedPetSource, PetSource, StaticPetSource};
pub use store::{AppStore, StoreSettings, LOAD_FAILED_MESSAGE, NO_PETS_MESSAGE};
pub use view::{HeaderBadges, StoreSnapshot};
