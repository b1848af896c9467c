//! # Image Resolver
//!
//! Maps domain entities to display image URLs. Pure: no state, no I/O, and
//! always returns a usable URL (unknown entities fall back to a default).
//!
//! ```text
//! Pet ─────► species pool ──► rotate by stable hash of id ──► 3 URLs
//! Service ─► lookup by service id ──────────────────────────► 1 URL
//!            (unknown id → DEFAULT_SERVICE_IMAGE)
//! ```

use crate::types::{Pet, Service, Species};
use crate::PET_IMAGE_COUNT;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://images.unsplash.com";

pub const DEFAULT_PET_IMAGE: &str =
    "https://images.unsplash.com/photo-1450778869180-41d0601e046e?auto=format&fit=crop&w=800&q=80";
pub const DEFAULT_SERVICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?auto=format&fit=crop&w=800&q=80";
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?auto=format&fit=crop&w=800&q=80";

const DOG_PHOTOS: &[&str] = &[
    "photo-1543466835-00a7907e9de1",
    "photo-1517849845537-4d257902454a",
    "photo-1537151625747-768eb6cf92b2",
    "photo-1558788353-f76d92427f16",
    "photo-1583511655857-d19b40a7a54e",
];

const CAT_PHOTOS: &[&str] = &[
    "photo-1514888286974-6c03e2ca1dba",
    "photo-1573865526739-10659fec78a5",
    "photo-1495360010541-f48722b34f7d",
    "photo-1518791841217-8f162f1e1131",
];

const RABBIT_PHOTOS: &[&str] = &[
    "photo-1585110396000-c9ffd4e4b308",
    "photo-1535241749838-299277b6305f",
    "photo-1452857297128-d9c29adba80b",
];

const BIRD_PHOTOS: &[&str] = &[
    "photo-1552728089-57bdde30beb3",
    "photo-1444464666168-49d633b86797",
    "photo-1522926193341-e9ffd686c60f",
];

const OTHER_PHOTOS: &[&str] = &[
    "photo-1425082661705-1834bfd09dca",
    "photo-1548767797-d8c844163c4c",
];

const SERVICE_PHOTOS: &[(&str, &str)] = &[
    ("service_01", "photo-1516734212186-a967f81ad0d7"),
    ("service_02", "photo-1628009368231-7bb7cfcb0def"),
    ("service_03", "photo-1587300003388-59208cc962cb"),
    ("service_04", "photo-1450778869180-41d0601e046e"),
    ("service_05", "photo-1494947665470-20322015e3a8"),
];

/// Builds image URLs against a configurable CDN base.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        ImageResolver::new(DEFAULT_IMAGE_BASE_URL)
    }
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ImageResolver { base_url }
    }

    /// Returns [`PET_IMAGE_COUNT`] URLs for a pet.
    ///
    /// The starting photo is picked from the pet id so the same pet always
    /// gets the same gallery, while pets of one species don't all share a
    /// cover photo.
    pub fn pet_images(&self, pet: &Pet) -> Vec<String> {
        let pool = species_pool(pet.species);
        let start = stable_hash(&pet.id) as usize % pool.len();

        (0..PET_IMAGE_COUNT)
            .map(|offset| self.photo_url(pool[(start + offset) % pool.len()]))
            .collect()
    }

    pub fn service_image(&self, service: &Service) -> String {
        SERVICE_PHOTOS
            .iter()
            .find(|(id, _)| *id == service.id)
            .map(|(_, slug)| self.photo_url(slug))
            .unwrap_or_else(|| DEFAULT_SERVICE_IMAGE.to_string())
    }

    fn photo_url(&self, slug: &str) -> String {
        format!("{}/{}?auto=format&fit=crop&w=800&q=80", self.base_url, slug)
    }
}

fn species_pool(species: Species) -> &'static [&'static str] {
    match species {
        Species::Dog => DOG_PHOTOS,
        Species::Cat => CAT_PHOTOS,
        Species::Rabbit => RABBIT_PHOTOS,
        Species::Bird => BIRD_PHOTOS,
        Species::Other => OTHER_PHOTOS,
    }
}

// FNV-1a; std's hasher is not guaranteed stable across releases.
fn stable_hash(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Gender, PetSize};

    fn pet(id: &str, species: Species) -> Pet {
        Pet {
            id: id.to_string(),
            name: "Mochi".to_string(),
            species,
            breed: "Mixed".to_string(),
            age_months: 10,
            gender: Gender::Female,
            size: PetSize::Small,
            description: String::new(),
            temperament: vec![],
            image_urls: vec![],
        }
    }

    fn service(id: &str) -> Service {
        Service {
            id: id.to_string(),
            name: "Test".to_string(),
            description: String::new(),
            price: Money::zero(),
            duration_minutes: 30,
            activities: vec![],
            notes: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_pet_images_are_stable_and_distinct() {
        let p = pet("pet_7", Species::Cat);
        let resolver = ImageResolver::default();
        let first = resolver.pet_images(&p);
        let second = resolver.pet_images(&p);

        assert_eq!(first.len(), PET_IMAGE_COUNT);
        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
        assert!(first.iter().all(|u| u.starts_with(DEFAULT_IMAGE_BASE_URL)));
    }

    #[test]
    fn test_small_pool_still_yields_full_gallery() {
        let urls = ImageResolver::default().pet_images(&pet("x", Species::Other));
        assert_eq!(urls.len(), PET_IMAGE_COUNT);
    }

    #[test]
    fn test_service_image_falls_back_to_default() {
        let resolver = ImageResolver::default();
        assert!(resolver
            .service_image(&service("service_01"))
            .contains(SERVICE_PHOTOS[0].1));
        assert_eq!(
            resolver.service_image(&service("service_99")),
            DEFAULT_SERVICE_IMAGE
        );
    }

    #[test]
    fn test_custom_base_url_trims_trailing_slash() {
        let resolver = ImageResolver::new("https://cdn.example.com/");
        let url = resolver.service_image(&service("service_02"));
        assert!(url.starts_with("https://cdn.example.com/photo-"));
    }

    #[test]
    fn test_resolved_records_use_resolver_base() {
        let resolver = ImageResolver::new("https://cdn.example.com");

        let p = pet("pet_3", Species::Dog).with_resolved_images(&resolver);
        assert_eq!(p.image_urls.len(), PET_IMAGE_COUNT);
        assert!(p
            .image_urls
            .iter()
            .all(|u| u.starts_with("https://cdn.example.com/")));

        let s = service("service_04").with_resolved_image(&resolver);
        assert!(s.image_url.starts_with("https://cdn.example.com/"));
    }
}
