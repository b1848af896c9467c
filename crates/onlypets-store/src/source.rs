//! # Pet Data Source
//!
//! The boundary the store awaits during the initial load. The store treats
//! every implementation as a black box that either yields pet records or
//! fails with a [`SourceError`].
//!
//! ```text
//! ┌───────────────────┐   fetch_pets().await   ┌──────────────────────────┐
//! │     AppStore      │ ─────────────────────► │  dyn PetSource           │
//! │ load_initial_data │ ◄───────────────────── │  • GeneratedPetSource    │
//! └───────────────────┘   Result<Vec<Pet>>     │  • StaticPetSource       │
//!                                              │  • FailingPetSource      │
//!                                              └──────────────────────────┘
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use onlypets_core::{Gender, Pet, PetSize, Species};

use crate::error::SourceError;

/// Supplies the initial pet collection.
#[async_trait]
pub trait PetSource: Send + Sync {
    async fn fetch_pets(&self) -> Result<Vec<Pet>, SourceError>;
}

// =============================================================================
// Generated Source
// =============================================================================

/// Breed tables per species for the generator.
const BREEDS: &[(Species, &[&str])] = &[
    (
        Species::Dog,
        &[
            "Golden Retriever",
            "Labrador Retriever",
            "Beagle",
            "German Shepherd",
            "Indie",
            "Shih Tzu",
            "Pug",
        ],
    ),
    (
        Species::Cat,
        &["Persian", "Siamese", "Maine Coon", "Bengal", "Domestic Shorthair"],
    ),
    (Species::Rabbit, &["Holland Lop", "Netherland Dwarf", "Lionhead"]),
    (Species::Bird, &["Budgerigar", "Cockatiel", "Lovebird"]),
];

const NAMES: &[&str] = &[
    "Bella", "Max", "Luna", "Charlie", "Coco", "Rocky", "Simba", "Daisy", "Oreo", "Bruno",
    "Milo", "Ginger", "Leo", "Pepper", "Toffee", "Shadow", "Nala", "Buddy", "Mango", "Snowy",
];

const TRAITS: &[&str] = &[
    "playful",
    "gentle",
    "curious",
    "affectionate",
    "calm",
    "energetic",
    "loyal",
    "independent",
    "good with kids",
    "house-trained",
];

/// Produces a deterministic set of adoptable pets.
///
/// Records are derived from the index with seeded arithmetic, so the same
/// count always yields the same pets. Image URLs are left empty; the store
/// resolves them after loading.
#[derive(Debug, Clone)]
pub struct GeneratedPetSource {
    count: usize,
    latency: Option<Duration>,
}

impl GeneratedPetSource {
    pub fn new(count: usize) -> Self {
        GeneratedPetSource {
            count,
            latency: None,
        }
    }

    /// Delays every fetch, mimicking a remote generator.
    pub fn with_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency;
        self
    }

    /// Builds the pet at position `seed`.
    pub fn generate_pet(seed: usize) -> Pet {
        let (species, breeds) = BREEDS[seed % BREEDS.len()];
        let breed = breeds[(seed / BREEDS.len()) % breeds.len()];
        let name = NAMES[(seed * 7) % NAMES.len()];

        let age_months = 2 + ((seed * 13) % 94) as u32;
        let gender = if seed % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        };
        let size = match (species, seed % 3) {
            (Species::Dog, 0) => PetSize::Large,
            (Species::Dog, _) => PetSize::Medium,
            (Species::Cat, 2) => PetSize::Medium,
            _ => PetSize::Small,
        };

        let temperament: Vec<String> = (0..3)
            .map(|k| TRAITS[(seed * 3 + k * 4) % TRAITS.len()].to_string())
            .collect();

        let description = format!(
            "{} is a {} {} {} looking for a forever home. Known for being {} and {}.",
            name,
            temperament[0],
            breed,
            species,
            temperament[1],
            temperament[2],
        );

        Pet {
            id: format!("pet_{:03}", seed + 1),
            name: name.to_string(),
            species,
            breed: breed.to_string(),
            age_months,
            gender,
            size,
            description,
            temperament,
            image_urls: Vec::new(),
        }
    }
}

#[async_trait]
impl PetSource for GeneratedPetSource {
    async fn fetch_pets(&self) -> Result<Vec<Pet>, SourceError> {
        if let Some(latency) = self.latency {
            debug!(?latency, "Simulating generator latency");
            tokio::time::sleep(latency).await;
        }

        debug!(count = self.count, "Generating pets");
        Ok((0..self.count).map(Self::generate_pet).collect())
    }
}

// =============================================================================
// Fixed Sources
// =============================================================================

/// Returns a fixed list of pets.
#[derive(Debug, Clone, Default)]
pub struct StaticPetSource {
    pets: Vec<Pet>,
}

impl StaticPetSource {
    pub fn new(pets: Vec<Pet>) -> Self {
        StaticPetSource { pets }
    }

    /// Decodes a JSON array of pet records.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(StaticPetSource {
            pets: serde_json::from_str(json)?,
        })
    }
}

#[async_trait]
impl PetSource for StaticPetSource {
    async fn fetch_pets(&self) -> Result<Vec<Pet>, SourceError> {
        Ok(self.pets.clone())
    }
}

/// Always fails. Used to exercise the load error path.
#[derive(Debug, Clone)]
pub struct FailingPetSource {
    reason: String,
}

impl FailingPetSource {
    pub fn new(reason: impl Into<String>) -> Self {
        FailingPetSource {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PetSource for FailingPetSource {
    async fn fetch_pets(&self) -> Result<Vec<Pet>, SourceError> {
        Err(SourceError::Unavailable(self.reason.clone()))
    }
}
