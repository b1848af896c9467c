//! # Static Catalog
//!
//! The service and product catalogs ship as literals; only pets come from a
//! data source. Services are returned without images; the store resolves
//! them on load.

use chrono::{Duration, NaiveDate};

use crate::money::Money;
use crate::types::{Booking, Product, ProductCategory, Service, TimeSlot};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The five care services offered by the storefront.
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "service_01".to_string(),
            name: "Full Grooming Package".to_string(),
            description: "A complete pampering session for your pet. Includes a bath, haircut, \
                          nail trim, and ear cleaning to keep them looking and feeling their best."
                .to_string(),
            price: Money::from_major_minor(1500, 0),
            duration_minutes: 120,
            activities: strings(&[
                "Warm bath with premium shampoo",
                "Professional haircut and styling",
                "Nail trimming and filing",
                "Gentle ear cleaning",
                "Teeth brushing",
                "Anal gland expression",
            ]),
            notes: "Please inform us of any skin conditions or allergies beforehand.".to_string(),
            image_url: String::new(),
        },
        Service {
            id: "service_02".to_string(),
            name: "Annual Health Checkup".to_string(),
            description: "A comprehensive veterinary examination to monitor your pet's health. \
                          Includes vaccinations, parasite check, and a full physical."
                .to_string(),
            price: Money::from_major_minor(2500, 0),
            duration_minutes: 45,
            activities: strings(&[
                "Full physical examination",
                "Core vaccinations update",
                "Heartworm and parasite testing",
                "Nutritional consultation",
                "Blood work panel",
            ]),
            notes: "Please bring any previous medical records if this is your first visit."
                .to_string(),
            image_url: String::new(),
        },
        Service {
            id: "service_03".to_string(),
            name: "Basic Obedience Training".to_string(),
            description: "A 4-week group course covering essential commands like sit, stay, come, \
                          and leash manners. Perfect for new puppies or adopted dogs."
                .to_string(),
            price: Money::from_major_minor(8000, 0),
            duration_minutes: 60,
            activities: strings(&[
                "Positive reinforcement techniques",
                "Basic command training (sit, stay, come)",
                "Leash walking skills",
                "Socialization with other dogs",
                "Handler coaching session",
            ]),
            notes: "This is a 4-week course, meeting once per week. The price covers the full course."
                .to_string(),
            image_url: String::new(),
        },
        Service {
            id: "service_04".to_string(),
            name: "Pet Sitting (Per Day)".to_string(),
            description: "Peace of mind while you're away. We provide a safe, fun, and comfortable \
                          environment for your pet at our facility."
                .to_string(),
            price: Money::from_major_minor(1000, 0),
            duration_minutes: 1440,
            activities: strings(&[
                "Two long walks per day",
                "Supervised group playtime",
                "Regular feeding schedule",
                "Cozy overnight accommodation",
                "Daily photo updates",
            ]),
            notes: "Food is provided, but you are welcome to bring your pet's own food.".to_string(),
            image_url: String::new(),
        },
        Service {
            id: "service_05".to_string(),
            name: "Dog Walking (30 min)".to_string(),
            description: "A refreshing 30-minute walk for your dog to get exercise and a potty \
                          break during the day. Perfect for busy owners."
                .to_string(),
            price: Money::from_major_minor(500, 0),
            duration_minutes: 30,
            activities: strings(&[
                "Brisk 30-minute walk",
                "Water break",
                "Post-walk paw wipe-down",
                "A photo update sent to you",
                "Basic leash manners reinforcement",
            ]),
            notes: "Available within a 5-mile radius of our facility.".to_string(),
            image_url: String::new(),
        },
    ]
}

/// Shop products.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("prod_01", "Premium Dry Dog Food (5kg)", Money::from_major_minor(2200, 0))
            .with_category(ProductCategory::Food),
        Product::new("prod_02", "Grain-Free Cat Food (2kg)", Money::from_major_minor(1350, 0))
            .with_category(ProductCategory::Food),
        Product::new("prod_03", "Rope Tug Toy", Money::from_major_minor(450, 0))
            .with_category(ProductCategory::Toys),
        Product::new("prod_04", "Feather Wand Cat Teaser", Money::from_major_minor(299, 0))
            .with_category(ProductCategory::Toys),
        Product::new("prod_05", "Adjustable Nylon Harness", Money::from_major_minor(899, 0))
            .with_category(ProductCategory::Accessories),
        Product::new("prod_06", "Orthopedic Pet Bed", Money::from_major_minor(3499, 0))
            .with_category(ProductCategory::Accessories),
        Product::new("prod_07", "Oatmeal Pet Shampoo", Money::from_major_minor(549, 50))
            .with_category(ProductCategory::Grooming),
        Product::new("prod_08", "Flea & Tick Drops", Money::from_major_minor(1199, 0))
            .with_category(ProductCategory::Health),
    ]
}

/// Pre-existing bookings seeded at load so conflict detection has data:
/// `service_01`, morning slot, `offset_days` after `today`.
///
/// Empty when the offset date falls outside the calendar range.
pub fn seed_bookings(today: NaiveDate, offset_days: i64) -> Vec<Booking> {
    Duration::try_days(offset_days)
        .and_then(|offset| today.checked_add_signed(offset))
        .map(|date| Booking::new("service_01", date, TimeSlot::Morning))
        .into_iter()
        .collect()
}
