//! Random preview catalogs.
//!
//! Used when no catalog file is given, and by the `sample` command.

use anyhow::{Context, Result};
use catalog::{Category, LatLon, Product, Store};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STORES: [&str; 6] = [
    "Home Depot",
    "IKEA",
    "Wayfair Outlet",
    "Crate & Barrel",
    "West Elm",
    "Target",
];

fn item_names(category: Category) -> &'static [&'static str] {
    match category {
        Category::LivingRoom => &["Sofa", "Coffee table", "Armchair", "TV stand", "Floor lamp"],
        Category::Kitchen => &["Dining table", "Bar stool", "Pantry shelf", "Cookware set"],
        Category::Bedroom => &["Bed frame", "Mattress", "Wardrobe", "Nightstand", "Dresser"],
        Category::Bathroom => &["Vanity", "Mirror cabinet", "Towel rack", "Shower caddy"],
        Category::OtherRooms => &["Desk", "Office chair", "Bookshelf", "Shoe rack"],
    }
}

/// Generate `count` products with stores scattered around `center`.
///
/// Same seed, same catalog. Ids run from 1 to `count`, so `count` must fit
/// in a product id.
pub fn generate(count: usize, center: LatLon, seed: Option<u64>) -> Result<Vec<Product>> {
    let last_id = u32::try_from(count)
        .with_context(|| format!("Cannot generate {} products, ids are 32-bit", count))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let products = (1..=last_id)
        .map(|id| {
            let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
            let names = item_names(category);
            let item = names[rng.random_range(0..names.len())];
            let store = STORES[rng.random_range(0..STORES.len())];

            // Up to ~0.3 degrees away, clamped to valid coordinates
            let lat = (center.lat + rng.random_range(-0.3..0.3)).clamp(-90.0, 90.0);
            let lon = (center.lon + rng.random_range(-0.3..0.3)).clamp(-180.0, 180.0);

            Product {
                id,
                name: format!("{} #{}", item, id),
                category,
                price: (rng.random_range(15.0..1200.0_f64) * 100.0).round() / 100.0,
                rating: (rng.random_range(0.0..=5.0_f32) * 10.0).round() / 10.0,
                coordinates: LatLon::new(lat, lon),
                store: Store {
                    name: store.to_string(),
                    address: format!("{} Main St", rng.random_range(1..900)),
                },
            }
        })
        .collect();
    Ok(products)
}
