//! Core domain types for the furnishing catalog.
//!
//! Products are furniture offers from stores. They are supplied from outside
//! (a recommendation result or a preview set) and never mutated once loaded.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a product within a catalog
pub type ProductId = u32;

// =============================================================================
// Geography
// =============================================================================

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both components are finite and inside the valid ranges
    /// (`lat` in [-90, 90], `lon` in [-180, 180]).
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Room category a product is sold for.
///
/// Serialized with the labels shown in the planner UI ("Living Room", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Living Room")]
    LivingRoom,
    #[serde(rename = "Kitchen")]
    Kitchen,
    #[serde(rename = "Bedroom")]
    Bedroom,
    #[serde(rename = "Bathroom")]
    Bathroom,
    #[serde(rename = "Other Rooms")]
    OtherRooms,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::LivingRoom,
        Category::Kitchen,
        Category::Bedroom,
        Category::Bathroom,
        Category::OtherRooms,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Category::LivingRoom => "Living Room",
            Category::Kitchen => "Kitchen",
            Category::Bedroom => "Bedroom",
            Category::Bathroom => "Bathroom",
            Category::OtherRooms => "Other Rooms",
        }
    }

    /// Parse a category from its label or identifier.
    ///
    /// Matching ignores case, spaces, underscores and dashes, so
    /// "Living Room", "living_room" and "LivingRoom" all parse.
    pub fn from_label(s: &str) -> Option<Category> {
        let wanted = normalize_label(s);
        Category::ALL
            .into_iter()
            .find(|category| normalize_label(category.label()) == wanted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(*c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// Products
// =============================================================================

/// Store metadata attached to a product. Display-only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// A furniture offer.
///
/// Invariants (checked by [`Catalog::validate`]): `price >= 0`,
/// `rating` in [0, 5], `coordinates` valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub rating: f32,
    pub coordinates: LatLon,
    #[serde(default)]
    pub store: Store,
}

// =============================================================================
// Catalog - in-memory product collection
// =============================================================================

/// Holds every product in input order plus lookup indices.
///
/// Input order matters: the sort stage is stable, so ties are broken by the
/// order products were inserted here.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,
    /// Position of each product in `products`
    pub(crate) by_id: HashMap<ProductId, usize>,
    /// Product ids grouped by category, in input order
    pub(crate) category_index: BTreeMap<Category, Vec<ProductId>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All products in input order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&pos| &self.products[pos])
    }

    pub fn get_products_by_category(&self, category: Category) -> &[ProductId] {
        self.category_index
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
