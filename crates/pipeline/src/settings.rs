//! Filter and sort criteria, and the reducer that edits them.
//!
//! The settings UI never merges partial objects into the settings. It sends
//! a [`SettingsAction`] and [`FilterSortSettings::apply`] handles it.

use catalog::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 1000.0;

// =============================================================================
// Price range
// =============================================================================

/// Inclusive price bounds.
///
/// Bounds are stored exactly as edited. When `min > max` no price satisfies
/// [`PriceRange::contains`], so an inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }
}

// =============================================================================
// Proximity
// =============================================================================

/// Store proximity restriction.
///
/// Deserialized values go through [`Proximity::from_km`], so a stored
/// `{"within_km": 0}` reads back as `Unrestricted`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "StoredProximity")]
pub enum Proximity {
    #[default]
    Unrestricted,
    WithinKm(f64),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum StoredProximity {
    Unrestricted,
    WithinKm(f64),
}

impl From<StoredProximity> for Proximity {
    fn from(stored: StoredProximity) -> Self {
        match stored {
            StoredProximity::Unrestricted => Proximity::Unrestricted,
            StoredProximity::WithinKm(km) => Proximity::from_km(km),
        }
    }
}

impl Proximity {
    /// Convert a slider value in kilometres.
    ///
    /// The slider uses 0 to mean "any distance", so 0, negative and
    /// non-finite values all map to `Unrestricted`.
    pub fn from_km(km: f64) -> Self {
        if km.is_finite() && km > 0.0 {
            Proximity::WithinKm(km)
        } else {
            Proximity::Unrestricted
        }
    }

    /// The active radius, if any. A hand-built `WithinKm` with a radius that
    /// is not a positive finite number restricts nothing.
    pub fn radius_km(&self) -> Option<f64> {
        match *self {
            Proximity::WithinKm(km) if km.is_finite() && km > 0.0 => Some(km),
            _ => None,
        }
    }
}

// =============================================================================
// Sort key
// =============================================================================

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending price
    #[default]
    Price,
    /// Descending rating
    Rating,
    /// Ascending distance from the reference point
    Distance,
    /// Keep input order. Any unrecognised key deserializes to this.
    #[serde(other)]
    Input,
}

impl SortKey {
    /// Parse a sort key name, falling back to input order for unknown names.
    pub fn from_name(name: &str) -> SortKey {
        match name.trim().to_ascii_lowercase().as_str() {
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            "distance" => SortKey::Distance,
            "input" => SortKey::Input,
            other => {
                tracing::warn!("Unknown sort key '{}', keeping input order", other);
                SortKey::Input
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::Distance => "distance",
            SortKey::Input => "input",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Settings record and reducer
// =============================================================================

/// Everything the filter and sort stages read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSortSettings {
    pub price_range: PriceRange,
    /// Empty means every category passes
    pub categories: BTreeSet<Category>,
    pub store_proximity: Proximity,
    pub sort_by: SortKey,
}

/// One edit to the settings, as produced by a settings control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsAction {
    SetPriceRange { min: f64, max: f64 },
    SetMinPrice(f64),
    SetMaxPrice(f64),
    ToggleCategory(Category),
    ClearCategories,
    /// Radius in km, 0 meaning unrestricted
    SetProximity(f64),
    SetSort(SortKey),
    Reset,
}

impl FilterSortSettings {
    /// Apply one action. Returns `true` if anything changed.
    pub fn apply(&mut self, action: SettingsAction) -> bool {
        let before = self.clone();

        match action {
            SettingsAction::SetPriceRange { min, max } => {
                self.price_range = PriceRange::new(min, max);
            }
            SettingsAction::SetMinPrice(min) => self.price_range.min = min,
            SettingsAction::SetMaxPrice(max) => self.price_range.max = max,
            SettingsAction::ToggleCategory(category) => {
                if !self.categories.remove(&category) {
                    self.categories.insert(category);
                }
            }
            SettingsAction::ClearCategories => self.categories.clear(),
            SettingsAction::SetProximity(km) => self.store_proximity = Proximity::from_km(km),
            SettingsAction::SetSort(key) => self.sort_by = key,
            SettingsAction::Reset => *self = FilterSortSettings::default(),
        }

        if self.price_range.is_inverted() {
            tracing::debug!(
                "Price range inverted ({} > {}), no product will match",
                self.price_range.min,
                self.price_range.max
            );
        }

        *self != before
    }
}
