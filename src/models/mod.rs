use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

mod labels;

pub use labels::{Category, Condition, FuelType, ParseLabelError};

/// Where the bike can be picked up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.state, self.country)
    }
}

/// Reads the `"city, state, country"` form back. Missing parts stay empty,
/// anything past the second comma belongs to the country.
impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        let mut parts = raw.splitn(3, ',').map(|p| p.trim().to_string());
        Self {
            city: parts.next().unwrap_or_default(),
            state: parts.next().unwrap_or_default(),
            country: parts.next().unwrap_or_default(),
        }
    }
}

/// A bike offered for sale.
///
/// Fields are public and unchecked: any value of the declared type is
/// accepted. `updated_at` and `views` are never maintained implicitly, see
/// [`Listing::touch`] and [`Listing::record_view`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: Option<Decimal>,
    pub mileage: i32,
    /// Engine displacement in cc
    pub engine_capacity: i32,
    pub description: String,
    pub condition: Option<Condition>,
    pub color: String,
    pub fuel_type: Option<FuelType>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub features: Vec<String>,
    /// Image URLs, first one doubles as thumbnail
    pub images: Vec<String>,
    pub seller_id: String,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: i32,
}

impl Listing {
    /// Empty listing stamped with the current time
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            brand: String::new(),
            model: String::new(),
            year: 0,
            price: None,
            mileage: 0,
            engine_capacity: 0,
            description: String::new(),
            condition: None,
            color: String::new(),
            fuel_type: None,
            category: None,
            location: None,
            features: Vec::new(),
            images: Vec::new(),
            seller_id: String::new(),
            is_available: false,
            is_featured: false,
            created_at: now,
            updated_at: now,
            views: 0,
        }
    }

    pub fn add_feature(&mut self, feature: impl Into<String>) {
        self.features.push(feature.into());
    }

    pub fn add_image(&mut self, url: impl Into<String>) {
        self.images.push(url.into());
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Stamp `updated_at` with the current time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// One-line description for logs
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let price = self.price.map(|p| p.to_string());
        write!(
            f,
            "Listing{{id='{}', title='{}', brand='{}', model='{}', year={}, price={}, condition={}, category={}}}",
            self.id,
            self.title,
            self.brand,
            self.model,
            self.year,
            price.as_deref().unwrap_or("null"),
            self.condition.map_or("null", Condition::name),
            self.category.map_or("null", Category::name),
        )
    }
}
