use crate::models::{Category, Condition, FuelType, Listing, Location};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

/// Built-in catalogue used when no input file is configured
pub struct SampleSource;

#[async_trait]
impl ListingSource for SampleSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("📋 Using built-in sample listings");
        Ok(sample_listings())
    }

    fn source_name(&self) -> &'static str {
        "Samples"
    }
}

struct Sample {
    id: &'static str,
    title: &'static str,
    brand: &'static str,
    model: &'static str,
    year: i32,
    price_cents: i64,
    mileage: i32,
    engine_capacity: i32,
    condition: Condition,
    color: &'static str,
    fuel_type: FuelType,
    category: Category,
    location: (&'static str, &'static str, &'static str),
    features: &'static [&'static str],
    images: &'static [&'static str],
    featured: bool,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "sample_mt07",
        title: "Yamaha MT-07, single owner",
        brand: "Yamaha",
        model: "MT-07",
        year: 2022,
        price_cents: 750_000,
        mileage: 8_400,
        engine_capacity: 689,
        condition: Condition::Excellent,
        color: "Icon Blue",
        fuel_type: FuelType::Petrol,
        category: Category::Sport,
        location: ("Pune", "Maharashtra", "India"),
        features: &["ABS", "LED lighting", "Slipper clutch"],
        images: &["/uploads/bikes/mt07-1.jpg", "/uploads/bikes/mt07-2.jpg"],
        featured: true,
    },
    Sample {
        id: "sample_bonneville",
        title: "Triumph Bonneville T120 Black",
        brand: "Triumph",
        model: "Bonneville T120",
        year: 2019,
        price_cents: 980_000,
        mileage: 21_500,
        engine_capacity: 1200,
        condition: Condition::Good,
        color: "Jet Black",
        fuel_type: FuelType::Petrol,
        category: Category::Vintage,
        location: ("Bengaluru", "Karnataka", "India"),
        features: &["Heated grips", "Cruise control"],
        images: &["/uploads/bikes/t120-1.jpg"],
        featured: false,
    },
    Sample {
        id: "sample_crf300l",
        title: "Honda CRF300L trail ready",
        brand: "Honda",
        model: "CRF300L",
        year: 2021,
        price_cents: 520_000,
        mileage: 12_000,
        engine_capacity: 286,
        condition: Condition::Fair,
        color: "Extreme Red",
        fuel_type: FuelType::Petrol,
        category: Category::OffRoad,
        location: ("Denver", "Colorado", "USA"),
        features: &["Hand guards", "Skid plate"],
        images: &[],
        featured: false,
    },
    Sample {
        id: "sample_zero_sr",
        title: "Zero SR/F Premium",
        brand: "Zero",
        model: "SR/F",
        year: 2023,
        price_cents: 1_890_000,
        mileage: 3_100,
        engine_capacity: 0,
        condition: Condition::New,
        color: "Boardwalk Red",
        fuel_type: FuelType::Electric,
        category: Category::Electric,
        location: ("Oslo", "Oslo", "Norway"),
        features: &["Fast charging", "Traction control", "Heated grips"],
        images: &["/uploads/bikes/srf-1.jpg", "/uploads/bikes/srf-2.jpg", "/uploads/bikes/srf-3.jpg"],
        featured: true,
    },
];

/// Fresh copies of the sample catalogue, stamped with the current time
pub fn sample_listings() -> Vec<Listing> {
    SAMPLES.iter().map(Sample::to_listing).collect()
}

impl Sample {
    fn to_listing(&self) -> Listing {
        let (city, state, country) = self.location;
        let mut listing = Listing::new();
        listing.id = self.id.to_string();
        listing.title = self.title.to_string();
        listing.brand = self.brand.to_string();
        listing.model = self.model.to_string();
        listing.year = self.year;
        listing.price = Some(Decimal::new(self.price_cents, 2));
        listing.mileage = self.mileage;
        listing.engine_capacity = self.engine_capacity;
        listing.description = format!("{} {} ({}) in {} condition.", self.brand, self.model, self.year, self.condition);
        listing.condition = Some(self.condition);
        listing.color = self.color.to_string();
        listing.fuel_type = Some(self.fuel_type);
        listing.category = Some(self.category);
        listing.location = Some(Location::new(city, state, country));
        for feature in self.features {
            listing.add_feature(*feature);
        }
        for image in self.images {
            listing.add_image(*image);
        }
        listing.seller_id = "sample_seller".to_string();
        listing.is_available = true;
        listing.is_featured = self.featured;
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn sample_source_returns_catalogue() {
        let listings = SampleSource.load().await.unwrap();
        assert_eq!(listings.len(), SAMPLES.len());
        assert_eq!(SampleSource.source_name(), "Samples");
    }

    #[test]
    fn sample_ids_are_unique() {
        let ids: HashSet<_> = sample_listings().into_iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), SAMPLES.len());
    }

    #[test]
    fn samples_keep_feature_and_image_order() {
        let listings = sample_listings();
        let zero = listings.iter().find(|l| l.id == "sample_zero_sr").unwrap();
        assert_eq!(zero.features, vec!["Fast charging", "Traction control", "Heated grips"]);
        assert_eq!(zero.thumbnail(), Some("/uploads/bikes/srf-1.jpg"));
        assert_eq!(zero.price.map(|p| p.to_string()).as_deref(), Some("18900.00"));
    }
}
