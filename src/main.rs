use anyhow::Result;
use bike_listings::config::Config;
use bike_listings::export;
use bike_listings::sources::{JsonFileSource, ListingSource, SampleSource};
use bike_listings::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init()?;
    let config = Config::from_env()?;

    info!("🏍️ Bike Listings - JSON export");
    info!("==============================");

    let source: Box<dyn ListingSource> = match &config.input {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource),
    };

    info!(source = source.source_name(), "Loading listings...");
    let listings = source.load().await?;
    info!("✅ Loaded {} listings", listings.len());

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {}", i + 1, listing.summary());
        if let Some(location) = &listing.location {
            println!("   Location: {}", location);
        }
        if !listing.features.is_empty() {
            println!("   Features: {}", listing.features.join(", "));
        }
        if let Some(thumbnail) = listing.thumbnail() {
            println!("   Thumbnail: {}", thumbnail);
        }
        println!();
    }

    let report = export::write_listings(&listings, &config.export_options()).await?;
    if report.skipped > 0 {
        info!(skipped = report.skipped, "Some listings had no usable id");
    }

    Ok(())
}
