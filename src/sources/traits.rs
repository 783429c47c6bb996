use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Where listings come from before they are printed or exported.
///
/// `load` hands back the complete set in source order; there is no paging
/// or streaming. Failures should say which input broke (a path, a record)
/// through `anyhow::Context`, since callers surface them as-is.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Short human name, used in log fields
    fn source_name(&self) -> &'static str;
}
