pub mod json_file;
pub mod samples;
pub mod traits;

pub use json_file::JsonFileSource;
pub use samples::SampleSource;
pub use traits::ListingSource;
