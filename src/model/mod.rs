mod catalog;
mod location;

pub use catalog::{CatalogEntry, ResolvedEntry, ResolvedRoot, SubdirectoryRoot};
pub use location::{LargeDirectory, LocationRecord, LocationSize, Measurement};
