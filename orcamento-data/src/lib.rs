pub mod loader;

pub use loader::{
    CatalogLoader, CatalogLoaderError, ChargeCatalogRecord, SimplesBracketRecord,
    SimplesTableLoader,
};
