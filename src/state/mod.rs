mod persistence;
mod sample;
mod store;

pub use persistence::{load_catalog, load_catalog_or_sample, load_session, save_session};
pub use sample::sample_drinks;
pub use store::{CatalogOrigin, CatalogStore, NameMatch};
