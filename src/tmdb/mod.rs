pub mod client;

pub use client::{MovieCatalog, TmdbClient, TmdbError};
