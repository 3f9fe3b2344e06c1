//! Data model of the tilepress pipeline.
//!
//! - [`ArticleRecord`]: one row as returned by the datastore.
//! - [`Feature`] / [`FeatureCollection`]: the GeoJSON interchange format handed to the tiler.
//! - [`ScratchFiles`]: guard that removes the transient files of a run when dropped.

mod article;
mod geo;
mod scratch;

pub use article::ArticleRecord;
pub use geo::*;
pub use scratch::ScratchFiles;
