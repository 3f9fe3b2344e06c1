//! # tilepress
//!
//! Builds a PMTiles archive from the geotagged articles of a remote datastore and
//! publishes it to object storage, where map clients read it with range requests.
//!
//! A run goes through these steps:
//! 1. fetch the `url`, `title`, `location` and `marker` columns of every article row
//! 2. build a GeoJSON `FeatureCollection` (see [`core::FeatureCollection`])
//! 3. write it to `articles.geojson`
//! 4. compile it with tippecanoe into `articles.pmtiles`
//! 5. upload the archive
//!
//! Both local files are removed at the end of the run, whatever happened.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tilepress::{
//!     config::{Config, Credentials},
//!     pipeline::{PipelinePlan, run_pipeline},
//!     service::ServiceClient,
//!     tiler::Tippecanoe,
//! };
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let client = ServiceClient::new(Credentials::from_env(None)?)?;
//!     let tiler = Tippecanoe::new(config.tiler.binary());
//!     let plan = PipelinePlan::new(&config, Path::new("."));
//!
//!     let outcome = run_pipeline(&plan, &client, &tiler, &client).await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod pipeline;
pub mod service;
pub mod tiler;

pub use tilepress_core as core;
