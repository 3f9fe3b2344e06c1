//! Configuration of a tilepress run.
//!
//! - [`Credentials`]: service endpoint and secret, read from the environment (optionally seeded from `.env`)
//! - [`Config`]: static options, optionally loaded from a YAML file and overridden from the command line
//!   - [`SourceConfig`]: view queried for article rows
//!   - [`StorageConfig`]: bucket, object path and caching of the published archive
//!   - [`TilerConfig`]: tippecanoe executable

mod credentials;
mod main;
mod sections;

pub use credentials::*;
pub use main::Config;
pub use sections::*;
