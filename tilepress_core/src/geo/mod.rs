mod collection;
mod feature;
mod geometry;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
