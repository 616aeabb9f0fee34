//! Chart aggregate: canvas geometry, hover interaction and tooltip placement.

pub mod config;
pub mod geometry;
pub mod interaction;
pub mod tooltip;
pub mod value_objects;

pub use config::*;
pub use geometry::*;
pub use interaction::*;
pub use tooltip::*;
pub use value_objects::*;
