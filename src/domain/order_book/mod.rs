//! Order book aggregate: sides, levels and ratio precomputation.

pub mod entities;
pub mod sample;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::compute_ratios;
pub use value_objects::*;
