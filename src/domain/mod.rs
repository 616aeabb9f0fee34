//! Domain layer: order book data, chart geometry and the shared ambient services.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod number_format;
pub mod order_book;
