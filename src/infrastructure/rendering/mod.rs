pub mod canvas_surface;
pub mod recording_surface;
pub mod surface;

pub use canvas_surface::CanvasSurface;
pub use recording_surface::{DrawOp, RecordingSurface};
pub use surface::{DrawSurface, StrokeStyle};
