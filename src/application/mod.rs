pub mod renderer;
pub mod session;

pub use renderer::DepthChartRenderer;
pub use session::DepthChartSession;
