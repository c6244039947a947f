pub mod app;
pub mod basemap;
pub mod control;
pub mod layerdoc;
pub mod viewport;

pub use app::*;
pub use basemap::*;
pub use control::*;
pub use layerdoc::*;
pub use viewport::*;
