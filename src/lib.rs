pub mod error;
pub mod geometry;
pub mod math;
pub mod text;
pub mod xml;

pub use error::{PlanarError, Result};
pub use geometry::Point2D;
