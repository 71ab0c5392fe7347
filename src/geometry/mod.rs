pub mod point2d;

pub use point2d::Point2D;
