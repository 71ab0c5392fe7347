pub mod angle;
pub mod coordinate_system;

pub use angle::Angle;
pub use coordinate_system::CoordinateSystem;

/// 2D displacement type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D displacement type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2x2 linear map.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Dynamically sized column vector.
pub type DVector = nalgebra::DVector<f64>;

/// Dynamically sized matrix.
pub type DMatrix = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
