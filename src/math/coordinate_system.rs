use crate::error::{ArgumentError, Result};

use super::{Angle, Matrix4, Point3, Vector3, TOLERANCE};

/// An affine frame of reference in 3D space.
///
/// Stored as a 4x4 homogeneous matrix whose columns are the frame's
/// X, Y and Z axes followed by its origin. Transforming a point maps
/// local coordinates in this frame into the parent frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    matrix: Matrix4,
}

impl CoordinateSystem {
    /// Returns the identity frame (world coordinates).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wraps an arbitrary homogeneous matrix.
    #[must_use]
    pub fn from_matrix(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Creates a frame from an origin and three axis vectors.
    ///
    /// Axes are used as given (not normalized), so non-unit axes scale.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ZeroAxis` if any axis is zero-length.
    pub fn from_axes(
        origin: Point3,
        x_axis: Vector3,
        y_axis: Vector3,
        z_axis: Vector3,
    ) -> Result<Self> {
        for (name, axis) in [("x", &x_axis), ("y", &y_axis), ("z", &z_axis)] {
            if axis.norm() < TOLERANCE {
                return Err(ArgumentError::ZeroAxis(name).into());
            }
        }

        #[rustfmt::skip]
        let matrix = Matrix4::new(
            x_axis.x, y_axis.x, z_axis.x, origin.x,
            x_axis.y, y_axis.y, z_axis.y, origin.y,
            x_axis.z, y_axis.z, z_axis.z, origin.z,
            0.0,      0.0,      0.0,      1.0,
        );
        Ok(Self { matrix })
    }

    /// Creates a pure translation.
    #[must_use]
    pub fn translation(offset: Vector3) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// Creates a rotation by `angle` around the axis through `axis_origin`
    /// along `axis_direction`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::ZeroAxis` if the axis direction is zero-length.
    pub fn rotation(axis_origin: Point3, axis_direction: Vector3, angle: Angle) -> Result<Self> {
        let len = axis_direction.norm();
        if len < TOLERANCE {
            return Err(ArgumentError::ZeroAxis("rotation").into());
        }
        let axis = axis_direction / len;

        // Translate to origin, rotate, translate back
        let t_neg = Matrix4::new_translation(&(-axis_origin.coords));
        let rot = rotation_matrix(&axis, angle.radians());
        let t_pos = Matrix4::new_translation(&axis_origin.coords);
        Ok(Self {
            matrix: t_pos * rot * t_neg,
        })
    }

    /// Returns the underlying homogeneous matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Returns the frame origin expressed in the parent frame.
    #[must_use]
    pub fn origin(&self) -> Point3 {
        Point3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    #[must_use]
    pub fn x_axis(&self) -> Vector3 {
        self.column(0)
    }

    #[must_use]
    pub fn y_axis(&self) -> Vector3 {
        self.column(1)
    }

    #[must_use]
    pub fn z_axis(&self) -> Vector3 {
        self.column(2)
    }

    /// Maps a point from this frame into the parent frame.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let v = self.matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Maps a direction vector (ignoring translation).
    #[must_use]
    pub fn transform_vector(&self, dir: &Vector3) -> Vector3 {
        let v = self.matrix * nalgebra::Vector4::new(dir.x, dir.y, dir.z, 0.0);
        Vector3::new(v.x, v.y, v.z)
    }

    /// Returns the frame that applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &CoordinateSystem) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Returns the inverse mapping, or `None` for a singular frame.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    fn column(&self, index: usize) -> Vector3 {
        Vector3::new(
            self.matrix[(0, index)],
            self.matrix[(1, index)],
            self.matrix[(2, index)],
        )
    }
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::identity()
    }
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[rustfmt::skip]
#[allow(clippy::many_single_char_names)]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}
