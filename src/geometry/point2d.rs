use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{ArgumentError, PlanarError, Result};
use crate::math::{
    Angle, CoordinateSystem, DMatrix, DVector, Matrix2, Point3, Vector2, Vector3, TOLERANCE,
};
use crate::text::{parse_two, NumberFormat, NumericFormat};

/// Multiplier applied to the x hash so that `(a, b)` and `(b, a)` differ.
const HASH_MULTIPLIER: u64 = 397;

/// An immutable location in the 2D Cartesian plane.
///
/// Equality (`==`) and hashing are exact: no epsilon is applied. Use
/// [`Point2D::equals_within`] or [`Point2D::approx_eq`] to compare under a
/// tolerance.
///
/// `Point2D` is `PartialEq` but not `Eq`: a point with a NaN coordinate is not
/// equal to itself under IEEE 754 comparison, so it cannot serve as a
/// `HashMap`/`HashSet` key. Key maps by `<[f64; 2]>::from(p).map(f64::to_bits)`
/// when that is needed. `Hash` is still consistent with `==` for all
/// non-NaN points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// Creates a point from its coordinates.
    ///
    /// No validation is done; NaN and infinities propagate through arithmetic.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a point from polar coordinates around the origin.
    #[must_use]
    pub fn from_polar(radius: f64, angle: Angle) -> Self {
        let theta = angle.radians();
        Self::new(radius * theta.cos(), radius * theta.sin())
    }

    /// Creates a point from a `[x, y]` slice.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::LengthMismatch` unless the slice has exactly two
    /// elements.
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(ArgumentError::LengthMismatch {
                expected: 2,
                actual: coords.len(),
            }
            .into()),
        }
    }

    /// Creates a point from a dense vector of length 2.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::LengthMismatch` for any other length.
    pub fn from_dvector(vector: &DVector) -> Result<Self> {
        Self::from_slice(vector.as_slice())
    }

    /// Parses `"(x, y)"` or `"x,y"` using the invariant number format.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text is not a two-number coordinate list.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, NumberFormat::invariant())
    }

    /// Parses a coordinate list written under `format`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text is not a two-number coordinate list.
    pub fn parse_with(text: &str, format: NumberFormat) -> Result<Self> {
        let (x, y) = parse_two(text, format)?;
        Ok(Self::new(x, y))
    }

    /// Returns the arithmetic mean of a set of points.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::EmptyPointSet` if `points` is empty.
    pub fn centroid(points: &[Point2D]) -> Result<Self> {
        if points.is_empty() {
            return Err(ArgumentError::EmptyPointSet.into());
        }
        Ok(Self::mean(points))
    }

    /// Returns the point halfway between `a` and `b`.
    ///
    /// Identical to `centroid(&[a, b])`.
    #[must_use]
    pub fn midpoint(a: Point2D, b: Point2D) -> Self {
        Self::mean(&[a, b])
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(points: &[Point2D]) -> Self {
        let inv_n = 1.0 / points.len() as f64;
        Self::new(
            points.iter().map(|p| p.x).sum::<f64>() * inv_n,
            points.iter().map(|p| p.y).sum::<f64>() * inv_n,
        )
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Translates the point by a 2D displacement.
    #[must_use]
    pub fn add_vector2d(&self, v: &Vector2) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// Translates the point by the inverse of a 2D displacement.
    #[must_use]
    pub fn sub_vector2d(&self, v: &Vector2) -> Self {
        Self::new(self.x - v.x, self.y - v.y)
    }

    /// Lifts the point to z = 0 and translates it by a 3D displacement.
    #[must_use]
    pub fn add_vector3d(&self, v: &Vector3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, v.z)
    }

    /// Lifts the point to z = 0 and translates it by the inverse of a 3D
    /// displacement. The resulting z is the negated displacement z.
    #[must_use]
    pub fn sub_vector3d(&self, v: &Vector3) -> Point3 {
        Point3::new(self.x - v.x, self.y - v.y, -v.z)
    }

    /// Returns the displacement from `self` to `other`.
    #[must_use]
    pub fn vector_to(&self, other: &Point2D) -> Vector2 {
        *other - *self
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        self.vector_to(other).norm()
    }

    /// Reinterprets the point as a displacement from the origin.
    #[must_use]
    pub fn to_vector2d(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Lifts the point into 3D with z = 0.
    #[must_use]
    pub fn to_point3d(&self) -> Point3 {
        Point3::new(self.x, self.y, 0.0)
    }

    /// Returns the coordinates as a dense vector of length 2.
    #[must_use]
    pub fn to_dvector(&self) -> DVector {
        DVector::from_column_slice(&[self.x, self.y])
    }

    /// Applies a fixed-size linear map.
    #[must_use]
    pub fn transform_by_linear(&self, matrix: &Matrix2) -> Self {
        let v = matrix * self.to_vector2d();
        Self::new(v.x, v.y)
    }

    /// Applies a linear map given as a dense matrix.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::NonConformantMatrix` if the matrix does not have
    /// two columns, and `ArgumentError::LengthMismatch` if the product does not
    /// have two rows.
    pub fn transform_by_matrix(&self, matrix: &DMatrix) -> Result<Self> {
        if matrix.ncols() != 2 {
            return Err(ArgumentError::NonConformantMatrix {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            }
            .into());
        }
        Self::from_dvector(&(matrix * self.to_dvector()))
    }

    /// Lifts the point to z = 0 and maps it through a coordinate system.
    #[must_use]
    pub fn transform_by(&self, cs: &CoordinateSystem) -> Point3 {
        cs.transform_point(&self.to_point3d())
    }

    /// Compares coordinates under an absolute tolerance.
    ///
    /// Each coordinate difference must be strictly less than `tolerance`, so a
    /// zero tolerance never reports equality.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::NegativeTolerance` if `tolerance < 0`.
    pub fn equals_within(&self, other: &Point2D, tolerance: f64) -> Result<bool> {
        if tolerance < 0.0 {
            return Err(ArgumentError::NegativeTolerance(tolerance).into());
        }
        Ok((self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance)
    }

    /// Compares coordinates under the crate-wide [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq(&self, other: &Point2D) -> bool {
        (self.x - other.x).abs() < TOLERANCE && (self.y - other.y).abs() < TOLERANCE
    }

    /// Renders the point as `"(X<sep> Y)"`.
    ///
    /// `<sep>` is `;` when `number_format` uses `,` as its decimal separator,
    /// otherwise `,`.
    #[must_use]
    pub fn to_formatted_string(
        &self,
        format: NumericFormat,
        number_format: NumberFormat,
    ) -> String {
        format!(
            "({}{} {})",
            number_format.format_number(self.x, format),
            number_format.list_separator(),
            number_format.format_number(self.y, format),
        )
    }
}

/// Maps a coordinate to hash bits; `0.0` and `-0.0` compare equal so they must
/// hash equal.
fn coordinate_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined =
            coordinate_bits(self.x).wrapping_mul(HASH_MULTIPLIER) ^ coordinate_bits(self.y);
        state.write_u64(combined);
    }
}

impl Add<Vector2> for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Vector2) -> Point2D {
        self.add_vector2d(&rhs)
    }
}

impl Add<Vector3> for Point2D {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        self.add_vector3d(&rhs)
    }
}

impl Sub<Vector2> for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Vector2) -> Point2D {
        self.sub_vector2d(&rhs)
    }
}

impl Sub<Vector3> for Point2D {
    type Output = Point3;

    fn sub(self, rhs: Vector3) -> Point3 {
        self.sub_vector3d(&rhs)
    }
}

impl Sub for Point2D {
    type Output = Vector2;

    /// Displacement from `rhs` to `self`.
    fn sub(self, rhs: Point2D) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point2D {
    /// Invariant formatting; `{:.N}` switches to fixed-point with N digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = f
            .precision()
            .map_or(NumericFormat::RoundTrip, NumericFormat::Fixed);
        f.write_str(&self.to_formatted_string(format, NumberFormat::invariant()))
    }
}

impl FromStr for Point2D {
    type Err = PlanarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

impl From<nalgebra::Point2<f64>> for Point2D {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D> for nalgebra::Point2<f64> {
    fn from(p: Point2D) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn pt(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    fn hash_of(p: &Point2D) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    // ── construction ──

    #[test]
    fn new_keeps_coordinates() {
        let p = pt(-1.25, 3.5e10);
        assert_eq!(p.x(), -1.25);
        assert_eq!(p.y(), 3.5e10);
    }

    #[test]
    fn new_accepts_non_finite() {
        let p = pt(f64::NAN, f64::INFINITY);
        assert!(p.x().is_nan());
        assert!(p.y().is_infinite());
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point2D::origin(), pt(0.0, 0.0));
        assert_eq!(Point2D::default(), Point2D::origin());
    }

    #[test]
    fn from_polar_quarter_turn() {
        let p = Point2D::from_polar(2.0, Angle::from_radians(FRAC_PI_2));
        assert_abs_diff_eq!(p.x(), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(p.y(), 2.0, epsilon = TOL);
    }

    #[test]
    fn from_polar_distance_is_radius() {
        for deg in [0.0, 17.0, 135.0, 222.5, 359.0] {
            let p = Point2D::from_polar(4.5, Angle::from_degrees(deg));
            assert_abs_diff_eq!(p.distance_to(&Point2D::origin()), 4.5, epsilon = TOL);
        }
    }

    #[test]
    fn from_slice_requires_two() {
        assert_eq!(Point2D::from_slice(&[1.0, 2.0]).unwrap(), pt(1.0, 2.0));
        assert!(matches!(
            Point2D::from_slice(&[1.0, 2.0, 3.0]),
            Err(PlanarError::InvalidArgument(ArgumentError::LengthMismatch {
                expected: 2,
                actual: 3
            }))
        ));
        assert!(Point2D::from_slice(&[]).is_err());
    }

    #[test]
    fn dvector_bridge() {
        let v = DVector::from_vec(vec![5.0, -6.0]);
        let p = Point2D::from_dvector(&v).unwrap();
        assert_eq!(p, pt(5.0, -6.0));
        assert_eq!(p.to_dvector(), v);
        assert!(Point2D::from_dvector(&DVector::from_vec(vec![1.0])).is_err());
    }

    #[test]
    fn centroid_of_triangle() {
        let c = Point2D::centroid(&[pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 3.0)]).unwrap();
        assert_eq!(c, pt(1.0, 1.0));
    }

    #[test]
    fn centroid_of_single_point_is_point() {
        let p = pt(7.25, -3.5);
        assert_eq!(Point2D::centroid(&[p]).unwrap(), p);
    }

    #[test]
    fn centroid_of_pair_is_midpoint() {
        let (a, b) = (pt(0.1, 0.7), pt(-3.3, 9.9));
        assert_eq!(Point2D::centroid(&[a, b]).unwrap(), Point2D::midpoint(a, b));
    }

    #[test]
    fn centroid_of_empty_set_fails() {
        assert!(matches!(
            Point2D::centroid(&[]),
            Err(PlanarError::InvalidArgument(ArgumentError::EmptyPointSet))
        ));
    }

    // ── arithmetic ──

    #[test]
    fn add_and_sub_vector2() {
        assert_eq!(pt(1.0, 2.0) + Vector2::new(3.0, -1.0), pt(4.0, 1.0));
        assert_eq!(pt(1.0, 2.0) - Vector2::new(1.0, 1.0), pt(0.0, 1.0));
    }

    #[test]
    fn add_vector3_lifts_with_displacement_z() {
        let q = pt(1.0, 2.0) + Vector3::new(1.0, 1.0, 5.0);
        assert_eq!(q, Point3::new(2.0, 3.0, 5.0));
    }

    #[test]
    fn sub_vector3_negates_displacement_z() {
        let q = pt(1.0, 2.0) - Vector3::new(1.0, 1.0, 5.0);
        assert_eq!(q, Point3::new(0.0, 1.0, -5.0));
    }

    #[test]
    fn point_difference_is_displacement() {
        let (a, b) = (pt(5.0, 1.0), pt(2.0, 3.0));
        assert_eq!(a - b, Vector2::new(3.0, -2.0));
        assert_eq!(b + (a - b), a);
        assert_eq!(b.vector_to(&a), a - b);
    }

    #[test]
    fn distance_three_four_five() {
        assert_eq!(pt(3.0, 4.0).distance_to(&pt(0.0, 0.0)), 5.0);
    }

    #[test]
    fn conversions_to_other_types() {
        let p = pt(1.5, -2.0);
        assert_eq!(p.to_vector2d(), Vector2::new(1.5, -2.0));
        assert_eq!(p.to_point3d(), Point3::new(1.5, -2.0, 0.0));
        assert_eq!(<[f64; 2]>::from(p), [1.5, -2.0]);
        assert_eq!(Point2D::from((1.5, -2.0)), p);
        assert_eq!(Point2D::from([1.5, -2.0]), p);
        let na: nalgebra::Point2<f64> = p.into();
        assert_eq!(Point2D::from(na), p);
    }

    #[test]
    fn transform_by_dense_matrix() {
        // Quarter turn.
        let m = DMatrix::from_row_slice(2, 2, &[0.0, -1.0, 1.0, 0.0]);
        assert_eq!(pt(1.0, 2.0).transform_by_matrix(&m).unwrap(), pt(-2.0, 1.0));
    }

    #[test]
    fn transform_by_non_conformant_matrix_fails() {
        let m = DMatrix::identity(3, 3);
        assert!(matches!(
            pt(1.0, 2.0).transform_by_matrix(&m),
            Err(PlanarError::InvalidArgument(ArgumentError::NonConformantMatrix {
                rows: 3,
                cols: 3
            }))
        ));
        // Conformant input but a 3-row product.
        let tall = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(matches!(
            pt(1.0, 2.0).transform_by_matrix(&tall),
            Err(PlanarError::InvalidArgument(ArgumentError::LengthMismatch { actual: 3, .. }))
        ));
    }

    #[test]
    fn transform_by_linear_scales() {
        let m = Matrix2::new(2.0, 0.0, 0.0, 3.0);
        assert_eq!(pt(1.0, 1.0).transform_by_linear(&m), pt(2.0, 3.0));
    }

    #[test]
    fn transform_by_coordinate_system() {
        let cs = CoordinateSystem::translation(Vector3::new(1.0, 1.0, 4.0));
        let q = pt(2.0, 3.0).transform_by(&cs);
        assert_abs_diff_eq!(q.x, 3.0, epsilon = TOL);
        assert_abs_diff_eq!(q.y, 4.0, epsilon = TOL);
        assert_abs_diff_eq!(q.z, 4.0, epsilon = TOL);
    }

    // ── equality ──

    #[test]
    fn exact_equality_has_no_epsilon() {
        assert_eq!(pt(0.1 + 0.2, 1.0), pt(0.1 + 0.2, 1.0));
        assert_ne!(pt(0.1 + 0.2, 1.0), pt(0.3, 1.0));
    }

    #[test]
    fn tolerant_equality_is_strict() {
        let a = pt(1.0, 1.0);
        assert!(a.equals_within(&pt(1.4, 0.6), 0.5).unwrap());
        assert!(!a.equals_within(&pt(1.5, 1.0), 0.5).unwrap());
        assert!(!a.equals_within(&pt(1.0, 2.0), 0.5).unwrap());
    }

    #[test]
    fn zero_tolerance_never_matches() {
        let a = pt(1.0, 1.0);
        assert!(!a.equals_within(&a, 0.0).unwrap());
    }

    #[test]
    fn negative_tolerance_fails() {
        assert!(matches!(
            pt(0.0, 0.0).equals_within(&pt(0.0, 0.0), -1e-3),
            Err(PlanarError::InvalidArgument(ArgumentError::NegativeTolerance(_)))
        ));
    }

    #[test]
    fn approx_eq_uses_crate_tolerance() {
        assert!(pt(1.0, 1.0).approx_eq(&pt(1.0 + 1e-12, 1.0 - 1e-12)));
        assert!(!pt(1.0, 1.0).approx_eq(&pt(1.0 + 1e-6, 1.0)));
    }

    // ── hashing ──

    #[test]
    fn equal_points_hash_equal() {
        assert_eq!(hash_of(&pt(1.5, -2.0)), hash_of(&pt(1.5, -2.0)));
        assert_eq!(pt(0.0, -0.0), pt(-0.0, 0.0));
        assert_eq!(hash_of(&pt(0.0, -0.0)), hash_of(&pt(-0.0, 0.0)));
    }

    #[test]
    fn swapped_coordinates_hash_differently() {
        assert_ne!(hash_of(&pt(1.0, 2.0)), hash_of(&pt(2.0, 1.0)));
    }

    #[test]
    fn nan_point_is_not_equal_to_itself() {
        let p = pt(f64::NAN, 1.0);
        assert_ne!(p, p);
        assert!(!p.equals_within(&p, 1.0).unwrap());
    }

    #[test]
    fn bit_keys_make_points_usable_in_hash_set() {
        let key = |p: Point2D| <[f64; 2]>::from(p).map(f64::to_bits);
        let points = [pt(1.0, 2.0), pt(1.0, 2.0), pt(f64::NAN, 0.0), pt(f64::NAN, 0.0)];
        let set: HashSet<[u64; 2]> = points
            .into_iter()
            .map(key)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicate_points_collapse_by_hash() {
        let set: HashSet<u64> = [pt(1.0, 2.0), pt(1.0, 2.0), pt(3.0, 4.0)]
            .iter()
            .map(hash_of)
            .collect();
        assert_eq!(set.len(), 2);
    }

    // ── text ──

    #[test]
    fn display_is_invariant() {
        assert_eq!(pt(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(format!("{:.2}", pt(1.0, 2.0 / 3.0)), "(1.00, 0.67)");
    }

    #[test]
    fn comma_decimal_switches_list_separator() {
        let nf = NumberFormat::with_decimal_separator(',');
        assert_eq!(
            pt(1.5, -2.25).to_formatted_string(NumericFormat::RoundTrip, nf),
            "(1,5; -2,25)"
        );
        assert_eq!(
            pt(1.5, 2.0).to_formatted_string(NumericFormat::Fixed(1), nf),
            "(1,5; 2,0)"
        );
    }

    #[test]
    fn huge_precision_does_not_panic() {
        let format: NumericFormat = "F99".parse().unwrap();
        let text = pt(1.0, 2.0).to_formatted_string(format, NumberFormat::invariant());
        assert!(text.starts_with("(1.000"));
        assert!("F70000".parse::<NumericFormat>().is_err());

        let clamped = pt(1.0, 2.0)
            .to_formatted_string(NumericFormat::Fixed(70_000), NumberFormat::invariant());
        assert_eq!(clamped, text);
    }

    #[test]
    fn parse_both_forms() {
        assert_eq!(Point2D::parse("(3, 4)").unwrap(), pt(3.0, 4.0));
        assert_eq!(Point2D::parse("3,4").unwrap(), pt(3.0, 4.0));
        assert_eq!("(-1.5, 2e3)".parse::<Point2D>().unwrap(), pt(-1.5, 2000.0));
    }

    #[test]
    fn parse_rejects_bad_grammar() {
        assert!(matches!(Point2D::parse("3;4"), Err(PlanarError::Parse(_))));
        assert!(matches!(Point2D::parse("(a, b)"), Err(PlanarError::Parse(_))));
    }

    #[test]
    fn parse_round_trips_formatted_text() {
        let p = pt(12.345_678_9, -0.001);
        let text = p.to_formatted_string(NumericFormat::Fixed(4), NumberFormat::invariant());
        let q = Point2D::parse(&text).unwrap();
        assert!(q.equals_within(&p, 1e-4).unwrap());

        let nf = NumberFormat::with_decimal_separator(',');
        let text = p.to_formatted_string(NumericFormat::RoundTrip, nf);
        assert_eq!(Point2D::parse_with(&text, nf).unwrap(), p);
    }
}
