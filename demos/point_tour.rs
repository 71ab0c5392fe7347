//! Walks through the `Point2D` API and logs each result.
//!
//! Usage:
//! ```text
//! cargo run --example point_tour
//! RUST_LOG=planar=debug cargo run --example point_tour   # show rejected input
//! ```

use planar::math::{Angle, CoordinateSystem, Point3, Vector2, Vector3};
use planar::text::{NumberFormat, NumericFormat};
use planar::xml::{ReadXml, WriteXml};
use planar::{Point2D, Result};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planar and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("point_tour=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Point2D::new(3.0, 4.0);
    let b = Point2D::from_polar(2.0, Angle::from_degrees(45.0));
    info!(%a, %b, distance = a.distance_to(&b), "two points");
    let moved = a + Vector2::new(1.0, -1.0);
    let lifted = a + Vector3::new(0.0, 0.0, 2.0);
    info!(%moved, ?lifted, "translate");

    let c = Point2D::centroid(&[a, b, Point2D::origin()])?;
    info!(centroid = %c, midpoint = %Point2D::midpoint(a, b), "averages");

    let german = NumberFormat::with_decimal_separator(',');
    let text = c.to_formatted_string(NumericFormat::Fixed(3), german);
    let parsed = Point2D::parse_with(&text, german)?;
    info!(text = text.as_str(), %parsed, "comma decimal separator");

    let xml = a.to_element("Point2D").to_xml_string()?;
    let read_back = Point2D::from_xml_str(&xml)?;
    info!(xml = xml.as_str(), %read_back, "xml");

    let cs = CoordinateSystem::rotation(
        Point3::origin(),
        Vector3::new(0.0, 0.0, 1.0),
        Angle::from_degrees(90.0),
    )?;
    info!(rotated = ?a.transform_by(&cs), "coordinate system");

    if let Err(err) = Point2D::parse("(1, 2, 3)") {
        warn!(%err, "expected rejection");
    }
    Ok(())
}
