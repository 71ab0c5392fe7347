use tracing::trace;

use crate::error::Result;
use crate::geometry::Point2D;
use crate::text::{NumberFormat, NumericFormat};

use super::{read_number, Element, ReadXml, WriteXml};

impl WriteXml for Point2D {
    /// Writes `X` and `Y` as attributes.
    fn write_xml(&self, element: &mut Element) {
        let nf = NumberFormat::invariant();
        element.set_attribute("X", nf.format_number(self.x(), NumericFormat::RoundTrip));
        element.set_attribute("Y", nf.format_number(self.y(), NumericFormat::RoundTrip));
    }
}

impl ReadXml for Point2D {
    /// Reads `X` and `Y`, each from an attribute or else a child element.
    fn read_xml(element: &Element) -> Result<Self> {
        let x = read_number(element, "X")?;
        let y = read_number(element, "Y")?;
        trace!(element = element.name(), x, y, "read point");
        Ok(Point2D::new(x, y))
    }
}
