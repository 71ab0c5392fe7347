mod element;
mod point2d;

pub use element::Element;

use tracing::debug;

use crate::error::{FormatError, Result};
use crate::text::NumberFormat;

/// Types that can write themselves into an XML element.
pub trait WriteXml {
    /// Writes this value's members into `element`.
    fn write_xml(&self, element: &mut Element);

    /// Writes this value into a fresh element named `name`.
    fn to_element(&self, name: &str) -> Element {
        let mut element = Element::new(name);
        self.write_xml(&mut element);
        element
    }
}

/// Types that can be read from an XML element.
pub trait ReadXml: Sized {
    /// Reads a value from `element`.
    ///
    /// # Errors
    ///
    /// Returns a `FormatError` if a required member is missing or malformed.
    fn read_xml(element: &Element) -> Result<Self>;

    /// Parses an XML document and reads a value from its root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the root element
    /// cannot be read.
    fn from_xml_str(xml: &str) -> Result<Self> {
        Self::read_xml(&Element::parse(xml)?)
    }
}

/// Reads a numeric member written either as an attribute or a child element.
pub(crate) fn read_number(element: &Element, member: &'static str) -> Result<f64> {
    let Some(raw) = element.member(member) else {
        debug!(element = element.name(), member, "missing member");
        return Err(FormatError::MissingMember {
            element: element.name().to_owned(),
            member,
        }
        .into());
    };
    NumberFormat::invariant().parse_number(raw).ok_or_else(|| {
        debug!(element = element.name(), member, value = raw, "member is not a number");
        FormatError::InvalidNumber {
            element: element.name().to_owned(),
            member,
            value: raw.to_owned(),
        }
        .into()
    })
}
