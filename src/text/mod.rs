pub mod coordinate_list;
pub mod number_format;

pub use coordinate_list::parse_two;
pub use number_format::{NumberFormat, NumericFormat, MAX_PRECISION};
