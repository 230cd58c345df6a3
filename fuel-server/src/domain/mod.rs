//! Domain logic for fuel station queries.
//!
//! Pure functions and value types with no I/O: address cleanup, location
//! labels, trading-hours clock handling, brand logos, search areas and
//! price formatting. Anything that needs the current time takes it as a
//! parameter.

mod address;
mod bbox;
mod brand;
mod clock;
mod location;
mod price;
mod station;

pub use address::normalize_address;
pub use bbox::{BoundingBox, KM_PER_DEGREE, LocationMode, LocationModeError};
pub use brand::resolve_logo;
pub use clock::{ClockError, closing_soon_window, is_closing_soon, parse_clock};
pub use location::{
    combine_name_and_address, extract_location, extract_suburb, remove_brand_prefix,
    to_pascal_case,
};
pub use price::{PriceUnit, format_price, format_tank_price};
pub use station::NormalizedStation;
