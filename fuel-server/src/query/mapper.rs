//! Conversion from FuelCheck station records to display records.

use chrono::NaiveDateTime;

use crate::domain::{
    NormalizedStation, PriceUnit, extract_location, format_price, format_tank_price,
    is_closing_soon, normalize_address, resolve_logo,
};
use crate::fuelcheck::{BrandItem, RawStation};

/// Map one upstream record.
///
/// `tank_litres` adds a full-tank price; `now` decides closing-soon.
pub fn map_station(
    raw: &RawStation,
    brands: &[BrandItem],
    now: NaiveDateTime,
    tank_litres: Option<f64>,
    price_unit: PriceUnit,
) -> NormalizedStation {
    let today = raw.todays_hours();
    let address = normalize_address(&raw.address);

    NormalizedStation {
        name: raw.name.clone(),
        brand: raw.brand.clone(),
        location: extract_location(&raw.name, &raw.brand, &address),
        address,
        price: format_price(raw.price, price_unit),
        raw_price: raw.price,
        distance: raw.distance,
        fuel_type: raw.fuel_type.clone(),
        is_open_now: today.is_some_and(|h| h.is_open_now),
        is_closing_soon: is_closing_soon(today, now),
        logo_url: resolve_logo(brands, &raw.brand),
        tank_price: tank_litres.map(|litres| format_tank_price(raw.price, litres, price_unit)),
    }
}
