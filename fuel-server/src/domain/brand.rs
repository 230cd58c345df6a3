//! Brand logo lookup.

use crate::fuelcheck::BrandItem;

/// Logo URL of the first active brand whose description equals `brand`.
///
/// Inactive and unknown brands resolve to `None`.
pub fn resolve_logo(brands: &[BrandItem], brand: &str) -> Option<String> {
    brands
        .iter()
        .find(|item| item.isactive && item.description == brand)
        .map(|item| item.logoimageurl.clone())
}
