//! Built-up indices.

use crate::{arithmetic::safe_div, components::Column};

/// Normalized difference built-up index.
pub fn ndbi(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| safe_div(swir1 - nir, swir1 + nir))
}

/// Built-up area, NDBI minus NDVI.
pub fn bu(red: &Column, nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|red, nir, swir1| safe_div(swir1 - nir, swir1 + nir) - safe_div(nir - red, nir + red))
}
