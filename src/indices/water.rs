//! Moisture and water indices.

use crate::{arithmetic::safe_div, components::Column};

/// Global vegetation moisture index.
pub fn gvmi(nir: &Column, swir2: &Column) -> Column {
    pixelwise!(|nir, swir2| safe_div(
        (nir + 0.1) - (swir2 + 0.02),
        (nir + 0.1) + (swir2 + 0.02)
    ))
}

/// Shortwave infrared water stress index, normalized difference 860/1640.
pub fn siwsi(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| safe_div(nir - swir1, nir + swir1))
}

/// Ratio drought index, simple ratio MIR/NIR.
pub fn rdi(nir: &Column, swir2: &Column) -> Column {
    pixelwise!(|nir, swir2| safe_div(swir2, nir))
}

/// Modified normalized difference water index.
pub fn mndwi(green: &Column, swir1: &Column) -> Column {
    pixelwise!(|green, swir1| safe_div(green - swir1, green + swir1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn gvmi_offsets_both_bands() {
        let index = gvmi(&array![0.3, -0.1], &array![0.18, -0.02]);
        assert!((index[0] - 0.2 / 0.6).abs() < 1e-12);
        assert_eq!(index[1], 0.);
    }

    #[test]
    fn open_water_is_positive() {
        let index = mndwi(&array![0.3, 0.], &array![0.1, 0.]);
        assert!((index[0] - 0.5).abs() < 1e-12);
        assert_eq!(index[1], 0.);
    }
}
