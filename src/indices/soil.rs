//! Soil and surface colour indices.

use crate::{arithmetic::safe_div, components::Column};

/// Coloration index.
pub fn ci(red: &Column, blue: &Column) -> Column {
    pixelwise!(|red, blue| red - (blue * red))
}

/// Redness index, normalized difference red/green.
pub fn ri(red: &Column, green: &Column) -> Column {
    pixelwise!(|red, green| safe_div(red - green, red + green))
}

/// Normalized difference salinity index.
pub fn ndsi(swir1: &Column, swir2: &Column) -> Column {
    pixelwise!(|swir1, swir2| safe_div(swir1 - swir2, swir1 + swir2))
}

/// Shape index.
pub fn if_index(red: &Column, green: &Column, blue: &Column) -> Column {
    pixelwise!(|red, green, blue| safe_div(2. * (red - green - blue), green - blue))
}

/// Soil background line.
pub fn sbl(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| nir - 2.4 * red)
}

/// Soil composition index.
pub fn sci(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| safe_div(swir1 - nir, swir1 + nir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn shape_index_with_equal_green_and_blue_is_zero() {
        let index = if_index(&array![0.9, 0.9], &array![0.2, 0.4], &array![0.2, 0.2]);
        assert_eq!(index[0], 0.);
        assert!((index[1] - 2. * (0.9 - 0.4 - 0.2) / 0.2).abs() < 1e-12);
    }

    #[test]
    fn soil_background_line() {
        let index = sbl(&array![1., 0.5], &array![3., 1.2]);
        assert!((index[0] - 0.6).abs() < 1e-12);
        assert!(index[1].abs() < 1e-12);
    }

    #[test]
    fn coloration_index() {
        assert_eq!(ci(&array![2., 0.], &array![0.5, 3.]), array![1., 0.]);
    }
}
