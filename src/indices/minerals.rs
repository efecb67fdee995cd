//! Mineral indices: alteration, iron, gossan and laterite ratios.

use crate::{arithmetic::safe_div, components::Column};

/// Alteration, simple ratio SWIR1/SWIR2.
pub fn alteration(swir1: &Column, swir2: &Column) -> Column {
    pixelwise!(|swir1, swir2| safe_div(swir1, swir2))
}

/// Ferric iron, Fe2+.
pub fn fe2plus(green: &Column, nir: &Column, swir2: &Column) -> Column {
    pixelwise!(|green, nir, swir2| swir2 * nir + green)
}

/// Ferric iron, Fe3+.
pub fn ferric_oxides(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| nir * swir1)
}

pub fn ferrous_iron(swir2: &Column, nir: &Column, green: &Column) -> Column {
    pixelwise!(|swir2, nir, green| swir2 * nir + green)
}

pub fn ferrous_silicates(swir1: &Column, swir2: &Column) -> Column {
    pixelwise!(|swir1, swir2| swir1 * swir2)
}

pub fn gossan(red: &Column, swir1: &Column) -> Column {
    pixelwise!(|red, swir1| safe_div(swir1, red))
}

pub fn laterite(swir1: &Column, swir2: &Column) -> Column {
    pixelwise!(|swir1, swir2| safe_div(swir1, swir2))
}

/// Iron oxide, simple ratio red/blue.
pub fn io(red: &Column, blue: &Column) -> Column {
    pixelwise!(|red, blue| safe_div(red, blue))
}

/// Ferrous minerals, simple ratio SWIR1/NIR.
pub fn swir1_nir(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| safe_div(swir1, nir))
}

/// Simple ratio 1650/2218 (TM5/TM7).
pub fn tm5_tm7(swir1: &Column, swir2: &Column) -> Column {
    pixelwise!(|swir1, swir2| safe_div(swir1, swir2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn iron_products() {
        let green = array![1., 0.];
        let nir = array![2., 3.];
        let swir1 = array![4., 0.];
        let swir2 = array![5., 0.5];
        assert_eq!(fe2plus(&green, &nir, &swir2), array![11., 1.5]);
        assert_eq!(ferrous_iron(&swir2, &nir, &green), array![11., 1.5]);
        assert_eq!(ferric_oxides(&nir, &swir1), array![8., 0.]);
        assert_eq!(ferrous_silicates(&swir1, &swir2), array![20., 0.]);
    }

    #[test]
    fn ratios_guard_zero() {
        let swir1 = array![3., 0., 2.];
        let swir2 = array![0., 0., 4.];
        assert_eq!(alteration(&swir1, &swir2), array![0., 0., 0.5]);
        assert_eq!(laterite(&swir1, &swir2), array![0., 0., 0.5]);
        assert_eq!(tm5_tm7(&swir1, &swir2), array![0., 0., 0.5]);
        assert_eq!(gossan(&array![0., 1., 4.], &swir1), array![0., 0., 0.5]);
        assert_eq!(swir1_nir(&array![0., 1., 4.], &swir1), array![0., 0., 0.5]);
        assert_eq!(io(&swir1, &swir2), array![0., 0., 0.5]);
    }
}
