//! Vegetation indices: NDVI family, SAVI family, EVI family, simple ratios
//! and the tasselled cap transform.

use crate::{
    arithmetic::{normalized_difference, safe_div},
    components::Column,
};

/// Adjusted transformed soil-adjusted VI.
pub fn atsavi(nir: &Column, red: &Column) -> Column {
    pixelwise!(|nir, red| 1.22 * nir - 1.22 * red - 0.03 * 1.22 * nir + red - 1.22 * 0.03
        + 0.08 * (1. + 1.222))
}

/// Aerosol free vegetation index 1600.
pub fn afri1600(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| if swir1 == 0. {
        0.
    } else {
        ((nir - 0.66) / swir1) * ((nir + 0.66) / swir1)
    })
}

/// Ashburn vegetation index.
pub fn avi(nir: &Column, red: &Column) -> Column {
    pixelwise!(|nir, red| safe_div(2., nir - red))
}

/// Atmospherically resistant vegetation index 2.
pub fn arvi2(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div(-0.18 + 1.17, nir - (red * nir) + red))
}

/// Blue-wide dynamic range vegetation index.
pub fn bwdrvi(blue: &Column, nir: &Column) -> Column {
    pixelwise!(|blue, nir| 0.1 * nir - blue * 0.1 * nir + blue)
}

/// Chlorophyll index green.
pub fn ci_green(nir: &Column, green: &Column) -> Column {
    pixelwise!(|nir, green| nir * green - 1.)
}

/// Chlorophyll vegetation index.
pub fn cvi(nir: &Column, green: &Column, red: &Column) -> Column {
    pixelwise!(|nir, green, red| safe_div(nir, red * green))
}

/// Corrected transformed vegetation index, computed from an NDVI column.
pub fn ctvi(ndvi: &Column) -> Column {
    ndvi.mapv(|ndvi| (ndvi + 0.5).powi(3))
}

/// Carotenoid reflectance index 550.
pub fn cri550(blue: &Column, green: &Column) -> Column {
    pixelwise!(|blue, green| (blue * -1.) * (green * -1.))
}

/// Green difference vegetation index.
pub fn gdvi(green: &Column, nir: &Column) -> Column {
    pixelwise!(|green, nir| nir - green)
}

/// Differenced vegetation index MSS.
pub fn dvimss(nir: &Column, red: &Column) -> Column {
    pixelwise!(|nir, red| 2.4 * nir - red)
}

/// Enhanced vegetation index.
pub fn evi(nir: &Column, red: &Column, blue: &Column) -> Column {
    pixelwise!(|nir, red, blue| (2.5 * nir) - red * (nir + 6. * red - 7.5 * blue) + 1.)
}

/// Enhanced vegetation index 2.
pub fn evi2(nir: &Column, red: &Column) -> Column {
    pixelwise!(|nir, red| 2.4 * nir - red * nir + red + 1.)
}

/// Enhanced vegetation index 2-2.
pub fn evi22(nir: &Column, red: &Column) -> Column {
    pixelwise!(|nir, red| 2.5 * nir - red * nir + 2.4 * red + 1.)
}

/// Global environment monitoring index.
pub fn gemi(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| {
        let n = safe_div(
            2. * (nir.powi(2) - red.powi(2)) + 1.5 * nir + 0.5 * red,
            nir + red + 0.5,
        );
        n * (1. - 0.25 * n) - red - 0.125 * 1. - red
    })
}

/// Green atmospherically resistant vegetation index.
pub fn gari(blue: &Column, green: &Column, red: &Column, nir: &Column) -> Column {
    pixelwise!(|blue, green, red, nir| safe_div(
        nir - (green - (blue - red)),
        nir - (green + (blue - red)),
    ))
}

/// Green leaf index.
pub fn gli(blue: &Column, green: &Column, red: &Column) -> Column {
    pixelwise!(|blue, green, red| safe_div(
        2. * green - red - blue,
        2. * green + red + blue
    ))
}

/// Green normalized difference vegetation index.
pub fn gndvi(nir: &Column, green: &Column) -> Column {
    normalized_difference(green, nir)
}

/// Green optimized soil adjusted vegetation index.
pub fn gosavi(green: &Column, nir: &Column) -> Column {
    pixelwise!(|green, nir| safe_div(nir - green, nir + green + 0.16))
}

/// Green soil adjusted vegetation index.
pub fn gsavi(green: &Column, nir: &Column) -> Column {
    const L: f64 = 0.5;
    pixelwise!(|green, nir| safe_div(nir - green, nir + green + L * (1. + L)))
}

/// Green-blue NDVI.
pub fn gbndvi(blue: &Column, green: &Column, nir: &Column) -> Column {
    pixelwise!(|blue, green, nir| safe_div(nir - (green + blue), nir + (green + blue)))
}

/// Green-red NDVI.
pub fn grndvi(red: &Column, green: &Column, nir: &Column) -> Column {
    pixelwise!(|red, green, nir| safe_div(nir - (green + red), nir + (green + red)))
}

pub fn hue(red: &Column, green: &Column, blue: &Column) -> Column {
    pixelwise!(|red, green, blue| (2. * red - green - blue * 30.5 * (green - blue)).atan())
}

pub fn intensity(red: &Column, green: &Column, blue: &Column) -> Column {
    pixelwise!(|red, green, blue| (1. / 30.5) * (red + green + blue))
}

/// Log of the NIR/red ratio. Zero ratios stay zero.
pub fn logratio(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| {
        let ratio = safe_div(nir, red).abs();
        if ratio == 0. {
            0.
        } else {
            ratio.log10()
        }
    })
}

pub fn mcrig(blue: &Column, green: &Column, nir: &Column) -> Column {
    pixelwise!(|blue, green, nir| (blue * -1. - green * -1.) * nir)
}

/// Mid-infrared vegetation index.
pub fn mvi(nir: &Column, swir1: &Column) -> Column {
    pixelwise!(|nir, swir1| safe_div(nir, swir1))
}

/// Modified simple ratio NIR/red.
pub fn msrnir_red(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| {
        let ratio = safe_div(nir, red);
        safe_div(ratio - 1., ratio + 1.)
    })
}

pub fn norm_nir(red: &Column, green: &Column, nir: &Column) -> Column {
    pixelwise!(|red, green, nir| safe_div(nir, nir + red + green))
}

pub fn norm_r(red: &Column, green: &Column, nir: &Column) -> Column {
    pixelwise!(|red, green, nir| safe_div(red, nir + red + green))
}

pub fn norm_g(red: &Column, green: &Column, nir: &Column) -> Column {
    pixelwise!(|red, green, nir| safe_div(green, nir + red + green))
}

/// Non-linear index.
pub fn nli(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div((nir * 2.) - red, (nir * 2.) + red))
}

/// Plant pigment ratio, normalized difference 550/450.
pub fn ppr(blue: &Column, green: &Column) -> Column {
    pixelwise!(|blue, green| safe_div(green - blue, green + blue))
}

/// Photosynthetic vigour ratio, normalized difference 550/650.
pub fn pvr(red: &Column, green: &Column) -> Column {
    pixelwise!(|red, green| safe_div(green - red, green + red))
}

/// Blue normalized difference vegetation index.
pub fn bndvi(blue: &Column, nir: &Column) -> Column {
    pixelwise!(|blue, nir| safe_div(nir - blue, nir + blue))
}

/// Modified NDVI, normalized difference NIR/MIR.
pub fn mndvi(nir: &Column, swir2: &Column) -> Column {
    pixelwise!(|nir, swir2| safe_div(nir - swir2, nir + swir2))
}

/// NDVI corrected by the SWIR1 range of the whole scene.
///
/// The minimum and maximum of `swir1` and the minimum of `swir2` are taken
/// once over the full columns, so the result depends on every pixel.
pub fn ndvic(red: &Column, nir: &Column, swir1: &Column, swir2: &Column) -> Column {
    let swir1_min = swir1.fold(f64::INFINITY, |min, &value| min.min(value));
    let swir1_max = swir1.fold(f64::NEG_INFINITY, |max, &value| max.max(value));
    let swir2_min = swir2.fold(f64::INFINITY, |min, &value| min.min(value));
    let swir1_range = swir1_max - swir1_min;
    pixelwise!(|red, nir, swir1| {
        safe_div(nir - red, nir + red) * safe_div(1. - swir1 - swir2_min, swir1_range)
    })
}

/// Pan NDVI.
pub fn pndvi(red: &Column, green: &Column, blue: &Column, nir: &Column) -> Column {
    pixelwise!(|red, green, blue, nir| safe_div(
        nir - (green + red + blue),
        nir + (green + red + blue)
    ))
}

/// Red-blue NDVI.
pub fn rbndvi(red: &Column, blue: &Column, nir: &Column) -> Column {
    pixelwise!(|red, blue, nir| safe_div(nir - red + blue, nir + red + blue))
}

/// Blue green pigment index, simple ratio coastal/green.
pub fn bgi(coastal: &Column, green: &Column) -> Column {
    pixelwise!(|coastal, green| safe_div(coastal, green))
}

pub fn sr550_670(red: &Column, green: &Column) -> Column {
    pixelwise!(|red, green| safe_div(green, red))
}

pub fn sr860_550(green: &Column, nir: &Column) -> Column {
    pixelwise!(|green, nir| safe_div(nir, green))
}

pub fn srmir_red(red: &Column, swir2: &Column) -> Column {
    pixelwise!(|red, swir2| safe_div(swir2, red))
}

/// Green ratio vegetation index.
pub fn grvi(green: &Column, nir: &Column) -> Column {
    pixelwise!(|green, nir| safe_div(nir, green))
}

pub fn srnir_mir(nir: &Column, swir2: &Column) -> Column {
    pixelwise!(|nir, swir2| safe_div(nir, swir2))
}

/// Vegetation index number, simple ratio NIR/red.
pub fn dvi(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div(nir, red))
}

/// Red-green ratio.
pub fn rgr(red: &Column, green: &Column) -> Column {
    pixelwise!(|red, green| safe_div(red, green))
}

/// Ratio vegetation index, simple ratio red/NIR.
pub fn ssred_nir(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div(red, nir))
}

/// Soil and atmospherically resistant vegetation index 2.
pub fn sarvi2(red: &Column, blue: &Column, nir: &Column) -> Column {
    pixelwise!(|red, blue, nir| 2.5 * (nir - red) + (nir + (6. * red) - (7.5 * blue)))
}

/// Specific leaf area vegetation index.
pub fn slavi(red: &Column, nir: &Column, swir2: &Column) -> Column {
    pixelwise!(|red, nir, swir2| safe_div(nir, red + swir2))
}

pub fn sqrt_nir_ir(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div(nir, red).abs().sqrt())
}

/// Tasselled cap brightness.
pub fn tass_brig(
    red: &Column,
    blue: &Column,
    green: &Column,
    nir: &Column,
    swir2: &Column,
) -> Column {
    pixelwise!(|red, blue, green, nir, swir2| 0.3037 * blue
        + 0.2793 * green
        + 0.4773 * red
        + 0.5585 * nir
        + 0.1863 * swir2)
}

/// Tasselled cap greenness.
pub fn tass_veg(
    red: &Column,
    blue: &Column,
    green: &Column,
    nir: &Column,
    swir1: &Column,
    swir2: &Column,
) -> Column {
    blue * -0.2848 - green * 0.2435 - red * 0.5436 + nir * 0.7243 + swir1 * 0.084 - swir2 * 0.18
}

/// Tasselled cap wetness.
pub fn tass_wet(
    red: &Column,
    blue: &Column,
    green: &Column,
    nir: &Column,
    swir1: &Column,
    swir2: &Column,
) -> Column {
    blue * 0.1509 + green * 0.1973 + red * 0.3279 + nir * 0.3406
        - swir1 * 0.7112
        - swir2 * 0.4272
}

/// Transformed NDVI.
pub fn t_ndvi(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div(nir - red, nir + red + 0.5))
}

/// Transformed vegetation index.
pub fn tvi(red: &Column, green: &Column) -> Column {
    pixelwise!(|red, green| safe_div(red - green, red + green) + 0.5)
}

/// Visible atmospherically resistant index green.
pub fn varigreen(red: &Column, green: &Column, blue: &Column) -> Column {
    pixelwise!(|red, green, blue| safe_div(green - red, green + red - blue))
}

/// Wide dynamic range vegetation index.
pub fn wdrvi(red: &Column, nir: &Column) -> Column {
    pixelwise!(|red, nir| safe_div(0.1 * (nir - red), 0.1 * (nir + red)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rstest::rstest;

    fn assert_close(actual: &Column, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (actual, expected) in actual.iter().zip(expected) {
            assert!(
                (actual - expected).abs() < 1e-9,
                "{actual} differs from {expected}"
            );
        }
    }

    #[test]
    fn evi_keeps_published_coefficients() {
        let nir = array![0.5, 0.];
        let red = array![0.1, 0.];
        let blue = array![0.2, 0.];
        // 1.25 - 0.1 * (0.5 + 0.6 - 1.5) + 1
        assert_close(&evi(&nir, &red, &blue), &[2.29, 1.]);
    }

    #[test]
    fn tasselled_cap_loadings() {
        let ones = array![1.];
        let zeros = array![0.];
        assert_close(
            &tass_brig(&ones, &ones, &ones, &ones, &ones),
            &[0.3037 + 0.2793 + 0.4773 + 0.5585 + 0.1863],
        );
        assert_close(
            &tass_veg(&zeros, &zeros, &zeros, &ones, &zeros, &zeros),
            &[0.7243],
        );
        assert_close(
            &tass_wet(&zeros, &zeros, &zeros, &zeros, &ones, &ones),
            &[-0.7112 - 0.4272],
        );
    }

    #[test]
    fn ndvic_reduces_over_whole_column() {
        let red = array![1., 1., 1.];
        let nir = array![3., 3., 3.];
        let swir1 = array![0., 2., 4.];
        let swir2 = array![0.5, 1., 2.];
        // ndvi = 0.5, swir1 range = 4, swir2 min = 0.5
        assert_close(
            &ndvic(&red, &nir, &swir1, &swir2),
            &[0.5 * 0.5 / 4., 0.5 * -1.5 / 4., 0.5 * -3.5 / 4.],
        );
    }

    #[test]
    fn ndvic_flat_swir1_is_zero() {
        let band = array![0.2, 0.2];
        assert_close(&ndvic(&band, &band, &band, &band), &[0., 0.]);
    }

    #[test]
    fn ctvi_cubes_shifted_ndvi() {
        assert_close(&ctvi(&array![0.5, -0.5, 0.]), &[1., 0., 0.125]);
    }

    #[test]
    fn logratio_of_zero_ratio_is_zero() {
        let red = array![0., 1., 2.];
        let nir = array![5., 0., 20.];
        assert_close(&logratio(&red, &nir), &[0., 0., 1.]);
    }

    #[test]
    fn gemi_handles_vanishing_denominator() {
        // nir + red + 0.5 == 0 leaves n at zero.
        let red = array![-0.25];
        let nir = array![-0.25];
        assert_close(&gemi(&red, &nir), &[0.25 - 0.125 + 0.25]);
    }

    #[rstest]
    #[case::avi(avi(&array![0.3], &array![0.3]))]
    #[case::arvi2(arvi2(&array![0.], &array![0.]))]
    #[case::cvi(cvi(&array![0.4], &array![0.], &array![0.2]))]
    #[case::msrnir_red(msrnir_red(&array![1.], &array![-1.]))]
    #[case::sqrt_nir_ir(sqrt_nir_ir(&array![0.], &array![0.7]))]
    #[case::slavi(slavi(&array![0.], &array![0.5], &array![0.]))]
    #[case::varigreen(varigreen(&array![0.1], &array![0.1], &array![0.2]))]
    #[case::wdrvi(wdrvi(&array![0.], &array![0.]))]
    fn zero_denominator_yields_zero(#[case] index: Column) {
        assert_close(&index, &[0.]);
    }

    #[test]
    fn ratios_point_the_right_way() {
        let red = array![2.];
        let green = array![4.];
        let nir = array![8.];
        assert_close(&dvi(&red, &nir), &[4.]);
        assert_close(&ssred_nir(&red, &nir), &[0.25]);
        assert_close(&sr550_670(&red, &green), &[2.]);
        assert_close(&sr860_550(&green, &nir), &[2.]);
        assert_close(&rgr(&red, &green), &[0.5]);
        assert_close(&grvi(&green, &nir), &[2.]);
        assert_close(&bgi(&red, &green), &[0.5]);
    }
}
