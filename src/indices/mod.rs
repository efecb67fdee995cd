//! Catalog of spectral indices.
//!
//! Every index maps a fixed list of named columns to one derived column of
//! the same length. Formulas live in the family modules, the catalog binds
//! each of them to its column name and its inputs.

/// Maps a scalar formula over equally long columns.
///
/// Each identifier names both a `&Column` in scope and the `f64` value of
/// that column for the current pixel inside the formula.
macro_rules! pixelwise {
    (|$first:ident $(, $rest:ident)*| $formula:expr) => {
        ::ndarray::Zip::from($first)
            $(.and($rest))*
            .map_collect(|&$first $(, &$rest)*| $formula)
    };
}

pub mod minerals;
pub mod references;
pub mod soil;
pub mod urban;
pub mod vegetation;
pub mod water;

use std::fmt::Display;

use crate::{
    arithmetic::normalized_difference,
    components::{Column, PixelTable},
    errors::Result,
};

/// Declares [SpectralIndex].
///
/// Input identifiers are the table column names the formula reads, in the
/// order the formula takes them.
macro_rules! catalog {
    ($($variant:ident => $name:literal, $formula:path, [$($input:ident),+];)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SpectralIndex {
            $($variant,)+
        }

        impl SpectralIndex {
            /// Every index, in declaration order.
            pub const ALL: &'static [SpectralIndex] = &[$(SpectralIndex::$variant,)+];

            /// Column name of the index.
            pub fn name(&self) -> &'static str {
                match self {
                    $(SpectralIndex::$variant => $name,)+
                }
            }

            /// Columns the formula reads.
            pub fn inputs(&self) -> &'static [&'static str] {
                match self {
                    $(SpectralIndex::$variant => &[$(stringify!($input)),+],)+
                }
            }

            /// Evaluates the index over `table`.
            ///
            /// Fails with [MissingColumn](crate::FeatureRasterError::MissingColumn)
            /// when an input column is absent.
            pub fn compute(&self, table: &PixelTable) -> Result<Column> {
                let column = match self {
                    $(SpectralIndex::$variant => {
                        let [$($input),+] = table.columns([$(stringify!($input)),+])?;
                        $formula($($input),+)
                    })+
                };
                Ok(column)
            }
        }
    };
}

catalog! {
    Ndvi => "ndvi", normalized_difference, [red, nir];
    Atsavi => "atsavi", vegetation::atsavi, [nir, red];
    Afri1600 => "afri1600", vegetation::afri1600, [nir, swir1];
    Alteration => "alteration", minerals::alteration, [swir1, swir2];
    Avi => "avi", vegetation::avi, [nir, red];
    Arvi2 => "arvi2", vegetation::arvi2, [red, nir];
    Bwdrvi => "bwdrvi", vegetation::bwdrvi, [blue, nir];
    CiGreen => "ci_green", vegetation::ci_green, [nir, green];
    Cvi => "cvi", vegetation::cvi, [nir, green, red];
    Ci => "ci", soil::ci, [red, blue];
    Ctvi => "ctvi", vegetation::ctvi, [ndvi];
    Cri550 => "cri550", vegetation::cri550, [blue, green];
    Gdvi => "gdvi", vegetation::gdvi, [green, nir];
    Dvimss => "dvimss", vegetation::dvimss, [nir, red];
    Evi => "evi", vegetation::evi, [nir, red, blue];
    Evi2 => "evi2", vegetation::evi2, [nir, red];
    Evi22 => "evi22", vegetation::evi22, [nir, red];
    Fe2plus => "fe2plus", minerals::fe2plus, [green, nir, swir2];
    FerricOxides => "ferricoxides", minerals::ferric_oxides, [nir, swir1];
    FerrousIron => "ferrous_iron", minerals::ferrous_iron, [swir2, nir, green];
    FerrousSilicates => "ferrous_silicates", minerals::ferrous_silicates, [swir1, swir2];
    Gemi => "gemi", vegetation::gemi, [red, nir];
    Gvmi => "gvmi", water::gvmi, [nir, swir2];
    Gossan => "gossan", minerals::gossan, [red, swir1];
    Gari => "gari", vegetation::gari, [blue, green, red, nir];
    Gli => "gli", vegetation::gli, [blue, green, red];
    Gndvi => "gndvi", vegetation::gndvi, [nir, green];
    Gosavi => "gosavi", vegetation::gosavi, [green, nir];
    Gsavi => "gsavi", vegetation::gsavi, [green, nir];
    Gbndvi => "gbndvi", vegetation::gbndvi, [blue, green, nir];
    Grndvi => "grndvi", vegetation::grndvi, [red, green, nir];
    Hue => "hue", vegetation::hue, [red, green, blue];
    Intensity => "intensity", vegetation::intensity, [red, green, blue];
    Laterite => "laterite", minerals::laterite, [swir1, swir2];
    Logratio => "logratio", vegetation::logratio, [red, nir];
    Mcrig => "mcrig", vegetation::mcrig, [blue, green, nir];
    Mvi => "mvi", vegetation::mvi, [nir, swir1];
    MsrNirRed => "msrnir_red", vegetation::msrnir_red, [red, nir];
    NormR => "norm_r", vegetation::norm_r, [red, green, nir];
    NormNir => "norm_nir", vegetation::norm_nir, [red, green, nir];
    NormG => "norm_g", vegetation::norm_g, [red, green, nir];
    Nli => "nli", vegetation::nli, [red, nir];
    Ppr => "ppr", vegetation::ppr, [blue, green];
    Pvr => "pvr", vegetation::pvr, [red, green];
    Siwsi => "siwsi", water::siwsi, [nir, swir1];
    Bndvi => "bndvi", vegetation::bndvi, [blue, nir];
    Mndvi => "mndvi", vegetation::mndvi, [nir, swir2];
    Ri => "ri", soil::ri, [red, green];
    Ndsi => "ndsi", soil::ndsi, [swir1, swir2];
    Ndvic => "ndvic", vegetation::ndvic, [red, nir, swir1, swir2];
    Pndvi => "pndvi", vegetation::pndvi, [red, green, blue, nir];
    Rbndvi => "rbndvi", vegetation::rbndvi, [red, blue, nir];
    ShapeIndex => "if_index", soil::if_index, [red, green, blue];
    Tm5Tm7 => "tm5_tm7", minerals::tm5_tm7, [swir1, swir2];
    Sr550To670 => "sr550_670", vegetation::sr550_670, [red, green];
    Sr860To550 => "sr860_550", vegetation::sr860_550, [green, nir];
    Rdi => "rdi", water::rdi, [nir, swir2];
    SrMirRed => "srmir_red", vegetation::srmir_red, [red, swir2];
    Grvi => "grvi", vegetation::grvi, [green, nir];
    SrNirMir => "srnir_mir", vegetation::srnir_mir, [nir, swir2];
    Dvi => "dvi", vegetation::dvi, [red, nir];
    Io => "io", minerals::io, [red, blue];
    Rgr => "rgr", vegetation::rgr, [red, green];
    SsRedNir => "ssred_nir", vegetation::ssred_nir, [red, nir];
    Swir1Nir => "swir1_nir", minerals::swir1_nir, [nir, swir1];
    Sarvi2 => "sarvi2", vegetation::sarvi2, [red, blue, nir];
    Sbl => "sbl", soil::sbl, [red, nir];
    Sci => "sci", soil::sci, [nir, swir1];
    Slavi => "slavi", vegetation::slavi, [red, nir, swir2];
    SqrtNirIr => "sqrt_nir_ir", vegetation::sqrt_nir_ir, [red, nir];
    TasBri => "tas_bri", vegetation::tass_brig, [red, blue, green, nir, swir2];
    TasVeg => "tas_veg", vegetation::tass_veg, [red, blue, green, nir, swir1, swir2];
    TasWet => "tas_wet", vegetation::tass_wet, [red, blue, green, nir, swir1, swir2];
    TNdvi => "t_ndvi", vegetation::t_ndvi, [red, nir];
    Tvi => "tvi", vegetation::tvi, [red, green];
    VariGreen => "varigreen", vegetation::varigreen, [red, green, blue];
    Wdrvi => "wdrvi", vegetation::wdrvi, [red, nir];
    Ndbi => "ndbi", urban::ndbi, [nir, swir1];
    Bu => "bu", urban::bu, [red, nir, swir1];
    Mndwi => "mndwi", water::mndwi, [green, swir1];
    Bgi => "bgi", vegetation::bgi, [coastal, green];
}

impl SpectralIndex {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|index| index.name() == name)
    }

    /// Source of the published formula.
    pub fn reference(&self) -> Option<&'static str> {
        references::reference(self.name())
    }
}

impl Display for SpectralIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
