use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::indices::SpectralIndex;

pub(crate) mod image;
pub use image::SensorImage;

pub const COASTAL: &str = "coastal";
pub const BLUE: &str = "blue";
pub const GREEN: &str = "green";
pub const RED: &str = "red";
pub const NIR: &str = "nir";
pub const SWIR1: &str = "swir1";
pub const SWIR2: &str = "swir2";
pub const QUALITY: &str = "quality";

/// Supported sensors, each with a fixed band layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sensor {
    /// Landsat 5 TM, bands 1-5 and 7 plus the quality band.
    Landsat5,
    /// Landsat 8 OLI, bands 1-7 plus the quality band.
    Landsat8,
}

impl Sensor {
    pub fn name(&self) -> &'static str {
        match self {
            Sensor::Landsat5 => "Landsat5",
            Sensor::Landsat8 => "Landsat8",
        }
    }

    /// Names given to the file bands, in file order.
    pub fn band_names(&self) -> &'static [&'static str] {
        match self {
            Sensor::Landsat5 => &[BLUE, RED, GREEN, NIR, SWIR1, SWIR2, QUALITY],
            Sensor::Landsat8 => &[COASTAL, BLUE, GREEN, RED, NIR, SWIR1, SWIR2, QUALITY],
        }
    }

    pub fn band_count(&self) -> usize {
        self.band_names().len()
    }

    /// Whether every band `index` reads is a band of this sensor or an index
    /// computed before it.
    pub fn supports(&self, index: SpectralIndex) -> bool {
        index.inputs().iter().all(|input| {
            self.band_names().contains(input) || SpectralIndex::from_name(input).is_some()
        })
    }

    /// Indices computed for this sensor, in computation order.
    pub fn indices(&self) -> impl Iterator<Item = SpectralIndex> + '_ {
        SpectralIndex::ALL
            .iter()
            .copied()
            .filter(|index| self.supports(*index))
    }
}

impl Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
