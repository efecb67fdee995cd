//! Per-pixel feature tables from multi-band satellite scenes.
//!
//! A [SensorImage] loads a scene as a [PixelTable] with one row per pixel
//! and one column per band. [IndexTransformer] appends the spectral indices
//! of the sensor as new columns, and a [CoverageLayer] of labelled polygons
//! can be burned in as the `coberture` column to train pixel classifiers.

pub mod arithmetic;
pub mod components;
pub mod coverage;
mod errors;
pub mod indices;
pub mod sensors;
mod transformer;

pub use components::{Column, GdalFile, PixelTable, RasterFile, SceneMetadata};
pub use coverage::{CoverageFeature, CoverageLayer, CoverageOptions};
pub use errors::{FeatureRasterError, Result};
pub use indices::SpectralIndex;
pub use sensors::{Sensor, SensorImage};
pub use transformer::IndexTransformer;

/// Label of pixels no coverage feature covers.
pub const DEFAULT_FILL_VALUE: f64 = -9999.;
/// GDAL driver used to write tables back to rasters.
pub const DEFAULT_DRIVER: &str = "GTiff";
/// Table column holding burned coverage labels.
pub const COVERAGE_COLUMN: &str = "coberture";
