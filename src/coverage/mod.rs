//! Land-cover labels burned onto the scene grid.

pub mod rasterize;

use std::{collections::HashMap, path::Path};

use gdal::{vector::LayerAccess, Dataset as GdalDataset};
use geo::Geometry;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{FeatureRasterError, Result},
    COVERAGE_COLUMN, DEFAULT_FILL_VALUE,
};

pub use rasterize::rasterize;

/// Parameters of [SensorImage::burn_coverage](crate::SensorImage::burn_coverage)
/// and [SensorImage::select_labeled_rows](crate::SensorImage::select_labeled_rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageOptions {
    /// Attribute holding the class value of each feature.
    pub label_column: String,
    /// Value of pixels no feature covers.
    pub fill_value: f64,
}

impl Default for CoverageOptions {
    fn default() -> Self {
        Self {
            label_column: COVERAGE_COLUMN.into(),
            fill_value: DEFAULT_FILL_VALUE,
        }
    }
}

impl CoverageOptions {
    pub fn new<S: Into<String>>(label_column: S) -> Self {
        Self {
            label_column: label_column.into(),
            ..Default::default()
        }
    }
}

/// One labelled polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageFeature {
    pub geometry: Geometry<f64>,
    pub attributes: HashMap<String, f64>,
}

impl CoverageFeature {
    pub fn new<G: Into<Geometry<f64>>>(geometry: G) -> Self {
        Self {
            geometry: geometry.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}

/// Polygons with numeric attributes, in the CRS of the scene they label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageLayer {
    features: Vec<CoverageFeature>,
}

fn check_areal(geometry: &Geometry<f64>) -> Result<()> {
    match geometry {
        Geometry::Polygon(_)
        | Geometry::MultiPolygon(_)
        | Geometry::Rect(_)
        | Geometry::Triangle(_) => Ok(()),
        Geometry::GeometryCollection(collection) => collection.iter().try_for_each(check_areal),
        Geometry::Point(_) => Err(FeatureRasterError::InvalidGeometry("point".into())),
        Geometry::MultiPoint(_) => Err(FeatureRasterError::InvalidGeometry("multipoint".into())),
        Geometry::Line(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => {
            Err(FeatureRasterError::InvalidGeometry("line".into()))
        }
    }
}

impl CoverageLayer {
    /// Fails with [InvalidGeometry](FeatureRasterError::InvalidGeometry) on
    /// anything but polygons.
    pub fn new(features: Vec<CoverageFeature>) -> Result<Self> {
        for feature in &features {
            check_areal(&feature.geometry)?;
        }
        Ok(Self { features })
    }

    /// Reads the first layer of a vector dataset.
    ///
    /// Numeric fields become attributes, other fields are skipped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FeatureRasterError::FileNotFound(path.to_path_buf()));
        }
        let dataset = GdalDataset::open(path)?;
        let mut layer = dataset.layer(0)?;
        let features = layer
            .features()
            .enumerate()
            .map(|(idx, feature)| {
                let geometry = feature
                    .geometry()
                    .ok_or_else(|| {
                        FeatureRasterError::InvalidGeometry(format!("feature {idx} has no geometry"))
                    })?
                    .to_geo()?;
                let attributes = feature
                    .fields()
                    .filter_map(|(name, value)| Some((name, value?.into_real()?)))
                    .collect();
                Ok(CoverageFeature {
                    geometry,
                    attributes,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        info!("read {} coverage features from {path:?}", features.len());
        Self::new(features)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[CoverageFeature] {
        &self.features
    }

    /// `(geometry, label)` pairs read from attribute `column`.
    pub fn shapes(&self, column: &str) -> Result<Vec<(&Geometry<f64>, f64)>> {
        self.features
            .iter()
            .map(|feature| {
                feature
                    .attributes
                    .get(column)
                    .map(|label| (&feature.geometry, *label))
                    .ok_or_else(|| FeatureRasterError::MissingColumn(column.into()))
            })
            .collect()
    }
}
