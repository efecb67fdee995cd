use geo::{AffineOps, AffineTransform, Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::errors::{FeatureRasterError, Result};

/// Affine transform from a GDAL `(x0, a, b, y0, d, e)` geo-transform.
pub fn affine_from_gdal(gdal_transform: [f64; 6]) -> AffineTransform {
    AffineTransform::new(
        gdal_transform[1],
        gdal_transform[2],
        gdal_transform[0],
        gdal_transform[4],
        gdal_transform[5],
        gdal_transform[3],
    )
}

/// Geographic extent of a scene in its own CRS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl SceneBounds {
    /// Extent covered by a `width` x `height` grid under `transform`.
    pub fn from_grid(transform: &AffineTransform, width: usize, height: usize) -> Self {
        let grid = Rect::new(Coord { x: 0., y: 0. }, Coord {
            x: width as f64,
            y: height as f64,
        })
        .to_polygon()
        .affine_transform(transform);
        let (mut left, mut bottom) = (f64::INFINITY, f64::INFINITY);
        let (mut right, mut top) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for coord in grid.exterior().coords() {
            left = left.min(coord.x);
            right = right.max(coord.x);
            bottom = bottom.min(coord.y);
            top = top.max(coord.y);
        }
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

/// Everything needed to write a raster on the same grid as the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterProfile {
    pub driver: String,
    pub width: usize,
    pub height: usize,
    pub count: usize,
    /// GDAL ordering: `(x0, a, b, y0, d, e)`.
    pub transform: [f64; 6],
    /// WKT, empty when the file carries none.
    pub crs: String,
    pub nodata: Option<f64>,
}

impl RasterProfile {
    pub fn affine(&self) -> AffineTransform {
        affine_from_gdal(self.transform)
    }

    /// Geo to pixel transform.
    pub fn inverse_affine(&self) -> Result<AffineTransform> {
        self.affine()
            .inverse()
            .ok_or(FeatureRasterError::NonInvertibleTransform)
    }

    pub fn n_pixels(&self) -> usize {
        self.width * self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub bounds: SceneBounds,
    pub crs: String,
    /// GDAL type name of each band, in band order.
    pub dtypes: Vec<String>,
    /// Pixel size `(x, y)` in CRS units.
    pub resolution: (f64, f64),
    pub profile: RasterProfile,
}

impl SceneMetadata {
    pub fn new(profile: RasterProfile, dtypes: Vec<String>) -> Self {
        let transform = profile.affine();
        Self {
            bounds: SceneBounds::from_grid(&transform, profile.width, profile.height),
            crs: profile.crs.clone(),
            dtypes,
            resolution: (transform.a().abs(), transform.e().abs()),
            profile,
        }
    }

    /// `(width, height)` of the pixel grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.profile.width, self.profile.height)
    }
}
