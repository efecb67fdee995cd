use std::{fmt::Debug, path::Path};

use crate::{
    components::{
        metadata::{RasterProfile, SceneMetadata},
        Column, PixelTable,
    },
    errors::Result,
};

/// Read side of a raster resource.
///
/// Band indexes are 0-based here, whatever the backend uses.
pub trait RasterFile: Debug + Sized {
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;
    /// `(width, height)`.
    fn size(&self) -> (usize, usize);
    fn crs(&self) -> String;
    fn geo_transform(&self) -> Result<[f64; 6]>;
    fn num_bands(&self) -> usize;
    fn driver(&self) -> String;
    fn band_dtype(&self, index: usize) -> Result<String>;
    fn no_data(&self, index: usize) -> Result<Option<f64>>;
    /// Whole band as `f64`, flattened row-major.
    fn read_band(&self, index: usize) -> Result<Column>;

    fn profile(&self) -> Result<RasterProfile> {
        let (width, height) = self.size();
        let nodata = match self.num_bands() {
            0 => None,
            _ => self.no_data(0)?,
        };
        Ok(RasterProfile {
            driver: self.driver(),
            width,
            height,
            count: self.num_bands(),
            transform: self.geo_transform()?,
            crs: self.crs(),
            nodata,
        })
    }

    fn metadata(&self) -> Result<SceneMetadata> {
        let dtypes = (0..self.num_bands())
            .map(|idx| self.band_dtype(idx))
            .collect::<Result<_>>()?;
        Ok(SceneMetadata::new(self.profile()?, dtypes))
    }

    /// Every band as a column, named `BAND_1..BAND_n` in file order.
    fn table(&self) -> Result<PixelTable> {
        let (width, height) = self.size();
        let mut table = PixelTable::new(width * height);
        for idx in 0..self.num_bands() {
            table.insert(format!("BAND_{}", idx + 1), self.read_band(idx)?)?;
        }
        Ok(table)
    }
}
