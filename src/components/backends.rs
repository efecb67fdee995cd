/// Implementations for gdal
pub mod gdal_backend {
    use std::{
        fs,
        io::ErrorKind,
        path::{Path, PathBuf},
    };

    use gdal::{raster::Buffer, Dataset as GdalDataset, DriverManager, Metadata as GdalMetadata};
    use itertools::Itertools;
    use log::{info, warn};

    use crate::{
        components::{file::RasterFile, metadata::RasterProfile, Column, PixelTable},
        errors::{FeatureRasterError, Result},
    };

    #[derive(Debug)]
    pub struct GdalFile {
        path: PathBuf,
        dataset: GdalDataset,
    }

    impl GdalFile {
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl RasterFile for GdalFile {
        fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
            let path = path.as_ref();
            if !path.exists() {
                return Err(FeatureRasterError::FileNotFound(path.to_path_buf()));
            }
            Ok(GdalFile {
                path: path.to_path_buf(),
                dataset: GdalDataset::open(path)?,
            })
        }
        fn size(&self) -> (usize, usize) {
            self.dataset.raster_size()
        }
        fn crs(&self) -> String {
            self.dataset.projection()
        }
        fn geo_transform(&self) -> Result<[f64; 6]> {
            Ok(self.dataset.geo_transform()?)
        }
        fn num_bands(&self) -> usize {
            self.dataset.raster_count()
        }
        fn driver(&self) -> String {
            self.dataset.driver().short_name()
        }
        fn band_dtype(&self, index: usize) -> Result<String> {
            Ok(self.dataset.rasterband(index + 1)?.band_type().name())
        }
        fn no_data(&self, index: usize) -> Result<Option<f64>> {
            Ok(self.dataset.rasterband(index + 1)?.no_data_value())
        }
        fn read_band(&self, index: usize) -> Result<Column> {
            let size = self.size();
            let buffer = self
                .dataset
                .rasterband(index + 1)?
                .read_as::<f64>((0, 0), size, size, None)?;
            Ok(Column::from(buffer.data().to_vec()))
        }
    }

    /// Companion legend of a written raster: `<path>.txt`.
    pub fn legend_path<P: AsRef<Path>>(path: P) -> PathBuf {
        let mut legend = path.as_ref().as_os_str().to_owned();
        legend.push(".txt");
        PathBuf::from(legend)
    }

    /// One `"<band> --> <column>"` line per column, bands numbered from 1.
    pub fn legend(table: &PixelTable) -> String {
        table
            .column_names()
            .enumerate()
            .map(|(idx, name)| format!("{} --> {name}\n", idx + 1))
            .join("")
    }

    /// Writes `table` as a `f64` raster on the grid of `profile`, one band
    /// per column in column order, plus its legend file.
    ///
    /// A raster left half written by a failure is removed.
    pub fn write_table<P: AsRef<Path>>(
        path: P,
        driver: &str,
        profile: &RasterProfile,
        table: &PixelTable,
    ) -> Result<()> {
        let path = path.as_ref();
        if table.n_rows() != profile.n_pixels() {
            return Err(FeatureRasterError::TableShape {
                expected: profile.n_pixels(),
                found: table.n_rows(),
            });
        }
        let driver = DriverManager::get_driver_by_name(driver)?;
        let dataset = driver.create_with_band_type::<f64, _>(
            path,
            profile.width,
            profile.height,
            table.n_columns(),
        )?;
        let written = fill_dataset(dataset, profile, table)
            .and_then(|_| Ok(fs::write(legend_path(path), legend(table))?));
        if let Err(error) = written {
            warn!("removing partially written {path:?}: {error}");
            remove_if_exists(path)?;
            remove_if_exists(&legend_path(path))?;
            return Err(error);
        }
        info!("wrote {} bands to {path:?}", table.n_columns());
        Ok(())
    }

    fn fill_dataset(
        mut dataset: GdalDataset,
        profile: &RasterProfile,
        table: &PixelTable,
    ) -> Result<()> {
        dataset.set_geo_transform(&profile.transform)?;
        if !profile.crs.is_empty() {
            dataset.set_projection(&profile.crs)?;
        }
        let shape = (profile.width, profile.height);
        for (idx, (name, column)) in table.iter().enumerate() {
            let mut band = dataset.rasterband(idx + 1)?;
            band.set_description(name)?;
            if let Some(nodata) = profile.nodata {
                band.set_no_data_value(Some(nodata))?;
            }
            let mut buffer = Buffer::new(shape, column.to_vec());
            band.write((0, 0), shape, &mut buffer)?;
        }
        Ok(())
    }

    fn remove_if_exists(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Err(error) if error.kind() != ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }

}
