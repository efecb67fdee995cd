use std::path::Path;

use log::info;
use ndarray::Zip;

use crate::{
    components::{
        backends::gdal_backend::{write_table, GdalFile},
        Column, PixelTable, RasterFile, SceneMetadata,
    },
    coverage::{rasterize, CoverageLayer, CoverageOptions},
    errors::{FeatureRasterError, Result},
    sensors::Sensor,
    COVERAGE_COLUMN,
};

/// One scene of a [Sensor]: its pixels as a [PixelTable] plus the metadata
/// needed to write them back on the same grid.
#[derive(Debug, Clone)]
pub struct SensorImage {
    sensor: Sensor,
    table: PixelTable,
    metadata: SceneMetadata,
}

impl SensorImage {
    /// Loads a scene through GDAL.
    pub fn open<P: AsRef<Path>>(path: P, sensor: Sensor) -> Result<Self> {
        Self::open_with::<GdalFile, _>(path, sensor)
    }

    pub fn open_with<F: RasterFile, P: AsRef<Path>>(path: P, sensor: Sensor) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FeatureRasterError::FileNotFound(path.to_path_buf()));
        }
        let file = F::open(path)?;
        let image = Self::new(sensor, file.table()?, file.metadata()?)?;
        info!("new {image:?} from {path:?}");
        Ok(image)
    }

    /// Names the columns of `table` after the sensor bands.
    ///
    /// `table` must hold one column per sensor band and one row per pixel.
    pub fn new(sensor: Sensor, mut table: PixelTable, metadata: SceneMetadata) -> Result<Self> {
        if table.n_columns() != sensor.band_count() {
            return Err(FeatureRasterError::BandCountMismatch {
                sensor: sensor.name(),
                expected: sensor.band_count(),
                found: table.n_columns(),
            });
        }
        check_rows(&table, &metadata)?;
        table.rename(sensor.band_names().iter().copied())?;
        Ok(Self {
            sensor,
            table,
            metadata,
        })
    }

    pub fn sensor(&self) -> Sensor {
        self.sensor
    }

    pub fn metadata(&self) -> &SceneMetadata {
        &self.metadata
    }

    pub fn table(&self) -> &PixelTable {
        &self.table
    }

    pub fn into_table(self) -> PixelTable {
        self.table
    }

    /// Replaces the table, which must still have one row per pixel.
    pub fn set_table(&mut self, table: PixelTable) -> Result<()> {
        check_rows(&table, &self.metadata)?;
        self.table = table;
        Ok(())
    }

    /// Writes one `f64` band per column and the `<path>.txt` legend.
    pub fn write<P: AsRef<Path>>(&self, path: P, driver: &str) -> Result<()> {
        write_table(path, driver, &self.metadata.profile, &self.table)
    }

    /// Burns `layer` onto the scene grid as the `coberture` column.
    pub fn burn_coverage(&mut self, layer: &CoverageLayer, options: &CoverageOptions) -> Result<()> {
        let shapes = layer.shapes(&options.label_column)?;
        let profile = &self.metadata.profile;
        let grid = rasterize(shapes, options.fill_value, profile)?;
        let labels: Column = grid.into_shape_with_order(profile.n_pixels())?;
        let labelled = labels
            .iter()
            .filter(|label| **label != options.fill_value)
            .count();
        self.table.insert(COVERAGE_COLUMN, labels)?;
        info!(
            "burned {} coverage features, {labelled} of {} pixels labelled",
            layer.len(),
            profile.n_pixels()
        );
        Ok(())
    }

    /// Rows whose coverage label is not `fill_value`.
    pub fn select_labeled_rows(&self, fill_value: f64) -> Result<PixelTable> {
        let labels = self
            .table
            .column(COVERAGE_COLUMN)
            .map_err(|_| FeatureRasterError::MissingCoverage)?;
        let keep = Zip::from(labels).map_collect(|label| *label != fill_value);
        self.table.filter_rows(&keep)
    }
}

fn check_rows(table: &PixelTable, metadata: &SceneMetadata) -> Result<()> {
    match metadata.profile.n_pixels() {
        expected if expected == table.n_rows() => Ok(()),
        expected => Err(FeatureRasterError::TableShape {
            expected,
            found: table.n_rows(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{components::metadata::tests::profile, coverage::CoverageFeature};
    use geo::{Coord, Rect};
    use itertools::Itertools;
    use ndarray::Array1;
    use rstest::{fixture, rstest};

    /// Synthetic `width` x `height` scene, band `b` of pixel `p` holds `b + p / 100`.
    pub(crate) fn scene(sensor: Sensor, width: usize, height: usize) -> SensorImage {
        let n_pixels = width * height;
        let table = PixelTable::from_columns((0..sensor.band_count()).map(|band| {
            (
                format!("BAND_{}", band + 1),
                Array1::from_iter((0..n_pixels).map(|pixel| band as f64 + pixel as f64 / 100.)),
            )
        }))
        .unwrap();
        let metadata = SceneMetadata::new(
            profile(width, height, sensor.band_count()),
            vec!["UInt16".into(); sensor.band_count()],
        );
        SensorImage::new(sensor, table, metadata).unwrap()
    }

    #[fixture]
    fn landsat5() -> SensorImage {
        scene(Sensor::Landsat5, 4, 2)
    }

    #[rstest]
    #[case(Sensor::Landsat5, &["blue", "red", "green", "nir", "swir1", "swir2", "quality"])]
    #[case(Sensor::Landsat8, &["coastal", "blue", "green", "red", "nir", "swir1", "swir2", "quality"])]
    fn bands_named_after_sensor(#[case] sensor: Sensor, #[case] expected: &[&str]) {
        let image = scene(sensor, 3, 3);
        assert_eq!(image.table().column_names().collect_vec(), expected);
        assert_eq!(image.table().n_rows(), 9);
    }

    #[test]
    fn band_count_must_match_sensor() {
        let table = PixelTable::from_columns([("BAND_1", Array1::zeros(8))]).unwrap();
        let metadata = SceneMetadata::new(profile(4, 2, 1), vec!["UInt16".into()]);
        assert!(matches!(
            SensorImage::new(Sensor::Landsat8, table, metadata),
            Err(FeatureRasterError::BandCountMismatch {
                expected: 8,
                found: 1,
                ..
            })
        ));
    }

    #[rstest]
    fn set_table_checks_rows(mut landsat5: SensorImage) {
        let short = PixelTable::from_columns([("ndvi", Array1::zeros(3))]).unwrap();
        assert!(matches!(
            landsat5.set_table(short),
            Err(FeatureRasterError::TableShape {
                expected: 8,
                found: 3
            })
        ));
        assert_eq!(landsat5.table().n_columns(), 7);

        let replacement = PixelTable::from_columns([("ndvi", Array1::zeros(8))]).unwrap();
        landsat5.set_table(replacement).unwrap();
        assert_eq!(landsat5.table().column_names().collect_vec(), ["ndvi"]);
    }

    #[rstest]
    fn labelled_rows_need_coverage(landsat5: SensorImage) {
        assert!(matches!(
            landsat5.select_labeled_rows(-9999.),
            Err(FeatureRasterError::MissingCoverage)
        ));
    }

    #[test_log::test]
    fn burn_and_select() {
        let mut landsat5 = scene(Sensor::Landsat5, 4, 2);
        // grid origin (500000, 4200000), 30 m pixels; covers pixels 0 and 1 of the top row
        let top_left = Rect::new(
            Coord {
                x: 500_000.,
                y: 4_199_975.,
            },
            Coord {
                x: 500_050.,
                y: 4_200_000.,
            },
        );
        let layer = CoverageLayer::new(vec![
            CoverageFeature::new(top_left).with_attribute("class", 4.)
        ])
        .unwrap();
        landsat5
            .burn_coverage(&layer, &CoverageOptions::new("class"))
            .unwrap();

        let labels = landsat5.table().column(COVERAGE_COLUMN).unwrap();
        assert_eq!(labels.to_vec(), [4., 4., -9999., -9999., -9999., -9999., -9999., -9999.]);

        let labelled = landsat5.select_labeled_rows(-9999.).unwrap();
        assert_eq!(labelled.n_rows(), 2);
        assert_eq!(labelled.n_columns(), 8);
        assert_eq!(labelled.column("blue").unwrap().to_vec(), [0., 0.01]);

        let table = landsat5.into_table();
        assert_eq!(table.n_columns(), 8);
        assert_eq!(table.n_rows(), 8);
    }

    #[rstest]
    fn burn_needs_label_attribute(mut landsat5: SensorImage) {
        let square = Rect::new(Coord { x: 0., y: 0. }, Coord { x: 1., y: 1. });
        let layer = CoverageLayer::new(vec![CoverageFeature::new(square)]).unwrap();
        assert!(matches!(
            landsat5.burn_coverage(&layer, &CoverageOptions::default()),
            Err(FeatureRasterError::MissingColumn(column)) if column == "coberture"
        ));
        assert!(!landsat5.table().contains(COVERAGE_COLUMN));
    }
}
