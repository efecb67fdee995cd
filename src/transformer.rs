use log::{debug, info};

use crate::{
    components::PixelTable,
    errors::{FeatureRasterError, Result},
    sensors::{Sensor, SensorImage},
};

/// Appends the spectral indices of one sensor to copies of its image tables.
///
/// Holds no fitted state: [fit](IndexTransformer::fit) only exists so the
/// transformer slots into fit/transform pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTransformer {
    sensor: Sensor,
}

impl IndexTransformer {
    pub fn new(sensor: Sensor) -> Self {
        Self { sensor }
    }

    pub fn landsat5() -> Self {
        Self::new(Sensor::Landsat5)
    }

    pub fn landsat8() -> Self {
        Self::new(Sensor::Landsat8)
    }

    pub fn sensor(&self) -> Sensor {
        self.sensor
    }

    pub fn fit(self, _image: &SensorImage) -> Self {
        self
    }

    /// Table of `image` with every index of the sensor appended, in catalog
    /// order. `image` itself is left untouched.
    ///
    /// Fails as a whole if any index fails.
    pub fn transform(&self, image: &SensorImage) -> Result<PixelTable> {
        if image.sensor() != self.sensor {
            return Err(FeatureRasterError::InvalidSensor {
                expected: self.sensor.name(),
                found: image.sensor().name(),
            });
        }
        let mut table = image.table().clone();
        for index in self.sensor.indices() {
            let column = index.compute(&table)?;
            debug!("computed {index}");
            table.insert(index.name(), column)?;
        }
        info!(
            "{} transform: {} columns for {} pixels",
            self.sensor,
            table.n_columns(),
            table.n_rows()
        );
        Ok(table)
    }

    pub fn fit_transform(self, image: &SensorImage) -> Result<PixelTable> {
        self.fit(image).transform(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::image::tests::scene;
    use itertools::Itertools;
    use rstest::rstest;

    #[rstest]
    #[case(IndexTransformer::landsat5(), Sensor::Landsat5, 7 + 80)]
    #[case(IndexTransformer::landsat8(), Sensor::Landsat8, 8 + 81)]
    fn appends_every_sensor_index(
        #[case] transformer: IndexTransformer,
        #[case] sensor: Sensor,
        #[case] n_columns: usize,
    ) {
        let image = scene(sensor, 3, 2);
        let table = transformer.fit_transform(&image).unwrap();
        assert_eq!(table.n_columns(), n_columns);
        assert_eq!(table.n_rows(), 6);
        let names = table.column_names().collect_vec();
        assert_eq!(&names[..sensor.band_count()], sensor.band_names());
        assert_eq!(names[sensor.band_count()], "ndvi");
        assert!(table
            .iter()
            .all(|(_, column)| column.iter().all(|value| value.is_finite())));
    }

    #[test_log::test]
    fn source_table_is_untouched() {
        let image = scene(Sensor::Landsat8, 2, 2);
        let before = image.table().clone();
        IndexTransformer::landsat8().transform(&image).unwrap();
        assert_eq!(image.table(), &before);
    }

    #[test]
    fn rejects_other_sensors() {
        let image = scene(Sensor::Landsat5, 2, 2);
        let error = IndexTransformer::landsat8().transform(&image).unwrap_err();
        assert!(matches!(
            error,
            FeatureRasterError::InvalidSensor {
                expected: "Landsat8",
                found: "Landsat5"
            }
        ));
        assert_eq!(image.table().n_columns(), 7);
    }

    #[test]
    fn missing_band_fails_whole_transform() {
        let mut image = scene(Sensor::Landsat5, 2, 2);
        let mut table = image.table().clone();
        table.remove("swir2").unwrap();
        image.set_table(table).unwrap();
        assert!(matches!(
            IndexTransformer::landsat5().transform(&image),
            Err(FeatureRasterError::MissingColumn(column)) if column == "swir2"
        ));
    }

    #[rstest]
    #[case("ndvi", 0.5)]
    #[case("ctvi", 1.)]
    #[case("evi", -0.5)]
    #[case("ndvic", -400. / 3.)]
    fn first_pixel_values(#[case] column: &str, #[case] expected: f64) {
        // pixel 0: blue 0, red 1, green 2, nir 3, swir1 4, swir2 5
        let image = scene(Sensor::Landsat5, 2, 2);
        let table = IndexTransformer::landsat5().transform(&image).unwrap();
        let value = table.column(column).unwrap()[0];
        assert!((value - expected).abs() < 1e-9, "{column}: {value}");
    }
}
