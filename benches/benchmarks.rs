use criterion::{criterion_group, criterion_main, Criterion};
use feature_raster::{
    components::RasterProfile, IndexTransformer, PixelTable, SceneMetadata, Sensor, SensorImage,
};
use ndarray::Array1;

const SIZE: (usize, usize) = (512, 512);

fn synthetic_scene(sensor: Sensor) -> SensorImage {
    let (width, height) = SIZE;
    let n_pixels = width * height;
    let table = PixelTable::from_columns((0..sensor.band_count()).map(|band| {
        (
            format!("BAND_{}", band + 1),
            Array1::from_iter(
                (0..n_pixels).map(|pixel| ((pixel * (band + 3)) % 10_000) as f64 / 10_000.),
            ),
        )
    }))
    .unwrap();
    let profile = RasterProfile {
        driver: "GTiff".into(),
        width,
        height,
        count: sensor.band_count(),
        transform: [500_000., 30., 0., 4_200_000., 0., -30.],
        crs: String::new(),
        nodata: None,
    };
    let metadata = SceneMetadata::new(profile, vec!["UInt16".into(); sensor.band_count()]);
    SensorImage::new(sensor, table, metadata).unwrap()
}

fn bench_landsat8_transform(c: &mut Criterion) {
    let image = synthetic_scene(Sensor::Landsat8);
    let transformer = IndexTransformer::landsat8();
    c.bench_function("landsat8_transform", |b| {
        b.iter(|| transformer.transform(&image).unwrap())
    });
}

criterion_group!(benches, bench_landsat8_transform);
criterion_main!(benches);
