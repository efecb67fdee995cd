use gdal::{
    raster::{rasterize as gdal_rasterize, Buffer},
    vector::{Geometry as GdalGeometry, ToGdal},
    Dataset as GdalDataset, DriverManager,
};
use geo::{Geometry, GeometryCollection};
use itertools::Itertools;
use log::debug;
use ndarray::Array2;

use crate::{components::RasterProfile, errors::Result};

/// Burns `(geometry, value)` pairs onto the pixel grid of `profile` with
/// GDAL's rasterizer, in an in-memory dataset.
///
/// A pixel takes the value of a geometry when its centre is inside it, GDAL
/// deciding which side of a shared edge a centre lying on it belongs to.
/// Later shapes overwrite earlier ones, untouched pixels keep `fill`. The
/// grid is indexed `[row, col]`.
pub fn rasterize<'a>(
    shapes: impl IntoIterator<Item = (&'a Geometry<f64>, f64)>,
    fill: f64,
    profile: &RasterProfile,
) -> Result<Array2<f64>> {
    profile.inverse_affine()?;
    let (width, height) = (profile.width, profile.height);
    let (geometries, values): (Vec<_>, Vec<_>) = shapes
        .into_iter()
        .map(|(geometry, value)| Ok((to_gdal_geometry(geometry)?, value)))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unzip();
    if geometries.is_empty() || profile.n_pixels() == 0 {
        return Ok(Array2::from_elem((height, width), fill));
    }

    let mut dataset = memory_grid(profile, fill)?;
    gdal_rasterize(&mut dataset, &[1], &geometries, &values, None)?;
    debug!("rasterized {} shapes on a {width}x{height} grid", geometries.len());

    let buffer = dataset
        .rasterband(1)?
        .read_as::<f64>((0, 0), (width, height), (width, height), None)?;
    Ok(Array2::from_shape_vec((height, width), buffer.data().to_vec())?)
}

/// Single `f64` band MEM dataset on the grid of `profile`, set to `fill`.
fn memory_grid(profile: &RasterProfile, fill: f64) -> Result<GdalDataset> {
    let shape = (profile.width, profile.height);
    let driver = DriverManager::get_driver_by_name("MEM")?;
    let mut dataset = driver.create_with_band_type::<f64, _>("", shape.0, shape.1, 1)?;
    dataset.set_geo_transform(&profile.transform)?;
    let mut buffer = Buffer::new(shape, vec![fill; profile.n_pixels()]);
    dataset
        .rasterband(1)?
        .write((0, 0), shape, &mut buffer)?;
    Ok(dataset)
}

/// GDAL has no rectangle or triangle type, those go through as polygons.
fn to_gdal_geometry(geometry: &Geometry<f64>) -> Result<GdalGeometry> {
    Ok(as_polygons(geometry).to_gdal()?)
}

fn as_polygons(geometry: &Geometry<f64>) -> Geometry<f64> {
    match geometry {
        Geometry::Rect(rect) => rect.to_polygon().into(),
        Geometry::Triangle(triangle) => triangle.to_polygon().into(),
        Geometry::GeometryCollection(collection) => {
            GeometryCollection(collection.iter().map(as_polygons).collect_vec()).into()
        }
        other => other.clone(),
    }
}
