pub mod backends;
pub mod file;
pub mod metadata;
pub mod table;

pub use backends::gdal_backend::GdalFile;
pub use file::RasterFile;
pub use metadata::{RasterProfile, SceneBounds, SceneMetadata};
pub use table::{Column, PixelTable};
