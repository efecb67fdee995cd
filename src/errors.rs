use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, FeatureRasterError>;

#[derive(thiserror::Error, Debug)]
pub enum FeatureRasterError {
    #[error(transparent)]
    GdalError(#[from] gdal::errors::GdalError),
    #[error(transparent)]
    NdarrayError(#[from] ndarray::ShapeError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("File {} does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("{sensor} images have {expected} bands, file has {found}")]
    BandCountMismatch {
        sensor: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Column {column} has {found} rows, table has {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("Expected {expected} column names, got {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("Column name {0} is given more than once")]
    DuplicateColumn(String),
    #[error("Table has {found} rows, scene grid has {expected} pixels")]
    TableShape { expected: usize, found: usize },
    #[error("Column {0} is not in the table")]
    MissingColumn(String),
    #[error("There is no coverage column in the table, burn a coverage layer first")]
    MissingCoverage,
    #[error("Invalid coverage geometry: {0}")]
    InvalidGeometry(String),
    #[error("Image must be a {expected} image, got a {found} image")]
    InvalidSensor {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Geo transform of the scene is not invertible")]
    NonInvertibleTransform,
}
