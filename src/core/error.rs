use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarageError {
    #[error("Invalid dimensions: {levels} levels x {rows_per_level} rows x {spots_per_row} spots overflows the spot count")]
    InvalidDimensions {
        levels: usize,
        rows_per_level: usize,
        spots_per_row: usize,
    },

    #[error("Irregular layout: {0}")]
    IrregularLayout(String),

    #[error("Spot not found: {0}")]
    SpotNotFound(usize),

    #[error("Unknown category name: {0}")]
    UnknownCategory(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GarageError>;
