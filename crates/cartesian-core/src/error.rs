// File: crates/cartesian-core/src/error.rs
// Summary: Error type shared by chart mutation and export.

use crate::series::{SeriesId, SeriesType};

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("bar series has {fields} y field(s) but {names} display name(s)")]
    FieldNameMismatch { fields: usize, names: usize },
    #[error("no series with id {0}")]
    UnknownSeries(SeriesId),
    #[error("series {id} is not a {expected} series")]
    SeriesKind { id: SeriesId, expected: SeriesType },
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
