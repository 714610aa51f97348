use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("cell ({column}, {row}) is outside of the {columns}x{rows} grid")]
    OutOfBounds {
        column: isize,
        row: isize,
        columns: usize,
        rows: usize,
    },

    #[error("frame rate must be at least 1, got {0}")]
    InvalidFrameRate(u32),

    #[error("window width {width} is below the minimum of {min}")]
    WindowTooNarrow { width: u32, min: u32 },

    #[error("window height {height} is below the minimum of {min}")]
    WindowTooShort { height: u32, min: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
