use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(
        "cell ({row}, {column}) is outside the {row_count}x{column_count} table grid"
    )]
    CellOutOfRange {
        row: usize,
        column: usize,
        row_count: usize,
        column_count: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
