use pn_core::PnError;

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] PnError),
}
