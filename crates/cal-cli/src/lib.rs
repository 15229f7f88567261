pub mod commands;
pub mod trace_init;

use std::io;

use cal_core::arabic_cal::TableError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
