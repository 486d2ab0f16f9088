//! Error types for ccx-post

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostError>;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("marker {0:?} not found")]
    MarkerNotFound(&'static str),

    #[error("format error: {0}")]
    Format(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
