//! CV download: copies the static PDF into the user's download directory

use crate::content::portfolio::CV_FILE_NAME;
use directories::UserDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CvError {
    #[error("CV not found at {0}")]
    NotFound(PathBuf),
    #[error("no download directory available")]
    NoDownloadDir,
    #[error("failed to copy CV: {0}")]
    Io(#[from] io::Error),
}

/// The platform download directory
pub fn default_download_dir() -> Result<PathBuf, CvError> {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .ok_or(CvError::NoDownloadDir)
}

/// Copy the CV into `target_dir`, creating it if needed. Returns the written path.
pub fn export_cv(source: &Path, target_dir: &Path) -> Result<PathBuf, CvError> {
    if !source.is_file() {
        return Err(CvError::NotFound(source.to_path_buf()));
    }

    fs::create_dir_all(target_dir)?;
    let file_name = source
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CV_FILE_NAME));
    let target = target_dir.join(file_name);
    fs::copy(source, &target)?;

    tracing::info!("exported CV to {}", target.display());
    Ok(target)
}
