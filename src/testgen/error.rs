use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("cannot create directory {}: {source}", .path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("error opening {} for writing: {source}; does the directory exist?", .path.display())]
  Create {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("error writing {}: {source}", .path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl Error {
  /// The file or directory the error is about.
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::CreateDir { path, .. } | Self::Create { path, .. } | Self::Write { path, .. } => path,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
