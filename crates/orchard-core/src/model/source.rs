use std::path::PathBuf;

use crate::error::ModelLoadError;

/// A model file, either hosted or on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Url(String),
    Path(PathBuf),
}

impl Location {
    /// `http://` and `https://` strings are URLs; anything else is a path.
    pub fn parse(location: &str) -> Self {
        if is_url(location) {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }

    /// Resolve `file` against a base URL or directory.
    pub fn join(base: &str, file: &str) -> Self {
        if is_url(base) {
            if base.ends_with('/') {
                Self::Url(format!("{base}{file}"))
            } else {
                Self::Url(format!("{base}/{file}"))
            }
        } else {
            Self::Path(PathBuf::from(base).join(file))
        }
    }

    /// Read the whole file. Blocks until the transfer completes; no timeout.
    pub fn fetch(&self) -> Result<Vec<u8>, ModelLoadError> {
        match self {
            Self::Url(url) => {
                tracing::debug!("Fetching {url}");
                let response =
                    reqwest::blocking::get(url).map_err(|source| ModelLoadError::Fetch {
                        location: url.clone(),
                        source,
                    })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(ModelLoadError::Http {
                        location: url.clone(),
                        status: status.as_u16(),
                    });
                }

                let bytes = response.bytes().map_err(|source| ModelLoadError::Fetch {
                    location: url.clone(),
                    source,
                })?;
                tracing::debug!("Fetched {} bytes from {url}", bytes.len());
                Ok(bytes.to_vec())
            }
            Self::Path(path) => std::fs::read(path).map_err(|source| ModelLoadError::Read {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// The two files a model is loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelSource {
    pub model: Location,
    pub metadata: Location,
}

impl ModelSource {
    pub fn from_base(base: &str, model_file: &str, metadata_file: &str) -> Self {
        Self {
            model: Location::join(base, model_file),
            metadata: Location::join(base, metadata_file),
        }
    }
}
