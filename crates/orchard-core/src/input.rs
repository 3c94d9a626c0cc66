use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat};

use crate::consts::{IMAGE_MEDIA_PREFIX, UNKNOWN_MEDIA_TYPE};
use crate::error::InputError;

/// A file picked from the dialog or dropped on the window, not yet decoded.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    /// `media_type` may be empty, in which case it is guessed from `name`.
    pub fn new(name: impl Into<String>, media_type: &str, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let media_type = if media_type.is_empty() {
            guess_media_type(Path::new(&name))
        } else {
            media_type.to_string()
        };
        Self {
            name,
            media_type,
            bytes: bytes.into(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let bytes = std::fs::read(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            media_type: guess_media_type(path),
            bytes: bytes.into(),
        })
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with(IMAGE_MEDIA_PREFIX)
    }

    /// Reject anything that does not declare an `image/` media type.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.is_image() {
            Ok(())
        } else {
            Err(InputError::NotAnImage {
                name: self.name.clone(),
                media_type: self.media_type.clone(),
            })
        }
    }

    /// Validate and decode into a displayable preview.
    pub fn decode(&self) -> Result<PreviewImage, InputError> {
        self.validate()?;
        let image = image::load_from_memory(&self.bytes).map_err(|source| InputError::Decode {
            name: self.name.clone(),
            source,
        })?;
        Ok(PreviewImage {
            name: self.name.clone(),
            image: Arc::new(image),
        })
    }
}

/// Media type implied by the file extension.
pub fn guess_media_type(path: &Path) -> String {
    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MEDIA_TYPE.to_string())
}

/// Decoded image currently shown as the preview.
#[derive(Clone, Debug)]
pub struct PreviewImage {
    pub name: String,
    pub image: Arc<DynamicImage>,
}

impl PreviewImage {
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image: Arc::new(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Drag-over highlight for the upload area.
///
/// `enter` sets the highlight; `leave` and `dropped` clear it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZone {
    drag_over: bool,
}

impl DropZone {
    pub fn enter(&mut self) {
        self.drag_over = true;
    }

    pub fn leave(&mut self) {
        self.drag_over = false;
    }

    pub fn dropped(&mut self) {
        self.drag_over = false;
    }

    /// Follow the hover state reported by the windowing layer each frame.
    pub fn track_hover(&mut self, hovering: bool) {
        match (self.drag_over, hovering) {
            (false, true) => self.enter(),
            (true, false) => self.leave(),
            _ => {}
        }
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }
}
