//! Holder for the locally selected reference image.
//!
//! Only the file header is read here. The bytes stay on disk and the UI
//! loads them straight from the path, so nothing is copied or uploaded.

use crate::{CoreError, CoreResult};

use std::{
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use image::ImageReader;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Display-only handle to a local image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    id: Uuid,
    path: PathBuf,
    file_name: String,
    width: u32,
    height: u32,
}

impl ImageReference {
    /// Unique per selection, even when the same file is picked twice.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Local path of the image.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Pixel dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Holds the current selection, if any.
#[derive(Debug, Default)]
pub struct ImageSource {
    current: Option<ImageReference>,
}

impl ImageSource {
    /// An empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection.
    pub fn current(&self) -> Option<&ImageReference> {
        self.current.as_ref()
    }

    /// Whether an image has been selected.
    pub fn is_selected(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the selection with the image at `path`.
    ///
    /// On error the previous selection is kept.
    #[track_caller]
    #[instrument(skip(self, path), fields(path = ?path.as_ref()))]
    pub fn select<P: AsRef<Path>>(&mut self, path: P) -> CoreResult<&ImageReference> {
        let reference = probe(path.as_ref())?;

        if let Some(previous) = self.current.take() {
            debug!(previous = %previous.id, "Discarding previous image reference");
        }

        info!(
            image_id = %reference.id,
            width = reference.width,
            height = reference.height,
            "Image selected"
        );

        Ok(self.current.insert(reference))
    }
}

#[track_caller]
fn probe(path: &Path) -> CoreResult<ImageReference> {
    if !path.is_file() {
        return Err(CoreError::ImageNotFound {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let unreadable = |reason: String| CoreError::ImageUnreadable {
        path: path.to_path_buf(),
        reason,
        location: ErrorLocation::from(Location::caller()),
    };

    let reader = ImageReader::open(path)
        .map_err(|e| unreadable(format!("Failed to open: {}", e)))?
        .with_guessed_format()
        .map_err(|e| unreadable(format!("Failed to sniff format: {}", e)))?;

    if reader.format().is_none() {
        return Err(unreadable("Unrecognised image format".to_string()));
    }

    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| unreadable(format!("Failed to read dimensions: {}", e)))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ImageReference {
        id: Uuid::new_v4(),
        path: path.to_path_buf(),
        file_name,
        width,
        height,
    })
}
