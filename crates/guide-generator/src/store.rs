/// One JSON file per guide slug under the data directory.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use guide_core::guide::SlugRegistry;
use guide_core::model::Guide;
use tracing::{debug, info, warn};

use crate::error::AppError;

pub struct GuideStore {
    root: PathBuf,
}

impl GuideStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| AppError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn path_for(&self, slug: &str) -> Result<PathBuf, AppError> {
        let is_component = !slug.is_empty()
            && slug != "."
            && !slug.contains("..")
            && !slug.contains(['/', '\\'])
            && Path::new(slug).components().count() == 1;
        if !is_component {
            return Err(AppError::InvalidSlug(slug.to_string()));
        }
        Ok(self.root.join(format!("{slug}.json")))
    }

    /// Write `guide` unless a file for its slug already exists.
    ///
    /// The document goes to a temp file first and is then hard-linked into place, which
    /// fails instead of replacing a file that appeared in the meantime. Returns `false`
    /// when the guide was skipped.
    pub fn save(&self, guide: &Guide) -> Result<bool, AppError> {
        let slug = guide.slug();
        let path = self.path_for(&slug)?;
        if path.exists() {
            info!(slug = %slug, "guide already exists, skipping");
            return Ok(false);
        }

        let json = guide.to_json()?;
        let temp_path = path.with_extension("json.tmp");
        let linked = write_file(&temp_path, &json).and_then(|()| {
            match fs::hard_link(&temp_path, &path) {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
                Err(e) => Err(AppError::io(&path, e)),
            }
        });
        if let Err(e) = fs::remove_file(&temp_path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %temp_path.display(), error = %e, "failed to remove temp file");
            }
        }

        let saved = linked?;
        if saved {
            info!(path = %path.display(), "guide saved");
        } else {
            info!(slug = %slug, "guide appeared concurrently, skipping");
        }
        Ok(saved)
    }
}

impl SlugRegistry for GuideStore {
    fn contains(&self, slug: &str) -> bool {
        let exists = self.path_for(slug).map(|p| p.exists()).unwrap_or(false);
        debug!(slug, exists, "checked slug");
        exists
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(|e| AppError::io(path, e))
}
