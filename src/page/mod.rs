// SPDX-License-Identifier: MPL-2.0
//! Loading of portfolio pages.
//!
//! A [`Page`] is a parsed [`PageManifest`] together with the directory it was
//! read from, so relative image sources resolve next to the manifest.

pub mod manifest;

pub use manifest::{NavLink, NavbarMarkup, OverlayMarkup, PageManifest, TriggerMarkup};

use crate::error::{PageError, Result};
use crate::preview::{Overlay, Trigger, TriggerRegistry};
use std::fs;
use std::path::{Path, PathBuf};

/// Where an image source points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// No source at all; the image element is cleared.
    Empty,
    /// A file on disk, resolved against the page directory.
    Local(PathBuf),
    /// A URL the app cannot decode itself.
    Remote(String),
}

impl ImageSource {
    /// Returns the string handed to the system opener.
    #[must_use]
    pub fn as_open_target(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Local(path) => Some(path.to_string_lossy().into_owned()),
            Self::Remote(url) => Some(url.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    manifest: PageManifest,
    base_dir: PathBuf,
    source: Option<PathBuf>,
}

impl Page {
    /// Reads and validates the manifest at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| PageError::Unreadable(e.to_string()))?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let mut page = Self::parse(&content, base_dir)?;
        page.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            triggers = page.manifest.triggers.len(),
            projects = page.manifest.projects.len(),
            "page loaded"
        );
        Ok(page)
    }

    /// Parses manifest text. Relative image sources resolve against `base_dir`.
    pub fn parse(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let manifest: PageManifest =
            toml::from_str(content).map_err(|e| PageError::Malformed(e.to_string()))?;
        Self::from_manifest(manifest, base_dir)
    }

    /// Wraps an already built manifest after validating it.
    pub fn from_manifest(manifest: PageManifest, base_dir: impl Into<PathBuf>) -> Result<Self> {
        validate(&manifest)?;
        Ok(Self {
            manifest,
            base_dir: base_dir.into(),
            source: None,
        })
    }

    #[must_use]
    pub fn manifest(&self) -> &PageManifest {
        &self.manifest
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.manifest.title
    }

    /// Path of the manifest file, if the page was loaded from disk.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Binds every trigger of the page, in document order.
    #[must_use]
    pub fn triggers(&self) -> Vec<Trigger> {
        self.manifest
            .triggers
            .iter()
            .enumerate()
            .map(|(index, markup)| markup.to_trigger(index))
            .collect()
    }

    /// Builds the trigger registry for this page.
    #[must_use]
    pub fn registry(&self) -> TriggerRegistry {
        let mut registry = TriggerRegistry::default();
        registry.bind(self.triggers());
        registry
    }

    /// The overlay root, if the page declares one.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay> {
        self.manifest
            .overlay
            .as_ref()
            .map(|markup| Overlay::new(markup.parts))
    }

    /// Close marker ids declared on the overlay.
    #[must_use]
    pub fn close_markers(&self) -> &[String] {
        self.manifest
            .overlay
            .as_ref()
            .map(|markup| markup.close_markers.as_slice())
            .unwrap_or_default()
    }

    /// Triggers not rendered on any project card, in document order.
    #[must_use]
    pub fn loose_triggers(&self) -> Vec<usize> {
        let on_cards: Vec<usize> = self
            .manifest
            .projects
            .iter()
            .flat_map(|project| project.previews.iter().copied())
            .collect();
        (0..self.manifest.triggers.len())
            .filter(|index| !on_cards.contains(index))
            .collect()
    }

    /// Resolves an image source attribute.
    #[must_use]
    pub fn resolve_image(&self, src: &str) -> ImageSource {
        let src = src.trim();
        if src.is_empty() {
            return ImageSource::Empty;
        }
        if is_remote(src) {
            return ImageSource::Remote(src.to_string());
        }
        let path = Path::new(src);
        if path.is_absolute() {
            ImageSource::Local(path.to_path_buf())
        } else {
            ImageSource::Local(self.base_dir.join(path))
        }
    }
}

fn is_remote(src: &str) -> bool {
    ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| src.starts_with(scheme))
}

fn validate(manifest: &PageManifest) -> std::result::Result<(), PageError> {
    let count = manifest.triggers.len();
    for project in &manifest.projects {
        if let Some(&index) = project.previews.iter().find(|index| **index >= count) {
            return Err(PageError::DanglingPreview {
                project: project.title.clone(),
                index,
            });
        }
    }
    Ok(())
}
