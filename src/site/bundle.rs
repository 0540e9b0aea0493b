//! Site bundle loading.
//!
//! A bundle is the fixed trio of assets under the site root. Loading never
//! fails as a whole: each asset records its own outcome so that checks which
//! depend on a missing asset can be skipped while the rest still run.

use crate::data::contract::{MARKUP_FILE, SCRIPT_FILE, STYLESHEET_FILE};
use crate::error::SiteError;
use crate::site::document::ParsedDocument;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One of the three required site assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The HTML document
    Markup,
    /// The stylesheet
    Stylesheet,
    /// The script file
    Script,
}

impl Asset {
    /// All assets in report order
    pub const ALL: [Asset; 3] = [Asset::Markup, Asset::Stylesheet, Asset::Script];

    /// Fixed file name of this asset under the site root
    pub fn file_name(&self) -> &'static str {
        match self {
            Asset::Markup => MARKUP_FILE,
            Asset::Stylesheet => STYLESHEET_FILE,
            Asset::Script => SCRIPT_FILE,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// An asset read from disk
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub asset: Asset,
    pub content: String,
    pub size_bytes: u64,
}

impl LoadedAsset {
    /// True when the asset holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// The site under validation
#[derive(Debug, Clone)]
pub struct SiteBundle {
    pub root: PathBuf,
    pub root_exists: bool,
    markup: Result<LoadedAsset, SiteError>,
    stylesheet: Result<LoadedAsset, SiteError>,
    script: Result<LoadedAsset, SiteError>,
}

impl SiteBundle {
    /// Read all assets under `root`
    pub fn load(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root_exists = root.is_dir();
        debug!(root = %root.display(), root_exists, "loading site bundle");

        SiteBundle {
            markup: read_asset(&root, Asset::Markup),
            stylesheet: read_asset(&root, Asset::Stylesheet),
            script: read_asset(&root, Asset::Script),
            root,
            root_exists,
        }
    }

    fn slot(&self, asset: Asset) -> &Result<LoadedAsset, SiteError> {
        match asset {
            Asset::Markup => &self.markup,
            Asset::Stylesheet => &self.stylesheet,
            Asset::Script => &self.script,
        }
    }

    /// The asset as read from disk, whether or not it has content
    pub fn file(&self, asset: Asset) -> Result<&LoadedAsset, SiteError> {
        self.slot(asset).as_ref().map_err(|e| e.clone())
    }

    /// The asset as a check fixture: present and non-blank
    pub fn asset(&self, asset: Asset) -> Result<&LoadedAsset, SiteError> {
        let loaded = self.file(asset)?;
        if loaded.is_blank() {
            return Err(SiteError::EmptyAsset {
                asset: asset.file_name().to_string(),
            });
        }
        Ok(loaded)
    }

    /// Stylesheet text
    pub fn stylesheet(&self) -> Result<&str, SiteError> {
        self.asset(Asset::Stylesheet).map(|a| a.content.as_str())
    }

    /// Script text
    pub fn script(&self) -> Result<&str, SiteError> {
        self.asset(Asset::Script).map(|a| a.content.as_str())
    }

    /// Parse the markup asset into a fresh document
    pub fn document(&self) -> Result<ParsedDocument, SiteError> {
        self.asset(Asset::Markup)
            .map(|a| ParsedDocument::parse(&a.content))
    }
}

fn read_asset(root: &Path, asset: Asset) -> Result<LoadedAsset, SiteError> {
    let path = root.join(asset.file_name());
    if !path.is_file() {
        debug!(path = %path.display(), "asset not found");
        return Err(SiteError::MissingAsset {
            asset: asset.file_name().to_string(),
        });
    }

    let bytes = fs::read(&path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to read asset");
        SiteError::Io {
            context: asset.file_name().to_string(),
            message: e.to_string(),
        }
    })?;
    let size_bytes = bytes.len() as u64;

    let content = String::from_utf8(bytes).map_err(|e| {
        warn!(path = %path.display(), error = %e, "asset is not valid UTF-8");
        SiteError::Io {
            context: asset.file_name().to_string(),
            message: format!("invalid UTF-8: {}", e),
        }
    })?;

    Ok(LoadedAsset {
        asset,
        content,
        size_bytes,
    })
}
