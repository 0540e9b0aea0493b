//! Site fixtures: the on-disk bundle and the document parsed from it.

pub mod bundle;
pub mod document;

pub use bundle::{Asset, LoadedAsset, SiteBundle};
pub use document::ParsedDocument;
