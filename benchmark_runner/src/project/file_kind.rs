//!
//! The documentation file kind.
//!

use std::path::Path;

///
/// The documentation file kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A markdown page.
    Markdown,
    /// A raster or vector image.
    Image,
    /// A stylesheet.
    Stylesheet,
    /// A script.
    Script,
}

impl FileKind {
    /// The image extensions, matched case-insensitively.
    pub const IMAGE_EXTENSIONS: [&'static str; 5] = ["png", "jpg", "jpeg", "gif", "svg"];

    ///
    /// Classifies the file by its name. Returns `None` for other files.
    ///
    /// Only images are matched case-insensitively.
    ///
    pub fn classify(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension {
            "md" => Some(Self::Markdown),
            "css" => Some(Self::Stylesheet),
            "js" => Some(Self::Script),
            extension
                if Self::IMAGE_EXTENSIONS.contains(&extension.to_lowercase().as_str()) =>
            {
                Some(Self::Image)
            }
            _ => None,
        }
    }
}
