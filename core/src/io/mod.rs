//! Formats for exporting/importing masks.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub mod pages;
pub mod rle;

use crate::mask::MaskArray;
use crate::pool::SharedRowPool;
pub use pages::{PagesError, PagesResult};
pub use rle::{Rle, RleError, RleResult};

/// Format that a mask can be exported to or imported from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MaskFormat {
    /// Two-state run-length encoded text.
    Rle,
    /// Binary page format with a symbol table.
    Pages,
}
impl fmt::Display for MaskFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskFormat::Rle => write!(f, "RLE"),
            MaskFormat::Pages => write!(f, "pages"),
        }
    }
}
impl FromStr for MaskFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rle" => Ok(MaskFormat::Rle),
            "pages" | "mska" => Ok(MaskFormat::Pages),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}
impl MaskFormat {
    /// All supported formats, in the order `import_mask()` tries them.
    pub const ALL: &'static [MaskFormat] = &[MaskFormat::Pages, MaskFormat::Rle];

    /// Returns the usual file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            MaskFormat::Rle => "rle",
            MaskFormat::Pages => "mska",
        }
    }

    /// Guesses the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }
}

/// Error returned when parsing an unknown format name.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown mask format {0:?}; expected \"rle\" or \"pages\"")]
pub struct UnknownFormat(pub String);

/// Error produced during mask export/import.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum MaskFormatError {
    #[error("RLE error: {0}")]
    RleError(#[from] RleError),
    #[error("pages error: {0}")]
    PagesError(#[from] PagesError),
}

/// Exports a mask to bytes using a particular format.
pub fn export_mask(mask: &MaskArray, format: MaskFormat) -> Result<Vec<u8>, MaskFormatError> {
    match format {
        MaskFormat::Rle => Ok(mask.to_rle_string().into_bytes()),
        MaskFormat::Pages => mask.to_pages().map_err(Into::into),
    }
}

/// Imports a mask from bytes using a particular format and row pool.
pub fn import_mask_as(
    data: &[u8],
    format: MaskFormat,
    pool: SharedRowPool,
) -> Result<MaskArray, MaskFormatError> {
    match format {
        MaskFormat::Rle => {
            let s = std::str::from_utf8(data).map_err(|_| RleError::NonAscii)?;
            let rle: Rle = s.parse()?;
            MaskArray::from_rle_with_pool(&rle, pool).map_err(Into::into)
        }
        MaskFormat::Pages => MaskArray::from_pages_with_pool(data, pool).map_err(Into::into),
    }
}

/// Imports a mask from bytes using the first format that works, returning the
/// error resulting from each attempt if none succeeded.
pub fn import_mask(data: &[u8]) -> Result<MaskArray, Vec<MaskFormatError>> {
    import_mask_with_pool(data, SharedRowPool::new())
}

/// Same as `import_mask()`, but interns rows in an existing pool.
pub fn import_mask_with_pool(
    data: &[u8],
    pool: SharedRowPool,
) -> Result<MaskArray, Vec<MaskFormatError>> {
    let mut errors = vec![];
    for &format in MaskFormat::ALL {
        match import_mask_as(data, format, pool.clone()) {
            Ok(mask) => return Ok(mask),
            Err(e) => errors.push(e),
        }
    }
    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_format_names() {
        assert_eq!(Ok(MaskFormat::Rle), "RLE".parse());
        assert_eq!(Ok(MaskFormat::Pages), "pages".parse());
        assert!("gds".parse::<MaskFormat>().is_err());
        assert_eq!(Some(MaskFormat::Rle), MaskFormat::from_path("a/b/glider.rle"));
        assert_eq!(Some(MaskFormat::Pages), MaskFormat::from_path("layer.MSKA"));
        assert_eq!(None, MaskFormat::from_path("layer.gds"));
        assert_eq!(None, MaskFormat::from_path("layer"));
        for &format in MaskFormat::ALL {
            assert_eq!(Ok(format), format.to_string().parse());
        }
    }

    #[test]
    fn test_import_either_format() {
        let mask = MaskArray::from_fn(6, 4, |pos| (pos.x + pos.y) % 3 == 0);
        for &format in MaskFormat::ALL {
            let bytes = export_mask(&mask, format).unwrap();
            assert_eq!(mask, import_mask(&bytes).unwrap());
        }
    }

    #[test]
    fn test_import_reports_every_error() {
        let errors = import_mask(b"#C only a comment\n").unwrap_err();
        assert_eq!(
            vec![
                MaskFormatError::PagesError(PagesError::BadMagic),
                MaskFormatError::RleError(RleError::MissingHeader),
            ],
            errors,
        );
        let errors = import_mask(&[0xFF, 0xFE]).unwrap_err();
        assert_eq!(
            MaskFormatError::RleError(RleError::NonAscii),
            errors[1],
        );
    }
}
