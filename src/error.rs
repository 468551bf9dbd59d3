// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Page(PageError),
    Open(String),
}

/// Specific failures while reading a page manifest.
/// Used to provide user-friendly, localized messages in the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// The manifest file could not be read.
    Unreadable(String),

    /// The manifest is not valid TOML or does not match the page schema.
    Malformed(String),

    /// A project card references a trigger index that does not exist.
    DanglingPreview { project: String, index: usize },
}

impl PageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PageError::Unreadable(_) => "error-page-unreadable",
            PageError::Malformed(_) => "error-page-malformed",
            PageError::DanglingPreview { .. } => "error-page-dangling-preview",
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::Unreadable(msg) => write!(f, "Page unreadable: {}", msg),
            PageError::Malformed(msg) => write!(f, "Malformed page: {}", msg),
            PageError::DanglingPreview { project, index } => write!(
                f,
                "Project \"{}\" references missing preview {}",
                project, index
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Page(e) => write!(f, "Page Error: {}", e),
            Error::Open(e) => write!(f, "Open Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PageError> for Error {
    fn from(err: PageError) -> Self {
        Error::Page(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn page_error_wraps_into_error() {
        let err: Error = PageError::Malformed("expected table".into()).into();
        assert!(matches!(err, Error::Page(PageError::Malformed(_))));
        assert!(format!("{}", err).contains("expected table"));
    }

    #[test]
    fn dangling_preview_names_project_and_index() {
        let err = PageError::DanglingPreview {
            project: "Essay".into(),
            index: 7,
        };
        let text = err.to_string();
        assert!(text.contains("Essay"));
        assert!(text.contains('7'));
    }

    #[test]
    fn page_error_i18n_keys() {
        assert_eq!(
            PageError::Unreadable(String::new()).i18n_key(),
            "error-page-unreadable"
        );
        assert_eq!(
            PageError::Malformed(String::new()).i18n_key(),
            "error-page-malformed"
        );
        assert_eq!(
            PageError::DanglingPreview {
                project: String::new(),
                index: 0
            }
            .i18n_key(),
            "error-page-dangling-preview"
        );
    }
}
