use core::fmt;
use std::{borrow::Cow, ops::Deref};

use ecow::EcoString;

/// An error that can occur during the conversion process.
///
/// Any error aborts the whole conversion. Output written before the failure
/// must be discarded by the caller.
pub struct Error(Box<ErrorKind>);

/// The structured cause of an [`Error`].
#[derive(Debug)]
pub enum ErrorKind {
    /// A recognized element lacks an attribute its template requires.
    MissingAttr {
        /// The tag name of the offending element.
        tag: EcoString,
        /// The name of the absent attribute.
        attr: &'static str,
    },
    /// The document has no `title` in its header region.
    MissingTitle,
    /// The document has no `body`.
    MissingBody,
    /// The body has no `main` element to become the entry routine.
    MissingEntry,
    /// An I/O failure while reading input or writing output.
    Io(std::io::Error),
    /// Just a message.
    Msg(Cow<'static, str>),
}

impl Error {
    /// Creates an error for a missing required attribute.
    pub fn missing_attr(tag: impl Into<EcoString>, attr: &'static str) -> Self {
        Error(Box::new(ErrorKind::MissingAttr {
            tag: tag.into(),
            attr,
        }))
    }

    /// Returns the structured cause.
    pub fn kind(&self) -> &ErrorKind {
        self.0.deref()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(kind))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.deref() {
            ErrorKind::MissingAttr { tag, attr } => {
                write!(f, "<{tag}> is missing required attribute `{attr}`")
            }
            ErrorKind::MissingTitle => write!(f, "document has no <title> in its <head>"),
            ErrorKind::MissingBody => write!(f, "document has no <body>"),
            ErrorKind::MissingEntry => write!(f, "document body has no <main> element"),
            ErrorKind::Io(e) => write!(f, "{e}"),
            ErrorKind::Msg(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0.deref() {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error(Box::new(ErrorKind::Io(e)))
    }
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error(Box::new(ErrorKind::Msg(s.into())))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error(Box::new(ErrorKind::Msg(s.into())))
    }
}

impl From<Cow<'static, str>> for Error {
    fn from(s: Cow<'static, str>) -> Self {
        Error(Box::new(ErrorKind::Msg(s)))
    }
}
