use crate::Span;
use std::fmt::{self, Debug, Display};

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;

/// Error that can occur when parsing TOML.
#[derive(Debug, Clone)]
pub struct Error {
    /// The error kind
    pub kind: ErrorKind,
    /// The span where the error occurs
    pub span: Span,
}

impl std::error::Error for Error {}

impl From<(ErrorKind, Span)> for Error {
    fn from((kind, span): (ErrorKind, Span)) -> Self {
        Self { kind, span }
    }
}

/// The kinds of error that can occur when parsing TOML.
#[derive(Clone, PartialEq)]
pub enum ErrorKind {
    /// EOF was reached while a value or delimiter was still expected.
    UnexpectedEof,

    /// The input is larger than the maximum supported size of 4GiB.
    FileTooLarge,

    /// Arrays or inline tables are nested deeper than the parser allows.
    RecursionLimit,

    /// A keys fragment could not be tokenized, or the dotted-separator rule
    /// was violated.
    IllFormedKeys,

    /// A scalar literal is malformed. The payload names the construct,
    /// e.g. `"basic strings"` or `"float"`.
    IllFormedValue(&'static str),

    /// A static array is missing its terminator or contains a stray token.
    IllFormedArray,

    /// A static array contains elements of differing kinds.
    MixedTypeArray {
        /// Kind of the first element
        expected: &'static str,
        /// Kind of the offending element
        found: &'static str,
    },

    /// An inline table violates the single-line or brace/comma rules.
    IllFormedInlineTable,

    /// A top-level line matches none of header, array header, or key-value.
    IllFormedToml,

    /// Dotted-key navigation traversed into a slot that is neither a table
    /// nor an array of tables.
    InvalidKey {
        /// The key segment that could not be traversed
        key: String,
    },

    /// A leaf key already exists where a fresh insertion was required.
    DuplicateKey {
        /// The duplicate key
        key: String,
    },

    /// An `[[x]]` header targeted a key bound to a statically defined array.
    StaticArrayNotAppendable {
        /// The targeted key
        key: String,
    },

    /// Value dispatch found no matching variant.
    NotImplemented,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnexpectedEof => "unexpected-eof",
            Self::FileTooLarge => "file-too-large",
            Self::RecursionLimit => "recursion-limit",
            Self::IllFormedKeys => "ill-formed-keys",
            Self::IllFormedValue(..) => "ill-formed-value",
            Self::IllFormedArray => "ill-formed-array",
            Self::MixedTypeArray { .. } => "mixed-type-array",
            Self::IllFormedInlineTable => "ill-formed-inline-table",
            Self::IllFormedToml => "ill-formed-toml",
            Self::InvalidKey { .. } => "invalid-key",
            Self::DuplicateKey { .. } => "duplicate-key",
            Self::StaticArrayNotAppendable { .. } => "static-array-not-appendable",
            Self::NotImplemented => "not-implemented",
        };
        f.write_str(text)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnexpectedEof => f.write_str("unexpected eof encountered"),
            ErrorKind::FileTooLarge => f.write_str("file is too large (maximum 4GiB)"),
            ErrorKind::RecursionLimit => f.write_str("maximum nesting depth exceeded"),
            ErrorKind::IllFormedKeys => f.write_str("ill-formed of keys"),
            ErrorKind::IllFormedValue(what) => {
                f.write_str("ill-formed of ")?;
                f.write_str(what)
            }
            ErrorKind::IllFormedArray => f.write_str("ill-formed of array"),
            ErrorKind::MixedTypeArray { .. } => f.write_str("mixed type array"),
            ErrorKind::IllFormedInlineTable => f.write_str("ill-formed of inline table"),
            ErrorKind::IllFormedToml => f.write_str("ill-formed of toml"),
            ErrorKind::InvalidKey { key } => {
                f.write_str("invalid key `")?;
                f.write_str(key)?;
                f.write_str("`")
            }
            ErrorKind::DuplicateKey { key } => {
                f.write_str("duplicated key `")?;
                f.write_str(key)?;
                f.write_str("`")
            }
            ErrorKind::StaticArrayNotAppendable { .. } => {
                f.write_str("ill-formed of array: statically defined array is not appendable")
            }
            ErrorKind::NotImplemented => f.write_str("not implemented"),
        }
    }
}

#[cfg(feature = "reporting")]
#[cfg_attr(docsrs, doc(cfg(feature = "reporting")))]
impl Error {
    /// Converts this [`Error`] into a [`codespan_reporting::diagnostic::Diagnostic`]
    pub fn to_diagnostic<FileId: Copy + PartialEq>(
        &self,
        fid: FileId,
    ) -> codespan_reporting::diagnostic::Diagnostic<FileId> {
        use codespan_reporting::diagnostic::{Diagnostic, Label};

        let diag = Diagnostic::error()
            .with_code(self.kind.to_string())
            .with_message(self.to_string());

        let label = match &self.kind {
            ErrorKind::DuplicateKey { .. } => {
                Label::primary(fid, self.span).with_message("duplicate key")
            }
            ErrorKind::InvalidKey { .. } => {
                Label::primary(fid, self.span).with_message("attempted to traverse a non-table")
            }
            ErrorKind::MixedTypeArray { expected, found } => Label::primary(fid, self.span)
                .with_message(format!("expected {expected}, found {found}")),
            ErrorKind::StaticArrayNotAppendable { .. } => {
                Label::primary(fid, self.span).with_message("array was defined statically")
            }
            ErrorKind::UnexpectedEof => {
                Label::primary(fid, self.span).with_message("eof reached here")
            }
            _ => Label::primary(fid, self.span),
        };
        diag.with_labels(vec![label])
    }
}
