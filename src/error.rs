use thiserror::Error;

macro_rules! protocol_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Protocol {
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Protocol {
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while loading
/// rename tables, planning rewrites, and driving a batch. Each variant provides
/// specific context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Load-time Errors
/// - [`Error::MappingParse`] - Malformed mapping-file line
/// - [`Error::MappingConflict`] - Two merged entries disagree on a class rename
///
/// Load-time errors are fatal: they abort the batch before any unit is
/// processed.
///
/// ## Per-unit Errors
/// - [`Error::AccessorTarget`] - An accessor-style method with no determinable
///   target field or method
///
/// ## I/O and Collaborator Errors
/// - [`Error::Protocol`] - Malformed batch line protocol input
/// - [`Error::Resolver`] - The external front-end failed or produced an
///   unreadable payload
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Json`] - Malformed JSON in the resolver payload
///
/// Note that the unqualified-shadow hazard is deliberately *not* an [`Error`]:
/// the rewrite still completes and is emitted, and the hazard travels as a
/// per-unit [`crate::planner::Diagnostic`] instead.
///
/// # Examples
///
/// ```rust,no_run
/// use mixremap::{mapping, Error};
/// use std::path::Path;
///
/// match mapping::load(Path::new("mappings.srg"), false) {
///     Ok(table) => {
///         println!("Loaded {} class mappings", table.len());
///     }
///     Err(Error::MappingParse { file, line }) => {
///         eprintln!("Failed to parse line {} in {}", line, file);
///     }
///     Err(Error::MappingConflict { left, right }) => {
///         eprintln!("Conflicting mappings: {} and {}", left, right);
///     }
///     Err(e) => {
///         eprintln!("Other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Load-time errors
    /// A mapping-file line could not be parsed.
    ///
    /// Raised for a line with fewer than two space-separated fields, more
    /// than four, or one containing a `;` anywhere. Carries the 1-based line
    /// number and a label for the offending source. Fatal for the whole load.
    #[error("Failed to parse line {line} in {file}")]
    MappingParse {
        /// Label of the mapping source (usually the file path)
        file: String,
        /// 1-based line number of the malformed line
        line: usize,
    },

    /// Two merged mapping entries disagree on a class rename.
    ///
    /// Raised when neither entry is an identity pair compatible with the
    /// other. Both rename pairs are named in `old -> new` form.
    #[error("Conflicting mappings: {left} and {right}")]
    MappingConflict {
        /// The first rename pair, formatted `old -> new`
        left: String,
        /// The second rename pair, formatted `old -> new`
        right: String,
    },

    // Per-unit errors
    /// An accessor-style method has no determinable target.
    ///
    /// The method carries an accessor/invoker annotation but gives no
    /// explicit target string and its name matches none of the recognized
    /// prefixes. This is a configuration error in the annotated source, not
    /// a recoverable condition; the unit is aborted and the batch fails.
    #[error("Cannot determine accessor target for {method}")]
    AccessorTarget {
        /// Name of the annotated method
        method: String,
    },

    // I/O and collaborator errors
    /// The batch line protocol input was malformed.
    ///
    /// Raised for a missing or non-numeric count line, or truncated input
    /// where further lines were expected.
    #[error("Protocol - {message}")]
    Protocol {
        /// Description of the protocol violation
        message: String,
    },

    /// The external front-end failed.
    ///
    /// Covers a resolver process that could not be spawned, exited with a
    /// failure status, or produced a payload that does not describe the
    /// staged units.
    #[error("Resolver - {message}")]
    Resolver {
        /// Description of the resolver failure
        message: String,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading mapping files,
    /// staging units, or talking to the front-end process.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Malformed JSON in the resolver payload.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// `Result<T, Error>`
///
/// Standard result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
