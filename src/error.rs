use thiserror::Error;

/// Failures surfaced by [`walk`](crate::walk) and the loosely-typed
/// argument boundary of [`walk_value`](crate::walk_value).
///
/// The argument variants indicate caller misuse and are raised before
/// any traversal starts; the remaining variants indicate a filesystem
/// failure, which aborts the walk as a whole.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("Start path must be specified as a string!")]
    StartPathNotString,

    #[error("Extensions must be specified as a single string or a list of strings!")]
    ExtensionsNotStringOrList,

    #[error("Extensions must be based as a list of strings!")]
    ExtensionNotString,

    /// The underlying filesystem error, carrying its own descriptive text.
    #[error("{0}")]
    Traversal(#[from] std::io::Error),

    /// A traversal failure that exposed no underlying cause.
    #[error("unspecified error")]
    Unspecified,
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        match err.into_io_error() {
            Some(io) => WalkError::Traversal(io),
            None => WalkError::Unspecified,
        }
    }
}

impl WalkError {
    /// True for the argument-validation variants, false for filesystem
    /// failures. Callers that want distinct handling for misuse versus
    /// environment problems can branch on this.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            WalkError::StartPathNotString
                | WalkError::ExtensionsNotStringOrList
                | WalkError::ExtensionNotString
        )
    }
}
