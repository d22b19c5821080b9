use std::io;

/// Why an open-file operation did not produce the file's bytes.
///
/// The user dismissing the dialog is not an error; it is reported as
/// `Ok(None)` in a [`FileResult`].
#[derive(Debug, thiserror::Error)]
pub enum FileOpenerError {
    #[error("the file dialog did not yield a usable file")]
    FileNotFound,
    #[error("not allowed to read the selected file")]
    NotAllowedToRead,
    #[error("could not read the selected file: {0}")]
    CouldNotRead(#[source] io::Error),
    /// The opener was asked to present while it was already presenting.
    #[error("a file dialog is already being presented")]
    AlreadyPresenting,
}

/// The outcome of one open-file operation.
///
/// `Ok(Some(bytes))` when a file was read, `Ok(None)` when the user cancelled.
pub type FileResult = Result<Option<Vec<u8>>, FileOpenerError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn could_not_read_keeps_the_cause() {
        let err = FileOpenerError::CouldNotRead(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let source = err.source().expect("cause should be preserved");
        assert_eq!(source.to_string(), "denied");
        assert_eq!(err.to_string(), "could not read the selected file: denied");
    }

    #[test]
    fn unit_variants_have_no_source() {
        assert!(FileOpenerError::FileNotFound.source().is_none());
        assert!(FileOpenerError::NotAllowedToRead.source().is_none());
        assert!(FileOpenerError::AlreadyPresenting.source().is_none());
    }
}
