use tracing::warn;

use crate::{
    error::FileOpenerError,
    file::FileLocation,
    scope::{AccessScope, ScopedAccess},
};

/// Reads a picked file inside its permission scope.
///
/// The scope is released on every exit path, whether or not the read succeeds.
#[derive(Debug, Clone, Default)]
pub struct SecureReader<S> {
    scope: S,
}

impl<S: AccessScope> SecureReader<S> {
    pub fn new(scope: S) -> Self {
        SecureReader { scope }
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    /// Read the full contents of `location`.
    ///
    /// Returns [`FileOpenerError::NotAllowedToRead`] without touching the file
    /// when the scope refuses access.
    pub fn read(&self, location: FileLocation) -> Result<Vec<u8>, FileOpenerError> {
        let Some(_access) = ScopedAccess::start(&self.scope, &location) else {
            warn!(path = %location.path().display(), "access to picked file was refused");
            return Err(FileOpenerError::NotAllowedToRead);
        };

        std::fs::read(location.path()).map_err(|err| {
            warn!(path = %location.path().display(), error = %err, "failed to read picked file");
            FileOpenerError::CouldNotRead(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, io::Write as _, rc::Rc};

    use super::*;
    use crate::scope::Unscoped;

    #[derive(Clone, Default)]
    struct Recording {
        refuse: bool,
        started: Rc<Cell<usize>>,
        stopped: Rc<Cell<usize>>,
    }

    impl AccessScope for Recording {
        type Grant = ();

        fn start_accessing(&self, _location: &FileLocation) -> Option<()> {
            self.started.set(self.started.get() + 1);
            (!self.refuse).then_some(())
        }

        fn stop_accessing(&self, _grant: ()) {
            self.stopped.set(self.stopped.get() + 1);
        }
    }

    #[test]
    fn reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello floem").unwrap();

        let reader = SecureReader::new(Unscoped);
        let bytes = reader.read(FileLocation::new(file.path())).unwrap();
        assert_eq!(bytes, b"hello floem");
    }

    #[test]
    fn releases_scope_after_successful_read() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let scope = Recording::default();
        let reader = SecureReader::new(scope.clone());

        let bytes = reader.read(FileLocation::new(file.path())).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(scope.started.get(), 1);
        assert_eq!(scope.stopped.get(), 1);
    }

    #[test]
    fn refused_scope_is_not_allowed_to_read() {
        let scope = Recording {
            refuse: true,
            ..Default::default()
        };
        let reader = SecureReader::new(scope.clone());

        let dir = tempfile::tempdir().unwrap();
        let err = reader
            .read(FileLocation::new(dir.path().join("missing.txt")))
            .unwrap_err();
        // A missing file would be `CouldNotRead` if a read had been attempted.
        assert!(matches!(err, FileOpenerError::NotAllowedToRead));
        assert_eq!(scope.stopped.get(), 0);
    }

    #[test]
    fn failed_read_still_releases_scope() {
        let scope = Recording::default();
        let reader = SecureReader::new(scope.clone());

        let dir = tempfile::tempdir().unwrap();
        let err = reader
            .read(FileLocation::new(dir.path().join("missing.txt")))
            .unwrap_err();
        match err {
            FileOpenerError::CouldNotRead(cause) => {
                assert_eq!(cause.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected CouldNotRead, got {other:?}"),
        }
        assert_eq!(scope.started.get(), 1);
        assert_eq!(scope.stopped.get(), 1);
    }
}
