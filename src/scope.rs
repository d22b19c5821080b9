//! Permission scopes around reading a picked file.
//!
//! Sandboxed macOS applications may only read a file the user picked while a
//! security-scoped access grant for it is active. Other targets have no such
//! concept and use [`Unscoped`]. The variant for the current target is
//! available as [`PlatformScope`].

use crate::file::FileLocation;

/// Acquires and releases access to a [`FileLocation`].
///
/// Every grant returned by [`start_accessing`](AccessScope::start_accessing)
/// is passed back to [`stop_accessing`](AccessScope::stop_accessing) exactly
/// once. [`ScopedAccess`] does this on drop.
pub trait AccessScope {
    type Grant;

    /// Try to acquire access. `None` means access was refused.
    fn start_accessing(&self, location: &FileLocation) -> Option<Self::Grant>;

    fn stop_accessing(&self, grant: Self::Grant);
}

/// An active grant, released when dropped.
pub struct ScopedAccess<'a, S: AccessScope> {
    scope: &'a S,
    grant: Option<S::Grant>,
}

impl<'a, S: AccessScope> ScopedAccess<'a, S> {
    pub fn start(scope: &'a S, location: &FileLocation) -> Option<Self> {
        let grant = scope.start_accessing(location)?;
        Some(ScopedAccess {
            scope,
            grant: Some(grant),
        })
    }
}

impl<S: AccessScope> Drop for ScopedAccess<'_, S> {
    fn drop(&mut self) {
        if let Some(grant) = self.grant.take() {
            self.scope.stop_accessing(grant);
        }
    }
}

/// Access without any permission scope. Always granted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unscoped;

impl AccessScope for Unscoped {
    type Grant = ();

    fn start_accessing(&self, _location: &FileLocation) -> Option<()> {
        Some(())
    }

    fn stop_accessing(&self, _grant: ()) {}
}

#[cfg(target_os = "macos")]
pub use macos::SecurityScopedUrl;

#[cfg(target_os = "macos")]
pub type PlatformScope = SecurityScopedUrl;

#[cfg(not(target_os = "macos"))]
pub type PlatformScope = Unscoped;

#[cfg(target_os = "macos")]
mod macos {
    use std::{fs::File, io};

    use objc2::rc::Retained;
    use objc2_foundation::NSURL;

    use super::AccessScope;
    use crate::file::FileLocation;

    /// `NSURL` security-scoped resource access.
    ///
    /// Foundation refuses to start access for URLs that carry no security
    /// scope, even when the process may read them (unsandboxed applications,
    /// or files the open panel already granted). Those are only refused when
    /// opening the file is denied.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SecurityScopedUrl;

    impl AccessScope for SecurityScopedUrl {
        /// `None` when the file is read without an active scope.
        type Grant = Option<Retained<NSURL>>;

        #[allow(unused_unsafe)]
        fn start_accessing(&self, location: &FileLocation) -> Option<Self::Grant> {
            let Some(url) = NSURL::from_file_path(location.path()) else {
                // No file URL for this path; the read reports its own failure.
                return Some(None);
            };
            // SAFETY: `url` is a valid file URL for the lifetime of the grant.
            if unsafe { url.startAccessingSecurityScopedResource() } {
                return Some(Some(url));
            }
            match File::open(location.path()) {
                Err(err) if err.kind() == io::ErrorKind::PermissionDenied => None,
                _ => Some(None),
            }
        }

        #[allow(unused_unsafe)]
        fn stop_accessing(&self, grant: Self::Grant) {
            if let Some(url) = grant {
                // SAFETY: only called with URLs whose access was started above.
                unsafe { url.stopAccessingSecurityScopedResource() };
            }
        }
    }
}
