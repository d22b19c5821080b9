use floem_reactive::{RwSignal, SignalGet, SignalUpdate, create_effect, untrack};
use tracing::debug;

use crate::{
    error::FileResult,
    file::OpenOptions,
    opener::{FileOpener, OpenState},
    picker::PickerAdapter,
    scope::AccessScope,
};

/// The caller-owned half of an open-file operation: the visibility flag and
/// the dialog options.
#[derive(Clone)]
pub struct OpenRequest {
    pub is_open: RwSignal<bool>,
    pub options: OpenOptions,
}

impl OpenRequest {
    pub fn new(is_open: RwSignal<bool>, options: OpenOptions) -> Self {
        OpenRequest { is_open, options }
    }
}

/// Attach an open-file dialog to a view.
///
/// Setting `is_open` to `true` presents the dialog. Once the user acts, the
/// callback receives exactly one [`FileResult`] and `is_open` is set back to
/// `false`. If `is_open` is already `true` when the decorator is attached the
/// dialog is presented right away.
///
/// ```ignore
/// let is_open = RwSignal::new(false);
/// let content = RwSignal::new(String::new());
///
/// button("Open").action(move || is_open.set(true)).open_file(
///     is_open,
///     OpenOptions::new().allowed_types(vec![FileSpec::TEXT]),
///     move |result| {
///         if let Ok(Some(bytes)) = result {
///             content.set(String::from_utf8_lossy(&bytes).into_owned());
///         }
///     },
/// )
/// ```
pub trait FileOpenerExt: Sized {
    /// Use the native dialog and the permission scope of the current platform.
    #[cfg(not(target_arch = "wasm32"))]
    fn open_file(
        self,
        is_open: RwSignal<bool>,
        options: OpenOptions,
        on_open: impl Fn(FileResult) + 'static,
    ) -> Self {
        self.open_file_with(is_open, options, FileOpener::native(), on_open)
    }

    /// Like [`open_file`](FileOpenerExt::open_file), with an explicit opener.
    fn open_file_with<P, S>(
        self,
        is_open: RwSignal<bool>,
        options: OpenOptions,
        opener: FileOpener<P, S>,
        on_open: impl Fn(FileResult) + 'static,
    ) -> Self
    where
        P: PickerAdapter + 'static,
        S: AccessScope + 'static,
    {
        let request = OpenRequest::new(is_open, options);
        create_effect(move |_| {
            if !request.is_open.get() {
                return;
            }
            // The picker runs with the flag still set; toggling it from there
            // must not present a second dialog.
            if opener.state() != OpenState::Closed {
                debug!("file dialog already presented");
                return;
            }

            untrack(|| {
                let result = opener.run(&request.options);
                on_open(result);
            });
            request.is_open.set(false);
        });
        self
    }
}

impl<V> FileOpenerExt for V {}
