use std::cell::Cell;

use tracing::{debug, trace};

use crate::{
    error::{FileOpenerError, FileResult},
    file::OpenOptions,
    picker::{PickOutcome, PickerAdapter},
    reader::SecureReader,
    scope::AccessScope,
};

/// Where an open-file operation currently is.
///
/// `Closed → Presenting → {Cancelled, Selected} → Reading → Done → Closed`.
/// `Reading` is only entered from `Selected`; every operation ends in `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenState {
    Closed,
    Presenting,
    Cancelled,
    Selected,
    Reading,
    Done,
}

/// Presents a picker and reads the chosen file inside its permission scope.
pub struct FileOpener<P, S> {
    picker: P,
    reader: SecureReader<S>,
    state: Cell<OpenState>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileOpener<crate::picker::NativePicker, crate::scope::PlatformScope> {
    /// The native dialog with the permission scope of the current platform.
    pub fn native() -> Self {
        FileOpener::new(Default::default(), Default::default())
    }
}

impl<P: PickerAdapter, S: AccessScope> FileOpener<P, S> {
    pub fn new(picker: P, scope: S) -> Self {
        FileOpener {
            picker,
            reader: SecureReader::new(scope),
            state: Cell::new(OpenState::Closed),
        }
    }

    pub fn state(&self) -> OpenState {
        self.state.get()
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    pub fn reader(&self) -> &SecureReader<S> {
        &self.reader
    }

    /// Present the picker once and read the selected file.
    ///
    /// Cancelling the dialog is `Ok(None)`. Calling this again while the picker
    /// is presenting returns [`FileOpenerError::AlreadyPresenting`] and leaves
    /// the running operation untouched.
    pub fn run(&self, options: &OpenOptions) -> FileResult {
        if self.state() != OpenState::Closed {
            debug!(state = ?self.state(), "file dialog already presented");
            return Err(FileOpenerError::AlreadyPresenting);
        }

        self.transition(OpenState::Presenting);
        debug!(filters = options.filters().len(), "presenting file dialog");

        let result = match self.picker.present(options) {
            PickOutcome::Cancelled => {
                self.transition(OpenState::Cancelled);
                Ok(None)
            }
            PickOutcome::NoLocation => {
                self.transition(OpenState::Done);
                Err(FileOpenerError::FileNotFound)
            }
            PickOutcome::Selected(location) => {
                self.transition(OpenState::Selected);
                self.transition(OpenState::Reading);
                let result = self.reader.read(location).map(Some);
                self.transition(OpenState::Done);
                result
            }
        };

        self.transition(OpenState::Closed);
        match &result {
            Ok(Some(bytes)) => debug!(len = bytes.len(), "file opened"),
            Ok(None) => debug!("file dialog cancelled"),
            Err(err) => debug!(error = %err, "file could not be opened"),
        }
        result
    }

    fn transition(&self, to: OpenState) {
        let from = self.state.replace(to);
        trace!(?from, ?to, "file opener transition");
    }
}
