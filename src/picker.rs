use crate::file::{FileLocation, OpenOptions};

/// What the user did with the file dialog.
#[derive(Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(FileLocation),
    /// The dialog was dismissed, cancelled or aborted.
    Cancelled,
    /// The dialog was confirmed but produced no usable location.
    NoLocation,
}

/// Presents a platform file chooser for a single file.
///
/// Implementations never allow selecting multiple files or directories.
pub trait PickerAdapter {
    fn present(&self, options: &OpenOptions) -> PickOutcome;
}

impl<F> PickerAdapter for F
where
    F: Fn(&OpenOptions) -> PickOutcome,
{
    fn present(&self, options: &OpenOptions) -> PickOutcome {
        self(options)
    }
}

/// The native desktop dialog: `NSOpenPanel` on macOS, the common item dialog
/// on Windows and the XDG desktop portal elsewhere.
///
/// The dialog is modal and blocks the calling thread until the user acts.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogPicker;

#[cfg(not(target_arch = "wasm32"))]
impl PickerAdapter for DialogPicker {
    fn present(&self, options: &OpenOptions) -> PickOutcome {
        let mut dialog = rfd::FileDialog::new();
        if let Some(path) = options.starting_directory() {
            dialog = dialog.set_directory(path);
        }
        if let Some(title) = options.dialog_title() {
            dialog = dialog.set_title(title);
        }
        dialog = options.filters().iter().fold(dialog, |dialog, filter| {
            dialog.add_filter(filter.name, filter.extensions)
        });

        match dialog.pick_file() {
            Some(path) if path.as_os_str().is_empty() => PickOutcome::NoLocation,
            Some(path) => PickOutcome::Selected(FileLocation::new(path)),
            None => PickOutcome::Cancelled,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub type NativePicker = DialogPicker;
