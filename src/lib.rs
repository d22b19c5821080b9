//! # Floem file opener
//! Present a native "open file" dialog from a Floem view and receive the selected file's bytes.
//!
//! ## Example
//! ```ignore
//! use floem::prelude::*;
//! use floem_file_opener::prelude::*;
//!
//! let is_open = RwSignal::new(false);
//!
//! button("Open…").action(move || is_open.set(true)).open_file(
//!     is_open,
//!     OpenOptions::new().allowed_types(vec![FileSpec::TEXT]),
//!     move |result| match result {
//!         Ok(Some(bytes)) => println!("read {} bytes", bytes.len()),
//!         Ok(None) => println!("cancelled"),
//!         Err(err) => eprintln!("{err}"),
//!     },
//! );
//! ```
//!
//! Setting the signal to `true` presents the dialog. The callback runs exactly once per
//! presentation, after which the signal is reset to `false`. Cancelling the dialog is not an
//! error: it is delivered as `Ok(None)`.
//!
//! ## Pieces
//! - A [`PickerAdapter`](picker::PickerAdapter) shows the platform file chooser. The native
//!   variant for the current target is [`NativePicker`](picker::NativePicker).
//! - A [`SecureReader`](reader::SecureReader) reads the chosen file inside an
//!   [`AccessScope`](scope::AccessScope). On macOS this is the security-scoped resource access a
//!   sandboxed application needs; elsewhere access is always granted. The scope is released on
//!   every exit path of the read.
//! - A [`FileOpener`](opener::FileOpener) walks one operation through
//!   [`OpenState`](opener::OpenState)s, and [`FileOpenerExt`](decorator::FileOpenerExt) wires it
//!   to a reactive flag.

pub mod decorator;
pub mod error;
pub mod file;
pub mod opener;
pub mod picker;
pub mod reader;
pub mod scope;

pub use decorator::{FileOpenerExt, OpenRequest};
pub use error::{FileOpenerError, FileResult};
pub use file::{FileLocation, FileSpec, OpenOptions};
pub use floem_reactive as reactive;
pub use opener::{FileOpener, OpenState};
pub use picker::{PickOutcome, PickerAdapter};
pub use reader::SecureReader;
pub use scope::{AccessScope, PlatformScope, Unscoped};

pub mod prelude {
    pub use crate::decorator::FileOpenerExt;
    pub use crate::error::{FileOpenerError, FileResult};
    pub use crate::file::{FileSpec, OpenOptions};
}
