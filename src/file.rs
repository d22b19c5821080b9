use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpec {
    /// A human readable name, describing this file type.
    ///
    /// This is used in the Windows file dialog, where the user can select
    /// from a dropdown the type of file they would like to choose.
    ///
    /// This should not include the file extensions; they will be added automatically.
    /// For instance, if we are describing Word documents, the name would be "Word Document",
    /// and the displayed string would be "Word Document (*.doc)".
    pub name: &'static str,
    /// The file extensions used by this file type.
    ///
    /// This should not include the leading '.'.
    pub extensions: &'static [&'static str],
}

impl FileSpec {
    pub const TEXT: FileSpec = FileSpec {
        name: "Text",
        extensions: &["txt", "text", "md"],
    };
    pub const JSON: FileSpec = FileSpec {
        name: "JSON",
        extensions: &["json"],
    };
    pub const IMAGE: FileSpec = FileSpec {
        name: "Image",
        extensions: &["png", "jpg", "jpeg", "gif", "webp", "bmp", "ico"],
    };
    pub const PDF: FileSpec = FileSpec {
        name: "PDF Document",
        extensions: &["pdf"],
    };

    /// Create a file spec from a display name and its extensions.
    pub const fn new(name: &'static str, extensions: &'static [&'static str]) -> Self {
        FileSpec { name, extensions }
    }

    /// Returns `true` if the extension of `path` is one of this spec's
    /// extensions, ignoring ASCII case.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}

/// A file chosen by the user.
///
/// The location is only meaningful while the permission scope the picker
/// granted for it is active, so it is consumed by the read that uses it.
#[derive(Debug, PartialEq, Eq)]
pub struct FileLocation {
    path: PathBuf,
}

impl FileLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLocation { path: path.into() }
    }

    /// Returns the underlying path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    pub(crate) title: Option<String>,
    pub(crate) allowed_types: Option<Vec<FileSpec>>,
    pub(crate) starting_directory: Option<PathBuf>,
}

impl OpenOptions {
    /// Create a new set of options that accepts any file.
    pub fn new() -> OpenOptions {
        OpenOptions::default()
    }

    /// Set the file types the user is allowed to select.
    ///
    /// An empty collection is treated as no filter.
    pub fn allowed_types(mut self, types: Vec<FileSpec>) -> Self {
        // An empty vector can cause platform issues, so treat it as no filter
        if types.is_empty() {
            self.allowed_types = None;
        } else {
            self.allowed_types = Some(types);
        }
        self
    }

    /// Set the title text of the dialog.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Force the starting directory to the specified `path`.
    ///
    /// # User experience
    ///
    /// This should almost never be used because it overrides the OS choice,
    /// which will usually be a directory that the user recently visited.
    pub fn force_starting_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.starting_directory = Some(path.into());
        self
    }

    /// The file type filters. Empty when every file is accepted.
    pub fn filters(&self) -> &[FileSpec] {
        self.allowed_types.as_deref().unwrap_or_default()
    }

    pub fn dialog_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn starting_directory(&self) -> Option<&Path> {
        self.starting_directory.as_deref()
    }

    /// Returns `true` if `path` passes the file type filters.
    pub fn accepts(&self, path: &Path) -> bool {
        match &self.allowed_types {
            None => true,
            Some(types) => types.iter().any(|spec| spec.matches(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_matches_extension_ignoring_case() {
        assert!(FileSpec::TEXT.matches(Path::new("notes.txt")));
        assert!(FileSpec::TEXT.matches(Path::new("/tmp/README.MD")));
        assert!(!FileSpec::TEXT.matches(Path::new("photo.png")));
        assert!(!FileSpec::TEXT.matches(Path::new("Makefile")));
    }

    #[test]
    fn location_hands_back_its_path() {
        let location = FileLocation::new("/tmp/notes.txt");
        assert_eq!(location.path(), Path::new("/tmp/notes.txt"));
        assert_eq!(location.into_path(), PathBuf::from("/tmp/notes.txt"));
    }

    #[test]
    fn empty_filter_list_is_unrestricted() {
        let options = OpenOptions::new().allowed_types(Vec::new());
        assert!(options.filters().is_empty());
        assert!(options.accepts(Path::new("anything.bin")));
        assert!(options.accepts(Path::new("no_extension")));
    }

    #[test]
    fn filters_restrict_accepted_paths() {
        let options = OpenOptions::new().allowed_types(vec![FileSpec::JSON, FileSpec::PDF]);
        assert_eq!(options.filters(), &[FileSpec::JSON, FileSpec::PDF]);
        assert!(options.accepts(Path::new("config.json")));
        assert!(options.accepts(Path::new("paper.PDF")));
        assert!(!options.accepts(Path::new("notes.txt")));
    }

    #[test]
    fn builder_keeps_title_and_directory() {
        let options = OpenOptions::new()
            .title("Import")
            .force_starting_directory("/home/user/Documents");
        assert_eq!(options.dialog_title(), Some("Import"));
        assert_eq!(
            options.starting_directory(),
            Some(Path::new("/home/user/Documents"))
        );
    }
}
