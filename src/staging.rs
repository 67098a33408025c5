//! In-memory staging of files attached to the next submission
//!
//! Files picked by the user accumulate here until a submission consumes them.
//! Nothing in this module touches the filesystem; reading file contents is the
//! caller's concern.

/// A file selected by the user, held client-side pending submission.
///
/// Immutable once staged; the outgoing request takes ownership rather than
/// copying the contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, contents: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            contents,
        }
    }
}

/// Ordered list of files staged for the next submission.
#[derive(Debug, Default)]
pub struct FileStagingArea {
    files: Vec<StagedFile>,
}

impl FileStagingArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append files in the order they were selected. Duplicate names are
    /// retained; no de-duplication happens here.
    pub fn add_files(&mut self, incoming: impl IntoIterator<Item = StagedFile>) {
        self.files.extend(incoming);
    }

    /// Append a single file.
    pub fn add_file(&mut self, file: StagedFile) {
        self.files.push(file);
    }

    /// Currently staged files, insertion order preserved.
    #[must_use]
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Display names of the staged files, for the staging bar listing.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Empty the staging list. Called once per submission, right after the
    /// outgoing request has been constructed; never called when validation
    /// rejects the submission (nothing was staged in that case).
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Hand the staged files over to a submission, leaving the area empty.
    #[must_use]
    pub fn take(&mut self) -> Vec<StagedFile> {
        std::mem::take(&mut self.files)
    }
}
