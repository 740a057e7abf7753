use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialTag {
    Document,
    Slides,
    Video,
    Spreadsheet,
    File,
    // Labels that only appear in seed data.
    #[serde(rename = "Practice Problems")]
    PracticeProblems,
    Quiz,
    #[serde(rename = "Case Study")]
    CaseStudy,
    Article,
    #[serde(rename = "Group Project")]
    GroupProject,
}

impl MaterialTag {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialTag::Document => "Document",
            MaterialTag::Slides => "Slides",
            MaterialTag::Video => "Video",
            MaterialTag::Spreadsheet => "Spreadsheet",
            MaterialTag::File => "File",
            MaterialTag::PracticeProblems => "Practice Problems",
            MaterialTag::Quiz => "Quiz",
            MaterialTag::CaseStudy => "Case Study",
            MaterialTag::Article => "Article",
            MaterialTag::GroupProject => "Group Project",
        }
    }
}

impl fmt::Display for MaterialTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file picked by the user, known by name only. Its bytes travel with the
/// request that created it and are never looked up on this machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(PathBuf);

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Keeps only the last component of a name sent by a client.
    pub fn from_client_name(name: &str) -> Self {
        let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
        Self::new(base)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Lowercased extension, empty when the name has none.
    pub fn extension(&self) -> String {
        self.0
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl From<&str> for FileRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
