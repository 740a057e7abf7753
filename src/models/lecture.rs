use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::material::{FileRef, MaterialTag};

/// Summary given to lectures created through the upload flow.
pub const PLACEHOLDER_SUMMARY: &str = "This is a new lecture added to the course.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(Uuid);

impl LectureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LectureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub id: LectureId,
    pub number: u32,
    pub title: String,
    pub materials: Vec<MaterialTag>,
    pub summary: String,
}

impl Lecture {
    pub fn new(
        number: u32,
        title: impl Into<String>,
        materials: Vec<MaterialTag>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: LectureId::new(),
            number,
            title: title.into(),
            materials,
            summary: summary.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLectureRequest {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub files: Vec<FileRef>,
}
