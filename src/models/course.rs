use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::lecture::{Lecture, LectureId};

/// Highest lecture number offered by the upload form.
pub const MAX_LECTURE_NUMBER: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseColor {
    Blue,
    Green,
    Orange,
    Pink,
    Purple,
    Teal,
    Indigo,
}

/// Colours handed out to courses created at runtime.
pub const PALETTE: [CourseColor; 7] = [
    CourseColor::Blue,
    CourseColor::Green,
    CourseColor::Orange,
    CourseColor::Pink,
    CourseColor::Purple,
    CourseColor::Teal,
    CourseColor::Indigo,
];

impl CourseColor {
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PALETTE[rng.random_range(0..PALETTE.len())]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub semester: String,
    pub color: CourseColor,
    pub lectures: Vec<Lecture>,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        instructor: impl Into<String>,
        semester: impl Into<String>,
        color: CourseColor,
        mut lectures: Vec<Lecture>,
    ) -> Self {
        // stable: lectures sharing a number keep the order they were given in
        lectures.sort_by_key(|l| l.number);

        Self {
            id: CourseId::new(),
            code: code.into(),
            title: title.into(),
            instructor: instructor.into(),
            semester: semester.into(),
            color,
            lectures,
        }
    }

    pub fn lecture(&self, id: LectureId) -> Option<&Lecture> {
        self.lectures.iter().find(|l| l.id == id)
    }

    pub fn has_lecture_number(&self, number: u32) -> bool {
        self.lectures.iter().any(|l| l.number == number)
    }

    /// Lecture numbers the upload form may still offer, ascending.
    pub fn available_lecture_numbers(&self) -> Vec<u32> {
        (1..=MAX_LECTURE_NUMBER)
            .filter(|n| !self.has_lecture_number(*n))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub code: String,
    pub title: String,
    pub instructor: String,
}
