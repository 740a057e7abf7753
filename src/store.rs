use chrono::Utc;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::events::{StoreEvent, StoreEventRx, Subscribers};
use crate::materials::classify;
use crate::models::lecture::PLACEHOLDER_SUMMARY;
use crate::models::{Course, CourseColor, CourseId, FileRef, Lecture, LectureId};
use crate::seed::{DEFAULT_SEMESTER, seed_courses};

/// In-memory collection of courses. Every screen reads from here and the two
/// `add_*` methods are the only way it changes.
pub struct CourseStore {
    courses: Vec<Course>,
    semester: String,
    rng: Box<dyn RngCore + Send>,
    revision: u64,
    subscribers: Subscribers,
}

impl CourseStore {
    /// Seeded store with an OS-seeded colour picker.
    pub fn new() -> Self {
        Self::with_rng(seed_courses(), StdRng::from_os_rng())
    }

    pub fn with_rng(courses: Vec<Course>, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            courses,
            semester: DEFAULT_SEMESTER.to_string(),
            rng: Box::new(rng),
            revision: 0,
            subscribers: Subscribers::default(),
        }
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn lecture(
        &self,
        course_id: CourseId,
        lecture_id: LectureId,
    ) -> Result<&Lecture, StoreError> {
        self.course(course_id)
            .ok_or(StoreError::CourseNotFound(course_id))?
            .lecture(lecture_id)
            .ok_or(StoreError::LectureNotFound {
                course_id,
                lecture_id,
            })
    }

    /// Courses whose title, code or instructor contains `query`, ignoring
    /// case. A blank query matches every course.
    pub fn search(&self, query: &str) -> Vec<&Course> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.courses.iter().collect();
        }

        self.courses
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.code.to_lowercase().contains(&needle)
                    || c.instructor.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// 1-based position of the course, sent as `subject_id` with uploads.
    /// Courses are only ever appended, so the value never changes.
    pub fn subject_id(&self, id: CourseId) -> Option<u64> {
        self.courses
            .iter()
            .position(|c| c.id == id)
            .map(|index| index as u64 + 1)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn lecture_count(&self) -> usize {
        self.courses.iter().map(|c| c.lectures.len()).sum()
    }

    /// Number of mutations applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self) -> StoreEventRx {
        self.subscribers.subscribe()
    }

    pub fn add_course(
        &mut self,
        code: impl Into<String>,
        title: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Course {
        let color = CourseColor::pick(&mut *self.rng);
        let course = Course::new(
            code,
            title,
            instructor,
            self.semester.clone(),
            color,
            Vec::new(),
        );

        self.courses.push(course.clone());
        self.revision += 1;
        info!("added course {} ({})", course.code, course.id);

        self.subscribers.publish(StoreEvent::CourseAdded {
            course_id: course.id,
            revision: self.revision,
            at: Utc::now(),
        });

        course
    }

    pub fn add_lecture(
        &mut self,
        course_id: CourseId,
        number: u32,
        title: impl Into<String>,
        files: &[FileRef],
    ) -> Result<Lecture, StoreError> {
        let Some(course) = self.courses.iter_mut().find(|c| c.id == course_id) else {
            warn!("add_lecture: course {} not found", course_id);
            return Err(StoreError::CourseNotFound(course_id));
        };

        if number == 0 {
            return Err(StoreError::InvalidLectureNumber(number));
        }
        if course.has_lecture_number(number) {
            warn!("add_lecture: number {} already used in {}", number, course.code);
            return Err(StoreError::DuplicateLectureNumber { course_id, number });
        }

        let lecture = Lecture::new(number, title, classify(files), PLACEHOLDER_SUMMARY);

        course.lectures.push(lecture.clone());
        course.lectures.sort_by_key(|l| l.number);
        self.revision += 1;
        info!(
            "added lecture {} to {} with materials {:?}",
            number, course.code, lecture.materials
        );

        self.subscribers.publish(StoreEvent::LectureAdded {
            course_id,
            lecture_id: lecture.id,
            number,
            revision: self.revision,
            at: Utc::now(),
        });

        Ok(lecture)
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}
