pub mod course;
pub mod lecture;
pub mod material;

pub use course::{Course, CourseColor, CourseId, NewCourseRequest, PALETTE};
pub use lecture::{Lecture, LectureId, NewLectureRequest};
pub use material::{FileRef, MaterialTag};
