use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::CourseStore;
use crate::upload::LectureUploader;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<CourseStore>>,
    pub uploader: Arc<dyn LectureUploader>,
}

impl AppState {
    pub fn new(store: CourseStore, uploader: Arc<dyn LectureUploader>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            uploader,
        }
    }
}
