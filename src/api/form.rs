use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::AppError;
use crate::models::{FileRef, NewLectureRequest};

pub struct UploadedFile {
    pub file: FileRef,
    pub bytes: Bytes,
}

/// Parsed `multipart/form-data` body of the upload-lecture form.
pub struct LectureForm {
    pub request: NewLectureRequest,
    pub first_file: Option<UploadedFile>,
}

impl LectureForm {
    /// Reads `number`, `title` and any number of `file` parts. File names are
    /// reduced to their last component; unknown fields are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut number = None;
        let mut title = String::new();
        let mut files = Vec::new();
        let mut first_file = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("number") => {
                    let raw = field.text().await?;
                    let parsed = raw.trim().parse::<u32>().map_err(|_| {
                        AppError::BadRequest(format!("Invalid lecture number: {raw}"))
                    })?;
                    number = Some(parsed);
                }
                Some("title") => title = field.text().await?,
                Some("file") => {
                    let file = FileRef::from_client_name(field.file_name().unwrap_or_default());
                    let bytes = field.bytes().await?;
                    if first_file.is_none() {
                        first_file = Some(UploadedFile {
                            file: file.clone(),
                            bytes,
                        });
                    }
                    files.push(file);
                }
                _ => {}
            }
        }

        let number =
            number.ok_or_else(|| AppError::BadRequest("Lecture number is required".to_string()))?;

        Ok(Self {
            request: NewLectureRequest {
                number,
                title,
                files,
            },
            first_file,
        })
    }
}
