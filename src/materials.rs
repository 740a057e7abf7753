//! Maps selected files to the material badges shown on a lecture.

use crate::models::{FileRef, MaterialTag};

/// Tag for a single lowercase extension. Unknown extensions land on `File`.
pub fn tag_for_extension(extension: &str) -> MaterialTag {
    match extension {
        "pdf" | "doc" | "docx" => MaterialTag::Document,
        "ppt" | "pptx" => MaterialTag::Slides,
        "mp4" | "mov" | "avi" => MaterialTag::Video,
        "xls" | "xlsx" | "csv" => MaterialTag::Spreadsheet,
        _ => MaterialTag::File,
    }
}

/// Distinct tags for `files`, in the order they are first seen.
pub fn classify<'a, I>(files: I) -> Vec<MaterialTag>
where
    I: IntoIterator<Item = &'a FileRef>,
{
    let mut tags = Vec::new();
    for file in files {
        let tag = tag_for_extension(&file.extension());
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
