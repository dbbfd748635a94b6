/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/
use crate::error::AppError;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// A file to attach to the current fax through `FaxJob/AddFile`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name sent to the service, without directories
    pub file_name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload from in-memory content
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Reads a file from disk, keeping only its base name
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - If the path has no file name component
    /// * `AppError::Io` - If the file cannot be read
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("{} has no usable file name", path.display()))
            })?
            .to_string();
        let content = tokio::fs::read(path).await?;
        Ok(Self { file_name, content })
    }

    /// Multipart body: the `file` part with the raw bytes and a `filename` text field
    pub fn into_form(self) -> Form {
        let part = Part::bytes(self.content).file_name(self.file_name.clone());
        Form::new()
            .part("file", part)
            .text("filename", self.file_name)
    }
}
