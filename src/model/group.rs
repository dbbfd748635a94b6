use crate::error::AppError;
use crate::model::credentials::ApiCredentials;
use crate::model::http::HttpClient;
use crate::model::query::{Params, get_url};
use crate::model::requests::FileUpload;
use crate::model::responses::ApiResponse;
use std::fmt;
use std::sync::Arc;

/// Request context shared by the actions of one processor
///
/// Holds the processor path (`/FaxJob`, `/Session`, ...), the rendered
/// credential query and the shared transport. Immutable for its whole life.
#[derive(Clone)]
pub struct ActionGroup {
    base_path: &'static str,
    credentials_query: Arc<str>,
    http: Arc<HttpClient>,
}

impl ActionGroup {
    /// Creates the context for one processor
    pub fn new(base_path: &'static str, credentials: &ApiCredentials, http: Arc<HttpClient>) -> Self {
        Self {
            base_path,
            credentials_query: Arc::from(credentials.to_query()),
            http,
        }
    }

    /// Processor path, e.g. `/FaxJob`
    pub fn base_path(&self) -> &str {
        self.base_path
    }

    /// Credential suffix appended to every action
    pub fn credentials_query(&self) -> &str {
        &self.credentials_query
    }

    /// Shared transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Path and query of an action
    pub fn url(&self, action: &str, params: &Params) -> String {
        get_url(self.base_path, action, &self.credentials_query, params)
    }

    /// Runs an action as a GET request
    pub async fn get(&self, action: &str, params: Params) -> Result<ApiResponse, AppError> {
        self.http.get(&self.url(action, &params)).await
    }

    /// Runs an action as a multipart POST carrying `upload`
    pub async fn post_file(
        &self,
        action: &str,
        params: Params,
        upload: FileUpload,
    ) -> Result<ApiResponse, AppError> {
        self.http.post_file(&self.url(action, &params), upload).await
    }
}

impl fmt::Debug for ActionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionGroup")
            .field("base_path", &self.base_path)
            .field("base_url", &self.http.base_url())
            .finish_non_exhaustive()
    }
}
