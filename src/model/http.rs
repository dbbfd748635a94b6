/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/

use crate::application::config::{ClientIdentity, RestApiConfig};
use crate::constants::{CONTENT_TYPE_JSON, DUPLICATED_JSON_KEY, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::FileUpload;
use crate::model::responses::ApiResponse;
use crate::utils::redact::redact_secrets;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use std::borrow::Cow;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Shared transport for all action groups
///
/// Wraps one pooled `reqwest::Client` bound to a single API host. Requests
/// are never retried: a non-2xx status is returned as `AppError::Http`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    identity: ClientIdentity,
}

impl HttpClient {
    /// Creates the transport from the REST configuration
    ///
    /// # Arguments
    /// * `rest_api` - Host and timeout
    /// * `identity` - Client details reported when creating faxes
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying client cannot be built
    pub fn new(rest_api: &RestApiConfig, identity: ClientIdentity) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(rest_api.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: rest_api.base_url.trim_end_matches('/').to_string(),
            identity,
        })
    }

    /// Scheme and host every path is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client details reported when creating faxes
    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    /// Gets the given path and query
    pub async fn get(&self, path: &str) -> Result<ApiResponse, AppError> {
        info!("getting url '{}'", redact_secrets(path));
        make_http_request(&self.client, Method::GET, &self.url(path), None).await
    }

    /// Posts a file as multipart form data to the given path and query
    pub async fn post_file(&self, path: &str, upload: FileUpload) -> Result<ApiResponse, AppError> {
        info!(
            "posting '{}' ({} bytes) to url '{}'",
            upload.file_name,
            upload.content.len(),
            redact_secrets(path)
        );
        make_http_request(&self.client, Method::POST, &self.url(path), Some(upload)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Sends one request and normalizes its response
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request, query included
/// * `upload` - Optional file, sent as multipart form data
///
/// # Returns
///
/// * `Ok(ApiResponse)` - Parsed JSON or raw binary content
/// * `Err(AppError)` - On connection failure, non-2xx status or unparsable JSON
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    upload: Option<FileUpload>,
) -> Result<ApiResponse, AppError> {
    let mut request = client.request(method, url);
    if let Some(upload) = upload {
        request = request.multipart(upload.into_form());
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Http { status, body });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.bytes().await?;
    normalize_response(&content_type, &body)
}

/// Turns a response body into an [`ApiResponse`]
///
/// JSON content types are repaired with [`repair_duplicate_key`] and parsed.
/// Anything else is returned as raw bytes paired with its content type.
///
/// # Errors
/// `AppError::Json` if a JSON body still fails to parse after the repair
pub fn normalize_response(content_type: &str, body: &[u8]) -> Result<ApiResponse, AppError> {
    if !content_type.starts_with(CONTENT_TYPE_JSON) {
        debug!("Binary response of type '{}', {} bytes", content_type, body.len());
        return Ok(ApiResponse::Binary {
            content: body.to_vec(),
            content_type: content_type.to_string(),
        });
    }

    let text = String::from_utf8_lossy(body);
    let repaired = repair_duplicate_key(&text);
    Ok(ApiResponse::Json(serde_json::from_str(&repaired)?))
}

/// Works around the API emitting `"FaxContainerFile":` twice in one object
///
/// When the key occurs exactly twice, everything from its last occurrence on
/// is cut, trailing commas are stripped and the object is closed with `}`.
/// Any other text is returned unchanged.
pub fn repair_duplicate_key(content: &str) -> Cow<'_, str> {
    if content.matches(DUPLICATED_JSON_KEY).count() != 2 {
        return Cow::Borrowed(content);
    }
    match content.rfind(DUPLICATED_JSON_KEY) {
        Some(index) => {
            warn!("Removing duplicated {} from response", DUPLICATED_JSON_KEY);
            let mut repaired = content[..index].trim_end_matches(',').to_string();
            repaired.push('}');
            Cow::Owned(repaired)
        }
        None => Cow::Borrowed(content),
    }
}
