/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! Request URL construction
//!
//! Every PamFax action is addressed as
//! `{base_path}/{Action}{credential_query}&{extra_params}`. Extra parameters
//! follow the PHP convention the service expects:
//!
//! - falsy values (`None`, `""`, `0`, `false`, empty lists and maps) are left out,
//! - lists expand to indexed keys, `tags[0]=a&tags[1]=b`,
//! - maps expand to keyed entries, `settings[inbox_enabled]=1`.

use url::form_urlencoded;

/// A single parameter value before encoding
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Absent value, never sent
    Null,
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value, e.g. credit amounts
    Float(f64),
    /// Boolean flag, sent as `true` and omitted when false
    Bool(bool),
    /// Sequence, expanded to `name[i]`
    List(Vec<QueryValue>),
    /// Key/value pairs, expanded to `name[key]`
    Map(Vec<(String, QueryValue)>),
}

impl QueryValue {
    /// Builds a map value from key/value pairs, keeping their order
    pub fn map<K, V>(entries: &[(K, V)]) -> Self
    where
        K: ToString,
        V: Into<QueryValue> + Clone,
    {
        QueryValue::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone().into()))
                .collect(),
        )
    }

    /// Whether the value is dropped from the query string
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            QueryValue::Null => true,
            QueryValue::Text(s) => s.is_empty(),
            QueryValue::Int(i) => *i == 0,
            QueryValue::Float(f) => *f == 0.0,
            QueryValue::Bool(b) => !*b,
            QueryValue::List(items) => items.is_empty(),
            QueryValue::Map(entries) => entries.is_empty(),
        }
    }

    fn flatten_into(&self, key: String, out: &mut Vec<(String, String)>) {
        match self {
            QueryValue::Null => out.push((key, String::new())),
            QueryValue::Text(s) => out.push((key, s.clone())),
            QueryValue::Int(i) => out.push((key, i.to_string())),
            QueryValue::Float(f) => out.push((key, f.to_string())),
            QueryValue::Bool(b) => out.push((key, b.to_string())),
            QueryValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    item.flatten_into(format!("{key}[{i}]"), out);
                }
            }
            QueryValue::Map(entries) => {
                for (k, v) in entries {
                    v.flatten_into(format!("{key}[{k}]"), out);
                }
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(value: Vec<T>) -> Self {
        QueryValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<QueryValue> + Clone> From<&[T]> for QueryValue {
    fn from(value: &[T]) -> Self {
        QueryValue::List(value.iter().cloned().map(Into::into).collect())
    }
}

/// Ordered set of extra parameters for one action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, QueryValue)>,
}

impl Params {
    /// Creates an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, keeping insertion order
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<QueryValue>) -> Self {
        self.entries.push((name.to_string(), value.into()));
        self
    }

    /// Pagination parameters shared by the listing actions
    #[must_use]
    pub fn page(current_page: Option<u32>, items_per_page: Option<u32>) -> Self {
        Self::new()
            .with("current_page", current_page)
            .with("items_per_page", items_per_page)
    }

    /// Whether no parameter was added at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs as they go on the wire, before percent-encoding
    ///
    /// Falsy parameters are skipped; lists and maps are expanded. Elements
    /// inside a list or map are never filtered.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            if value.is_falsy() {
                continue;
            }
            value.flatten_into(name.clone(), &mut out);
        }
        out
    }

    /// Percent-encoded `application/x-www-form-urlencoded` query, without leading separator
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }
}

/// Builds the request URL (path and query) of an action
///
/// # Arguments
/// * `base_path` - Processor path, e.g. `/FaxJob`
/// * `action` - Remote action name, e.g. `AddRecipient`
/// * `credentials_query` - Credential suffix starting with `?`
/// * `params` - Extra parameters
///
/// # Example
/// ```
/// use pamfax_client::model::query::{get_url, Params};
///
/// let url = get_url(
///     "/FaxJob",
///     "AddRecipient",
///     "?apikey=k",
///     &Params::new().with("number", "+4930123").with("name", None::<&str>),
/// );
/// assert_eq!(url, "/FaxJob/AddRecipient?apikey=k&number=%2B4930123");
/// ```
pub fn get_url(base_path: &str, action: &str, credentials_query: &str, params: &Params) -> String {
    let url = format!("{base_path}/{action}{credentials_query}");
    let query = params.encode();
    if query.is_empty() {
        url
    } else {
        format!("{url}&{query}")
    }
}
