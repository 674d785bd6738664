use crate::utils::error::{ClientError, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;

/// `err_code` the dashboard server reports for a successful call.
pub const CODE_SUCCESS: i64 = 0;

/// A completed HTTP exchange as handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decodes the body as the dashboard's `{err_code, message, data}` wrapper.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<ApiResult<T>> {
        self.json()
    }
}

/// Response wrapper used by every dashboard server endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub err_code: i64,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        self.err_code == CODE_SUCCESS
    }

    /// Returns the payload, or the server's error code as an `ApiError`.
    /// A successful response with a `null` payload yields `None`.
    pub fn into_data(self) -> Result<Option<T>> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ClientError::ApiError {
                code: self.err_code,
                message: self.message,
            })
        }
    }
}

/// One service mesh registered with the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "Cid")]
    pub cid: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Status", default)]
    pub status: i64,
}

impl Project {
    pub fn status(&self) -> ProjectStatus {
        ProjectStatus::from(self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Normal,
    Disabled,
    Deleted,
    Unknown(i64),
}

impl From<i64> for ProjectStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => ProjectStatus::Normal,
            2 => ProjectStatus::Disabled,
            3 => ProjectStatus::Deleted,
            other => ProjectStatus::Unknown(other),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Normal => write!(f, "normal"),
            ProjectStatus::Disabled => write!(f, "disabled"),
            ProjectStatus::Deleted => write!(f, "deleted"),
            ProjectStatus::Unknown(code) => write!(f, "unknown({})", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with(body: serde_json::Value) -> Response {
        Response {
            status: 200,
            headers: HashMap::from([(
                "content-type".to_string(),
                "application/json".to_string(),
            )]),
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    #[test]
    fn test_decode_project_list_envelope() {
        let response = response_with(json!({
            "err_code": 0,
            "message": "",
            "data": [
                {"Cid": "mesh-a", "Description": "staging", "Status": 1},
                {"Cid": "mesh-b", "Description": "", "Status": 2}
            ]
        }));

        let projects = response
            .envelope::<Vec<Project>>()
            .unwrap()
            .into_data()
            .unwrap()
            .unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].cid, "mesh-a");
        assert_eq!(projects[0].status(), ProjectStatus::Normal);
        assert_eq!(projects[1].status(), ProjectStatus::Disabled);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_envelope_error_code() {
        let response = response_with(json!({
            "err_code": 10001,
            "message": "kube-config no exist",
            "data": null
        }));

        let err = response
            .envelope::<Vec<Project>>()
            .unwrap()
            .into_data()
            .unwrap_err();

        match err {
            ClientError::ApiError { code, message } => {
                assert_eq!(code, 10001);
                assert_eq!(message, "kube-config no exist");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_null_data() {
        let result: ApiResult<Vec<Project>> =
            serde_json::from_value(json!({"err_code": 0, "data": null})).unwrap();
        assert!(result.is_success());
        assert_eq!(result.into_data().unwrap(), None);
    }

    #[test]
    fn test_unknown_status_display() {
        assert_eq!(ProjectStatus::from(7).to_string(), "unknown(7)");
        assert_eq!(ProjectStatus::from(3).to_string(), "deleted");
    }
}
