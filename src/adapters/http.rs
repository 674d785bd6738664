use crate::config::ClientConfig;
use crate::domain::model::Response;
use crate::domain::ports::{PendingResponse, RequestDescriptor, Transport};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// `reqwest`-backed transport for the dashboard server.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(config.base_url()).map_err(|e| {
            ClientError::InvalidConfigValueError {
                field: "server.base_url".to_string(),
                value: config.base_url().to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ClientError::InvalidConfigValueError {
                    field: "server.headers".to_string(),
                    value: name.to_string(),
                    reason: e.to_string(),
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ClientError::InvalidConfigValueError {
                    field: format!("server.headers.{}", name),
                    value: value.to_string(),
                    reason: e.to_string(),
                }
            })?;
            default_headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(default_headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins a descriptor path onto the base URL, keeping any base path prefix.
    pub fn resolve(&self, path: &str) -> Url {
        if let Ok(absolute) = Url::parse(path) {
            return absolute;
        }

        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            self.base_url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }

    fn build(&self, descriptor: RequestDescriptor) -> Result<reqwest::RequestBuilder> {
        let mut url = self.resolve(&descriptor.url);
        let sends_query = matches!(descriptor.method, Method::GET | Method::DELETE | Method::HEAD);

        let mut body = None;
        match descriptor.data {
            None | Some(Value::Null) => {}
            Some(data) if sends_query => {
                if let Some(query) = encode_query(&data)? {
                    url.set_query(Some(&query));
                }
            }
            Some(data) => body = Some(data),
        }

        let mut request = self.client.request(descriptor.method, url);
        if let Some(data) = body {
            request = request.json(&data);
        }

        Ok(request)
    }
}

impl Transport for HttpTransport {
    type Pending = PendingResponse;

    /// Puts the request on the wire right away when called inside a tokio
    /// runtime; dropping the returned future does not cancel it. Outside a
    /// runtime the request starts when the future is first polled.
    fn request(&self, descriptor: RequestDescriptor) -> PendingResponse {
        tracing::debug!("{} {}", descriptor.method, descriptor.url);

        let request = match self.build(descriptor) {
            Ok(request) => request,
            Err(e) => return Box::pin(std::future::ready(Err::<Response, _>(e))),
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let task = handle.spawn(send(request));
                Box::pin(async move {
                    match task.await {
                        Ok(result) => result,
                        Err(e) => Err(ClientError::TaskError(e)),
                    }
                })
            }
            Err(_) => {
                tracing::debug!("No tokio runtime, request deferred until polled");
                Box::pin(send(request))
            }
        }
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!("{} {}", status, response.url());

    let headers = collect_headers(response.headers());
    let body = response.bytes().await?.to_vec();

    if !status.is_success() {
        return Err(ClientError::HttpStatus {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(Response {
        status: status.as_u16(),
        headers,
        body,
    })
}

/// Lowercase names; repeated headers are joined with `, `.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}

/// Encodes a filter object qs-style (`filter[status]=1`, `ids[0]=7`).
/// Nulls are dropped at every depth; an empty result yields `None`.
pub fn encode_query(data: &Value) -> Result<Option<String>> {
    if !data.is_object() {
        return Err(ClientError::UnsupportedParameter {
            field: "<root>".to_string(),
            reason: format!("expected an object, got {}", type_name(data)),
        });
    }

    let query = serde_qs::to_string(&without_nulls(data))?;
    Ok((!query.is_empty()).then_some(query))
}

fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), without_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|v| !v.is_null())
                .map(without_nulls)
                .collect(),
        ),
        other => other.clone(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
