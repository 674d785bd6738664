use crate::core::registry::Endpoint;
use crate::domain::ports::{RequestDescriptor, Transport};
use reqwest::Method;
use serde_json::Value;

/// Accessor for the dashboard's project endpoints.
#[derive(Debug, Clone)]
pub struct ProjectApi<T: Transport> {
    transport: T,
}

impl<T: Transport> ProjectApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Lists the meshes registered with the dashboard.
    ///
    /// `parameter` is handed to the transport as the request data without
    /// inspection. The request is submitted before this returns; the returned
    /// value is the transport's own pending result.
    pub fn list_projects(&self, parameter: Option<Value>) -> T::Pending {
        self.transport.request(RequestDescriptor {
            url: Endpoint::ListProjects.path().to_string(),
            method: Method::GET,
            data: parameter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Response;
    use crate::utils::error::{ClientError, Result};
    use serde_json::json;
    use std::collections::HashMap;
    use std::future::{ready, Ready};
    use std::sync::{Arc, Mutex};

    /// Records each descriptor and answers with a canned result.
    #[derive(Clone, Default)]
    struct RecordingTransport {
        calls: Arc<Mutex<Vec<RequestDescriptor>>>,
        fail_with_status: Option<u16>,
    }

    impl RecordingTransport {
        fn calls(&self) -> Vec<RequestDescriptor> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        type Pending = Ready<Result<Response>>;

        fn request(&self, descriptor: RequestDescriptor) -> Self::Pending {
            let call_number = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(descriptor);
                calls.len()
            };

            ready(match self.fail_with_status {
                Some(status) => Err(ClientError::HttpStatus {
                    status,
                    body: format!("call {}", call_number),
                }),
                None => Ok(Response {
                    status: 200,
                    headers: HashMap::new(),
                    body: format!("call {}", call_number).into_bytes(),
                }),
            })
        }
    }

    #[tokio::test]
    async fn test_forwards_parameter_verbatim() {
        let transport = RecordingTransport::default();
        let api = ProjectApi::new(transport.clone());

        api.list_projects(Some(json!({"page": 1, "size": 20})))
            .await
            .unwrap();

        assert_eq!(
            transport.calls(),
            vec![RequestDescriptor {
                url: "/server/project/list".to_string(),
                method: Method::GET,
                data: Some(json!({"page": 1, "size": 20})),
            }]
        );
    }

    #[test]
    fn test_submits_before_the_result_is_polled() {
        let transport = RecordingTransport::default();
        let api = ProjectApi::new(transport.clone());

        let pending = api.list_projects(None);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].data, None);
        assert_eq!(calls[0].method, Method::GET);
        drop(pending);
    }

    #[test]
    fn test_nested_parameter_is_not_reshaped() {
        let transport = RecordingTransport::default();
        let api = ProjectApi::new(&transport);
        let parameter = json!({
            "filter": {"status": [1, 2], "name": null},
            "sort": "-create_time"
        });

        let _ = api.list_projects(Some(parameter.clone()));

        assert_eq!(transport.calls()[0].data, Some(parameter));
    }

    #[tokio::test]
    async fn test_returns_transport_result_unchanged() {
        let transport = RecordingTransport::default();
        let api = ProjectApi::new(transport.clone());

        let response = api.list_projects(None).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text(), "call 1");
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let transport = RecordingTransport {
            fail_with_status: Some(503),
            ..Default::default()
        };
        let api = ProjectApi::new(transport);

        let err = api.list_projects(Some(json!({}))).await.unwrap_err();

        match err {
            ClientError::HttpStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "call 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_are_independent() {
        let transport = RecordingTransport::default();
        let api = ProjectApi::new(Arc::new(transport.clone()));

        let first = api.list_projects(Some(json!({}))).await.unwrap();
        let second = api.list_projects(Some(json!({}))).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(first.text(), "call 1");
        assert_eq!(second.text(), "call 2");
    }
}
