use crate::domain::model::Response;
use crate::utils::error::Result;
use reqwest::Method;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Boxed pending result for transports whose futures cannot be named.
pub type PendingResponse = Pin<Box<dyn Future<Output = Result<Response>> + Send + 'static>>;

/// What a transport needs to issue one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// Path relative to the transport's base URL, or an absolute URL.
    pub url: String,
    pub method: Method,
    /// Caller data, forwarded untouched. How it lands on the wire is up to the transport.
    pub data: Option<Value>,
}

/// Issues requests on behalf of endpoint accessors.
///
/// Each call to `request` submits exactly one request. Whether dropping the
/// returned future cancels it is up to the implementation.
pub trait Transport: Send + Sync {
    type Pending: Future<Output = Result<Response>> + Send + 'static;

    fn request(&self, descriptor: RequestDescriptor) -> Self::Pending;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Pending = T::Pending;

    fn request(&self, descriptor: RequestDescriptor) -> Self::Pending {
        (**self).request(descriptor)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    type Pending = T::Pending;

    fn request(&self, descriptor: RequestDescriptor) -> Self::Pending {
        (**self).request(descriptor)
    }
}
