//! HTTP transport behind the fetcher

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use super::error::FetchError;

/// Performs a single GET and returns the body of a successful response.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>>;
}

/// reqwest-backed transport shared by every fetch
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let request = self.client.get(url);
        let url = url.to_string();
        async move {
            tracing::trace!(%url, "HTTP GET");
            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                tracing::debug!(%url, status = status.as_u16(), "HTTP request rejected");
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(body.to_vec())
        }
        .boxed()
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! In-memory transport for tests

    use std::sync::{Arc, Mutex};

    use futures::future::{BoxFuture, FutureExt};
    use tokio::sync::Notify;

    use super::Transport;
    use crate::model::error::FetchError;

    #[derive(Clone)]
    struct Route {
        fragment: String,
        status: u16,
        body: Vec<u8>,
        gate: Option<Arc<Notify>>,
    }

    /// Answers requests whose URL contains a registered fragment.
    ///
    /// Status 0 stands for a connection failure.
    #[derive(Default)]
    pub struct StubTransport {
        routes: Mutex<Vec<Route>>,
        requests: Mutex<Vec<String>>,
    }

    impl StubTransport {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn route(&self, fragment: &str, status: u16, body: &[u8]) {
            self.push(fragment, status, body, None);
        }

        /// Like `route`, but the response waits until the returned gate is notified.
        pub fn gated_route(&self, fragment: &str, status: u16, body: &[u8]) -> Arc<Notify> {
            let gate = Arc::new(Notify::new());
            self.push(fragment, status, body, Some(gate.clone()));
            gate
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn push(&self, fragment: &str, status: u16, body: &[u8], gate: Option<Arc<Notify>>) {
            self.routes.lock().unwrap().push(Route {
                fragment: fragment.to_string(),
                status,
                body: body.to_vec(),
                gate,
            });
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, FetchError>> {
            self.requests.lock().unwrap().push(url.to_string());
            let route = self
                .routes
                .lock()
                .unwrap()
                .iter()
                .find(|route| url.contains(&route.fragment))
                .cloned();
            async move {
                let Some(route) = route else {
                    return Err(FetchError::Transport("no route".to_string()));
                };
                if let Some(gate) = route.gate {
                    gate.notified().await;
                }
                match route.status {
                    0 => Err(FetchError::Transport("connection refused".to_string())),
                    200..=299 => Ok(route.body),
                    status => Err(FetchError::Status(status)),
                }
            }
            .boxed()
        }
    }
}
