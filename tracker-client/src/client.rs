use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, Method};

use crate::{
    call::{call_channel, CallHandle, CallResult, RequestId},
    ApiUrl, CallError, ClientBuildError, Request,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fires requests at the time-tracking server, one background task per call.
#[derive(Debug)]
pub struct TrackerClient {
    client: Client,
    base_url: ApiUrl,
    next_id: u64,
}

impl TrackerClient {
    /// Certificates and host names are verified for `https` servers.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: ApiUrl::new(base_url),
            next_id: 1,
        })
    }

    pub fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    /// Start `request` immediately on the tokio runtime and return its handle.
    ///
    /// Nothing stops a caller from holding several handles; keeping a single
    /// call in flight is up to the caller.
    pub fn dispatch(&mut self, request: Request) -> CallHandle {
        let id = RequestId(self.next_id);
        self.next_id += 1;

        let url = self.base_url.endpoint(request.path());
        tracing::info!(
            request_id = %id,
            method = %request.method(),
            path = request.path(),
            fields = ?request.form().keys(),
            "dispatching request"
        );

        let (completer, handle) = call_channel(id, request.path());
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = perform(&client, &url, &request).await;
            match &result {
                Ok(body) => tracing::debug!(request_id = %id, body = %body, "request completed"),
                Err(e) => tracing::warn!(request_id = %id, error = %e, "request failed"),
            }
            completer.complete(result);
        });

        handle
    }
}

async fn perform(client: &Client, url: &ApiUrl, request: &Request) -> CallResult {
    let builder = match request.method() {
        Method::GET => client.get(url.as_str()),
        method => client
            .request(method, url.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.form().encode()),
    };

    let response = builder
        .send()
        .await
        .map_err(|e| CallError::Transport(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| CallError::Transport(e.to_string()))
}
