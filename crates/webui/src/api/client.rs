//! REST client for the writer-reports backend.
//!
//! Thin wrapper over `gloo::net`; one async method per endpoint. The fetch
//! API resolves non-2xx statuses as successes, so every call funnels through
//! [`ensure_ok`] to turn them into errors. No retry, no explicit timeout.

use crate::api::models::{ExportRequest, NewWriter, StatsUpdate, WriterData};
use gloo::net::Error;
use gloo::net::http::{Request, Response};

pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `GET /writers`: the full writer list plus the server-side summary.
    pub async fn list_writers(&self) -> Result<WriterData, Error> {
        let response = Request::get(&self.writers_url()).send().await?;
        ensure_ok(&response)?;
        response.json().await
    }

    /// `POST /writers`: the created writer in the response body is ignored,
    /// callers refetch the list instead.
    pub async fn add_writer(&self, name: &str) -> Result<(), Error> {
        let response = Request::post(&self.writers_url())
            .json(&NewWriter { name })?
            .send()
            .await?;
        ensure_ok(&response)
    }

    /// `PUT /writers/{id}`: overwrites both counters; averages are
    /// recomputed server-side.
    pub async fn update_stats(&self, writer_id: &str, update: StatsUpdate) -> Result<(), Error> {
        let response = Request::put(&self.writer_url(writer_id))
            .json(&update)?
            .send()
            .await?;
        ensure_ok(&response)
    }

    /// `DELETE /writers/{id}`.
    pub async fn delete_writer(&self, writer_id: &str) -> Result<(), Error> {
        let response = Request::delete(&self.writer_url(writer_id)).send().await?;
        ensure_ok(&response)
    }

    /// `POST /export`: returns the rendered report image as opaque bytes.
    pub async fn export_report(&self, request: ExportRequest) -> Result<Vec<u8>, Error> {
        let response = Request::post(&self.export_url())
            .json(&request)?
            .send()
            .await?;
        ensure_ok(&response)?;
        response.binary().await
    }

    fn writers_url(&self) -> String {
        format!("{}/writers", self.base_url)
    }

    fn writer_url(&self, writer_id: &str) -> String {
        format!("{}/writers/{writer_id}", self.base_url)
    }

    fn export_url(&self) -> String {
        format!("{}/export", self.base_url)
    }
}

fn ensure_ok(response: &Response) -> Result<(), Error> {
    if response.ok() {
        Ok(())
    } else {
        Err(Error::GlooError(format!(
            "server responded with {} {}",
            response.status(),
            response.status_text()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn endpoint_urls() {
        let client = ApiClient::new("http://localhost:5000/api");
        assert_eq!(client.writers_url(), "http://localhost:5000/api/writers");
        assert_eq!(client.writer_url("42"), "http://localhost:5000/api/writers/42");
        assert_eq!(client.export_url(), "http://localhost:5000/api/export");
    }
}
