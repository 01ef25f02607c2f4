//! Async announcement operations over an `HttpTransport`.
//!
//! # Design
//! Each operation is build, execute, parse. On failure one `error` event
//! tagged with the operation name is emitted and the original `ApiError` is
//! returned unchanged. Nothing is retried and nothing is cached, so calls
//! are independent and may run concurrently.

use serde::Serialize;
use tracing::{debug, error};

use crate::client::AnnouncementClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::transport::ReqwestTransport;
use crate::types::Announcement;

/// The six announcement operations bound to a base URL and a transport.
#[derive(Debug, Clone)]
pub struct Announcements<T> {
    client: AnnouncementClient,
    transport: T,
}

impl Announcements<ReqwestTransport> {
    /// Build a reqwest-backed client from configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(AnnouncementClient::new(&config.base_url), transport))
    }
}

impl<T: HttpTransport> Announcements<T> {
    pub fn new(client: AnnouncementClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &AnnouncementClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mentor's own announcements.
    pub async fn list_mentor_announcements(&self) -> Result<Announcement, ApiError> {
        let request = self.client.build_list_mentor_announcements();
        self.execute(request)
            .await
            .and_then(|r| self.client.parse_list_mentor_announcements(r))
            .inspect_err(log_failure("list_mentor_announcements", "fetching announcements"))
    }

    pub async fn create_announcement<P>(&self, payload: &P) -> Result<Announcement, ApiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let result = match self.client.build_create_announcement(payload) {
            Ok(request) => self
                .execute(request)
                .await
                .and_then(|r| self.client.parse_create_announcement(r)),
            Err(e) => Err(e),
        };
        result.inspect_err(log_failure("create_announcement", "creating announcement"))
    }

    pub async fn update_announcement<P>(&self, id: &str, payload: &P) -> Result<Announcement, ApiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let result = match self.client.build_update_announcement(id, payload) {
            Ok(request) => self
                .execute(request)
                .await
                .and_then(|r| self.client.parse_update_announcement(r)),
            Err(e) => Err(e),
        };
        result.inspect_err(log_failure("update_announcement", "updating announcement"))
    }

    pub async fn delete_announcement(&self, id: &str) -> Result<(), ApiError> {
        let request = self.client.build_delete_announcement(id);
        self.execute(request)
            .await
            .and_then(|r| self.client.parse_delete_announcement(r))
            .inspect_err(log_failure("delete_announcement", "deleting announcement"))
    }

    /// Announcements visible on the student dashboard. A separate endpoint
    /// from the mentor listing, not a filtered variant of it.
    pub async fn list_student_announcements(&self) -> Result<Announcement, ApiError> {
        let request = self.client.build_list_student_announcements();
        self.execute(request)
            .await
            .and_then(|r| self.client.parse_list_student_announcements(r))
            .inspect_err(log_failure(
                "list_student_announcements",
                "fetching student announcements",
            ))
    }

    pub async fn mark_announcement_read(&self, id: &str) -> Result<Announcement, ApiError> {
        let request = self.client.build_mark_announcement_read(id);
        self.execute(request)
            .await
            .and_then(|r| self.client.parse_mark_announcement_read(r))
            .inspect_err(log_failure("mark_announcement_read", "marking announcement as read"))
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

fn log_failure(operation: &'static str, action: &'static str) -> impl Fn(&ApiError) {
    move |err: &ApiError| error!(operation, error = %err, "error {action}")
}
