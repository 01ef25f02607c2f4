//! Stateless HTTP request builder and response parser for the announcements API.
//!
//! # Design
//! `AnnouncementClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The round-trip in between is someone else's job, usually
//! `Announcements` driving an `HttpTransport`.
//!
//! Paths keep their trailing slash; the service routes on it.

use serde::Serialize;
use urlencoding::encode;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Announcement;

const MENTOR_ANNOUNCEMENTS: &str = "/mentor/announcements/";
const DASHBOARD_ANNOUNCEMENTS: &str = "/dashboard/announcements/";

/// Synchronous, stateless client for the announcements API.
#[derive(Debug, Clone)]
pub struct AnnouncementClient {
    base_url: String,
}

impl AnnouncementClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Mentor endpoints ──────────────────────────────────────────────────────

    /// `GET /mentor/announcements/`
    pub fn build_list_mentor_announcements(&self) -> HttpRequest {
        self.request(HttpMethod::Get, MENTOR_ANNOUNCEMENTS.to_string(), None)
    }

    /// `POST /mentor/announcements/`
    pub fn build_create_announcement<P>(&self, payload: &P) -> Result<HttpRequest, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = to_json(payload)?;
        Ok(self.request(HttpMethod::Post, MENTOR_ANNOUNCEMENTS.to_string(), Some(body)))
    }

    /// `PUT /mentor/announcements/{id}/`
    pub fn build_update_announcement<P>(&self, id: &str, payload: &P) -> Result<HttpRequest, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = to_json(payload)?;
        Ok(self.request(HttpMethod::Put, mentor_item(id), Some(body)))
    }

    /// `DELETE /mentor/announcements/{id}/`
    pub fn build_delete_announcement(&self, id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, mentor_item(id), None)
    }

    // ── Student endpoints ─────────────────────────────────────────────────────

    /// `GET /dashboard/announcements/`
    pub fn build_list_student_announcements(&self) -> HttpRequest {
        self.request(HttpMethod::Get, DASHBOARD_ANNOUNCEMENTS.to_string(), None)
    }

    /// `POST /dashboard/announcements/{id}/mark-read/`, sent without a body.
    pub fn build_mark_announcement_read(&self, id: &str) -> HttpRequest {
        let path = format!("{DASHBOARD_ANNOUNCEMENTS}{}/mark-read/", encode(id));
        self.request(HttpMethod::Post, path, None)
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    pub fn parse_list_mentor_announcements(&self, response: HttpResponse) -> Result<Announcement, ApiError> {
        parse_body(response)
    }

    pub fn parse_create_announcement(&self, response: HttpResponse) -> Result<Announcement, ApiError> {
        parse_body(response)
    }

    pub fn parse_update_announcement(&self, response: HttpResponse) -> Result<Announcement, ApiError> {
        parse_body(response)
    }

    /// The body of a successful delete is ignored.
    pub fn parse_delete_announcement(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_list_student_announcements(&self, response: HttpResponse) -> Result<Announcement, ApiError> {
        parse_body(response)
    }

    pub fn parse_mark_announcement_read(&self, response: HttpResponse) -> Result<Announcement, ApiError> {
        parse_body(response)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), "application/json".to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }
}

fn mentor_item(id: &str) -> String {
    format!("{MENTOR_ANNOUNCEMENTS}{}/", encode(id))
}

fn to_json<P: Serialize + ?Sized>(payload: &P) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Decode a successful response body. An empty body decodes to `null`.
fn parse_body(response: HttpResponse) -> Result<Announcement, ApiError> {
    check_status(&response)?;
    if response.body.trim().is_empty() {
        return Ok(Announcement::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound {
            body: response.body.clone(),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{AnnouncementDraft, Priority};

    fn client() -> AnnouncementClient {
        AnnouncementClient::new("http://localhost:8000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_mentor_announcements_produces_correct_request() {
        let req = client().build_list_mentor_announcements();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/mentor/announcements/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_announcement_produces_correct_request() {
        let draft = AnnouncementDraft::new("Exam", "Room 101").with_priority(Priority::High);
        let req = client().build_create_announcement(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/mentor/announcements/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"title": "Exam", "content": "Room 101", "priority": "HIGH"}));
    }

    #[test]
    fn build_create_announcement_forwards_arbitrary_payload() {
        let payload = json!({"title": "Only a title", "extra": [1, 2]});
        let req = client().build_create_announcement(&payload).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, payload);
    }

    #[test]
    fn build_update_announcement_targets_item_path() {
        let req = client()
            .build_update_announcement("42", &json!({"title": "Changed"}))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8000/api/mentor/announcements/42/");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_announcement_produces_correct_request() {
        let req = client().build_delete_announcement("42");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/api/mentor/announcements/42/");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_student_announcements_uses_dashboard_path() {
        let req = client().build_list_student_announcements();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/dashboard/announcements/");
    }

    #[test]
    fn build_mark_announcement_read_has_suffix_and_no_body() {
        let req = client().build_mark_announcement_read("7");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.path,
            "http://localhost:8000/api/dashboard/announcements/7/mark-read/"
        );
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn identifiers_are_encoded_as_one_segment() {
        let req = client().build_delete_announcement("a/b c");
        assert_eq!(
            req.path,
            "http://localhost:8000/api/mentor/announcements/a%2Fb%20c/"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = AnnouncementClient::new("http://localhost:8000/api/");
        let req = client.build_list_mentor_announcements();
        assert_eq!(req.path, "http://localhost:8000/api/mentor/announcements/");
    }

    #[test]
    fn parse_returns_body_unmodified() {
        let raw = r#"[{"id":1,"title":"Hi","unexpected":{"nested":true}}]"#;
        let parsed = client()
            .parse_list_mentor_announcements(response(200, raw))
            .unwrap();
        assert_eq!(parsed, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn parse_create_accepts_201() {
        let parsed = client()
            .parse_create_announcement(response(201, r#"{"id":3}"#))
            .unwrap();
        assert_eq!(parsed["id"], 3);
    }

    #[test]
    fn parse_empty_success_body_is_null() {
        let parsed = client()
            .parse_mark_announcement_read(response(204, ""))
            .unwrap();
        assert!(parsed.is_null());
    }

    #[test]
    fn parse_not_found_keeps_body() {
        let err = client()
            .parse_update_announcement(response(404, r#"{"detail":"Not found."}"#))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound {
                body: r#"{"detail":"Not found."}"#.to_string()
            }
        );
    }

    #[test]
    fn parse_wrong_status_keeps_status_and_body() {
        let err = client()
            .parse_list_student_announcements(response(403, "forbidden"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 403,
                body: "forbidden".to_string()
            }
        );
    }

    #[test]
    fn parse_bad_json() {
        let err = client()
            .parse_list_mentor_announcements(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_delete_ignores_body() {
        assert!(client()
            .parse_delete_announcement(response(200, "not json"))
            .is_ok());
        assert!(client().parse_delete_announcement(response(204, "")).is_ok());
    }
}
