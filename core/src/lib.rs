//! Client core for the mentor/student announcements API, plus the campus
//! display-name table.
//!
//! # Overview
//! `AnnouncementClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. `Announcements` drives it over an
//! `HttpTransport` (reqwest in production, a stub in tests) and logs each
//! failure once before handing the original error back.
//!
//! # Design
//! - `AnnouncementClient` is stateless: it holds only `base_url`.
//! - Response bodies are returned as decoded JSON, unvalidated.
//! - `campus` is pure lookup over a static table.

pub mod api;
pub mod campus;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::Announcements;
pub use campus::{all_campuses, campus_type, full_name, short_name, CampusEntry};
pub use client::AnnouncementClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use transport::ReqwestTransport;
pub use types::{Announcement, AnnouncementDraft, Priority};
