// File: crates/slotbook_zoom/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{CreateMeetingRequest, Meeting};

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Profile of the configured Zoom user, unchanged", body = Object),
        (status = 401, description = "Zoom rejected the credential"),
        (status = 504, description = "Zoom did not answer in time")
    ),
    tag = "Zoom"
)]
fn doc_get_user_handler() {}

#[utoipa::path(
    get,
    path = "/{user_id}/meetings",
    params(
        ("user_id" = String, Path, description = "Zoom user id, as returned by GET /user")
    ),
    responses(
        (status = 200, description = "Meetings in Zoom's order", body = [Meeting]),
        (status = 404, description = "Unknown Zoom user")
    ),
    tag = "Zoom"
)]
fn doc_list_meetings_handler() {}

#[utoipa::path(
    post,
    path = "/{user_id}/meetings",
    params(
        ("user_id" = String, Path, description = "Zoom user id, as returned by GET /user")
    ),
    request_body(content = CreateMeetingRequest, example = json!({
        "topic": "Sync",
        "startTime": "2021-05-10T18:46:02.885Z",
        "duration": 30
    })),
    responses(
        (status = 200, description = "The booked meeting", body = Meeting,
         example = json!({
             "duration": 30,
             "startTime": "2021-05-10T18:46:02Z",
             "topic": "Sync"
         })
        ),
        (status = 400, description = "Missing topic, non-positive duration or startTime not in UTC")
    ),
    tag = "Zoom"
)]
fn doc_create_meeting_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_get_user_handler, doc_list_meetings_handler, doc_create_meeting_handler),
    components(schemas(Meeting, CreateMeetingRequest)),
    tags((name = "Zoom", description = "Zoom meeting proxy"))
)]
pub struct ZoomApiDoc;
