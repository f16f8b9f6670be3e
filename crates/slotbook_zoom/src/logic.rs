// --- File: crates/slotbook_zoom/src/logic.rs ---
use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::client::ZoomClient;
use crate::error::ZoomError;
use crate::models::{
    CreateMeetingRequest, Meeting, ZoomMeeting, ZoomMeetingList, ZoomMeetingRequest,
    SCHEDULED_MEETING_TYPE,
};

/// Format Zoom accepts for `start_time` when the meeting is pinned to UTC.
pub const ZOOM_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// --- Paths ---

pub fn user_path(user_id: &str) -> String {
    format!("/users/{}", urlencoding::encode(user_id))
}

pub fn meetings_path(user_id: &str) -> String {
    format!("/users/{}/meetings", urlencoding::encode(user_id))
}

// --- Translation ---

/// Converts a client timestamp into Zoom's `yyyy-MM-ddTHH:mm:ssZ`.
///
/// The input must be RFC 3339 with a UTC offset (`Z` or `+00:00`). Fractional
/// seconds are truncated, not rounded, so `2021-05-10T18:46:02.885Z` becomes
/// `2021-05-10T18:46:02Z`. Other offsets are rejected rather than converted.
pub fn to_provider_start_time(start_time: &str) -> Result<String, ZoomError> {
    let trimmed = start_time.trim();
    if trimmed.is_empty() {
        return Err(ZoomError::ValidationError(
            "startTime is required".to_string(),
        ));
    }

    let parsed = DateTime::parse_from_rfc3339(trimmed).map_err(|e| {
        ZoomError::ValidationError(format!(
            "startTime `{}` is not an RFC 3339 timestamp: {}",
            start_time, e
        ))
    })?;

    if parsed.offset().local_minus_utc() != 0 {
        return Err(ZoomError::ValidationError(format!(
            "startTime `{}` must be in UTC (Z or +00:00), got offset {}",
            start_time,
            parsed.offset()
        )));
    }

    Ok(parsed.with_timezone(&Utc).format(ZOOM_UTC_FORMAT).to_string())
}

/// Maps the provider's list envelope to the simplified schema, keeping order.
pub fn translate_meetings(list: ZoomMeetingList) -> Vec<Meeting> {
    list.meetings.into_iter().map(Meeting::from).collect()
}

impl CreateMeetingRequest {
    /// Rejects a booking Zoom would not accept: blank topic, non-positive
    /// duration, or a start time that is not an RFC 3339 UTC timestamp.
    pub fn validate(&self) -> Result<(), ZoomError> {
        if self.topic.trim().is_empty() {
            return Err(ZoomError::ValidationError(
                "topic must not be empty".to_string(),
            ));
        }
        if self.duration <= 0 {
            return Err(ZoomError::ValidationError(format!(
                "duration must be a positive number of minutes, got {}",
                self.duration
            )));
        }
        to_provider_start_time(&self.start_time)?;
        Ok(())
    }

    /// Validates the request and builds the provider payload from it.
    pub fn into_provider_request(self) -> Result<ZoomMeetingRequest, ZoomError> {
        self.validate()?;
        let start_time = to_provider_start_time(&self.start_time)?;

        Ok(ZoomMeetingRequest {
            meeting_type: SCHEDULED_MEETING_TYPE,
            topic: self.topic,
            start_time,
            duration: self.duration,
        })
    }
}

// --- Operations ---

/// Returns the profile of `username` exactly as Zoom sends it.
pub async fn fetch_profile(client: &ZoomClient, username: &str) -> Result<Value, ZoomError> {
    let profile: Value = client.get(&user_path(username)).await?;
    debug!("Fetched Zoom profile for configured user");
    Ok(profile)
}

/// Lists the meetings of `user_id` in the simplified schema.
pub async fn list_meetings(client: &ZoomClient, user_id: &str) -> Result<Vec<Meeting>, ZoomError> {
    let list: ZoomMeetingList = client.get(&meetings_path(user_id)).await?;
    let meetings = translate_meetings(list);
    info!(count = meetings.len(), "Listed Zoom meetings");
    Ok(meetings)
}

/// Books a meeting for `user_id`.
///
/// The request is validated before anything is sent; an invalid request never reaches Zoom.
pub async fn create_meeting(
    client: &ZoomClient,
    user_id: &str,
    request: CreateMeetingRequest,
) -> Result<Meeting, ZoomError> {
    let payload = request.into_provider_request()?;
    debug!(start_time = %payload.start_time, duration = payload.duration, "Booking Zoom meeting");

    let created: ZoomMeeting = client.post(&meetings_path(user_id), &payload).await?;
    info!(start_time = %created.start_time, "Zoom meeting created");
    Ok(Meeting::from(created))
}
