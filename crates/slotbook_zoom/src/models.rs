// --- File: crates/slotbook_zoom/src/models.rs ---
//! Request and response shapes on both sides of the proxy.
//!
//! `Zoom*` types mirror the provider's JSON. `Meeting` and
//! `CreateMeetingRequest` are what the calendar client sends and receives.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Zoom's meeting type for a scheduled, non-recurring meeting.
pub const SCHEDULED_MEETING_TYPE: u8 = 2;

// Zoom sends `null` for fields it has no value for; treat that like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A meeting as Zoom returns it. Only the fields the proxy forwards are kept.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomMeeting {
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
}

/// Envelope of `GET /users/{userId}/meetings`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomMeetingList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meetings: Vec<ZoomMeeting>,
}

/// Body of `POST /users/{userId}/meetings`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ZoomMeetingRequest {
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub topic: String,
    pub start_time: String, // yyyy-MM-ddTHH:mm:ssZ
    pub duration: i64,
}

/// A meeting in the simplified schema served to the calendar client.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration: i64,
    #[cfg_attr(feature = "openapi", schema(example = "2021-05-10T18:46:02Z"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = "Sync"))]
    pub topic: String,
}

impl From<ZoomMeeting> for Meeting {
    fn from(meeting: ZoomMeeting) -> Self {
        Self {
            duration: meeting.duration,
            start_time: meeting.start_time,
            topic: meeting.topic,
        }
    }
}

impl From<&ZoomMeeting> for Meeting {
    fn from(meeting: &ZoomMeeting) -> Self {
        Self::from(meeting.clone())
    }
}

/// Booking request from the calendar client.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Sync"))]
    pub topic: String,
    /// RFC 3339 timestamp in UTC; fractional seconds are dropped.
    #[cfg_attr(feature = "openapi", schema(example = "2021-05-10T18:46:02.885Z"))]
    pub start_time: String,
    /// Length in minutes.
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meeting_serializes_camel_case() {
        let meeting = Meeting {
            duration: 60,
            start_time: "2021-05-10T18:46:02Z".to_string(),
            topic: "Test Meeting 1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&meeting).unwrap(),
            json!({"duration": 60, "startTime": "2021-05-10T18:46:02Z", "topic": "Test Meeting 1"})
        );
    }

    #[test]
    fn test_provider_request_uses_type_key() {
        let request = ZoomMeetingRequest {
            meeting_type: SCHEDULED_MEETING_TYPE,
            topic: "Sync".to_string(),
            start_time: "2021-05-10T18:46:02Z".to_string(),
            duration: 30,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"type": 2, "topic": "Sync", "start_time": "2021-05-10T18:46:02Z", "duration": 30})
        );
    }

    #[test]
    fn test_meeting_list_tolerates_missing_envelope_and_extra_fields() {
        let empty: ZoomMeetingList = serde_json::from_value(json!({"page_size": 30})).unwrap();
        assert!(empty.meetings.is_empty());

        let list: ZoomMeetingList = serde_json::from_value(json!({
            "meetings": [{
                "uuid": "abc==",
                "id": 123456789,
                "topic": "Standup",
                "type": 2,
                "start_time": "2021-05-10T09:32:13Z",
                "duration": 15,
                "timezone": "Europe/Paris",
                "join_url": "https://zoom.us/j/123456789"
            }]
        }))
        .unwrap();
        assert_eq!(
            list.meetings,
            vec![ZoomMeeting {
                topic: "Standup".to_string(),
                start_time: "2021-05-10T09:32:13Z".to_string(),
                duration: 15,
            }]
        );
    }

    #[test]
    fn test_null_values_fall_back_to_defaults() {
        let empty: ZoomMeetingList = serde_json::from_value(json!({"meetings": null})).unwrap();
        assert!(empty.meetings.is_empty());

        let list: ZoomMeetingList = serde_json::from_value(json!({
            "meetings": [
                {"topic": null, "start_time": "2021-05-10T09:32:13Z", "duration": 15},
                {"topic": "Standup", "start_time": null, "duration": null}
            ]
        }))
        .unwrap();
        assert_eq!(
            list.meetings,
            vec![
                ZoomMeeting {
                    topic: String::new(),
                    start_time: "2021-05-10T09:32:13Z".to_string(),
                    duration: 15,
                },
                ZoomMeeting {
                    topic: "Standup".to_string(),
                    start_time: String::new(),
                    duration: 0,
                },
            ]
        );
    }

    #[test]
    fn test_wrong_types_are_still_rejected() {
        let result = serde_json::from_value::<ZoomMeetingList>(json!({"meetings": "none"}));
        assert!(result.is_err());
    }
}
