use serde::{Deserialize, Serialize};

use crate::domain::AttendanceStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub roll_number: String,
    pub manual: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAttendanceRequest {
    pub roll_number: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureFrameRequest {
    /// `data:image/jpeg;base64,...`
    pub image: String,
}

/// Success body of `/attendance/mark` and `/attendance/manual`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceAck {
    pub message: String,
}

/// Per-semester summary as computed by the attendance backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub attended: u32,
    pub missed: i64,
    pub left: i64,
    pub percent: f64,
    pub required_for_75: u32,
    pub can_miss: u32,
}

/// `/attendance/stats/{roll_number}` answers either with the dashboard
/// snapshot shape or with the backend's semester summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatsResponse {
    Snapshot(AttendanceStats),
    Summary(StatsSummary),
}

impl StatsResponse {
    pub fn percent(&self) -> f64 {
        match self {
            StatsResponse::Snapshot(stats) => stats.current_percentage,
            StatsResponse::Summary(summary) => summary.percent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureDetectResponse {
    #[serde(default)]
    pub gesture: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_accepts_snapshot_shape() {
        let parsed: StatsResponse = serde_json::from_str(
            r#"{"currentPercentage":78,"classesAttended":23,"totalClasses":30,"classesNeeded":3}"#,
        )
        .expect("snapshot");
        assert!(matches!(parsed, StatsResponse::Snapshot(ref s) if s.classes_attended == 23));
        assert_eq!(parsed.percent(), 78.0);
    }

    #[test]
    fn stats_accepts_backend_summary_shape() {
        let parsed: StatsResponse = serde_json::from_str(
            r#"{"attended":3,"missed":1,"left":96,"percent":75.0,"required_for_75":72,"can_miss":24}"#,
        )
        .expect("summary");
        assert!(matches!(parsed, StatsResponse::Summary(ref s) if s.required_for_75 == 72));
    }

    #[test]
    fn stats_rejects_unknown_shape() {
        assert!(serde_json::from_str::<StatsResponse>(r#"{"ok":true}"#).is_err());
    }

    #[test]
    fn detect_response_tolerates_null_key() {
        let parsed: GestureDetectResponse =
            serde_json::from_str(r#"{"gesture":"none","emoji":"","key":null}"#).expect("detect");
        assert_eq!(parsed.key, None);
        assert_eq!(parsed.gesture.as_deref(), Some("none"));
    }
}
