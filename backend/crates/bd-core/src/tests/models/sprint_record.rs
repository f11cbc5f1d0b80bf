use crate::validation::MSG_PROGRESS_TOO_LONG;
use crate::{SprintPatch, SprintRecord, SprintSubmission};

use chrono::{Duration, TimeZone, Utc};

fn record() -> SprintRecord {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    SprintRecord::new(
        "sprint-1".to_string(),
        SprintSubmission {
            total_points: 100.0,
            sprint_duration: 10,
            daily_progress: Some(vec![20.0, 15.0]),
        },
        created,
    )
}

#[test]
fn test_new_record_stamps_both_timestamps() {
    let record = record();
    assert_eq!(record.created_at, record.updated_at);
    assert_eq!(record.daily_progress, vec![20.0, 15.0]);
}

#[test]
fn test_new_record_without_progress_has_empty_progress() {
    let record = SprintRecord::new(
        "sprint-2".to_string(),
        SprintSubmission {
            total_points: 5.0,
            sprint_duration: 2,
            daily_progress: None,
        },
        Utc::now(),
    );
    assert!(record.daily_progress.is_empty());
}

#[test]
fn test_merge_keeps_identity_and_creation_time() {
    let original = record();
    let later = original.created_at + Duration::minutes(5);
    let patch = SprintPatch {
        total_points: Some(200.0),
        ..Default::default()
    };

    let merged = original.merged(&patch, later).unwrap();

    assert_eq!(merged.id, original.id);
    assert_eq!(merged.created_at, original.created_at);
    assert_eq!(merged.updated_at, later);
    assert_eq!(merged.total_points, 200.0);
    assert_eq!(merged.daily_progress, original.daily_progress);
}

#[test]
fn test_merge_rejects_duration_shorter_than_progress() {
    let original = record();
    let patch = SprintPatch {
        sprint_duration: Some(1),
        ..Default::default()
    };

    let error = original.merged(&patch, Utc::now()).unwrap_err();
    assert_eq!(error.message(), MSG_PROGRESS_TOO_LONG);
}

#[test]
fn test_submission_converts_to_full_patch() {
    let patch = SprintPatch::from(SprintSubmission {
        total_points: 8.0,
        sprint_duration: 4,
        daily_progress: None,
    });

    assert_eq!(patch.total_points, Some(8.0));
    assert_eq!(patch.sprint_duration, Some(4));
    assert!(patch.daily_progress.is_none());
}

#[test]
fn test_record_serializes_camel_case() {
    let json = serde_json::to_value(record()).unwrap();
    assert_eq!(json["totalPoints"], 100.0);
    assert_eq!(json["sprintDuration"], 10);
    assert!(json["dailyProgress"].is_array());
    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
}
