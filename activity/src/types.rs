use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Closed set of actions the log records. Arbitrary type strings are not
/// representable; callers go through the typed recorders or construct a
/// variant explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    AppointmentCreated,
    CampaignCreated,
    CampaignJoined,
    DonationCompleted,
    ProfileUpdated,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::AppointmentCreated => "appointment_created",
            ActivityKind::CampaignCreated => "campaign_created",
            ActivityKind::CampaignJoined => "campaign_joined",
            ActivityKind::DonationCompleted => "donation_completed",
            ActivityKind::ProfileUpdated => "profile_updated",
        }
    }
}

impl std::str::FromStr for ActivityKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointment_created" => Ok(ActivityKind::AppointmentCreated),
            "campaign_created" => Ok(ActivityKind::CampaignCreated),
            "campaign_joined" => Ok(ActivityKind::CampaignJoined),
            "donation_completed" => Ok(ActivityKind::DonationCompleted),
            "profile_updated" => Ok(ActivityKind::ProfileUpdated),
            other => anyhow::bail!("unknown activity kind: {other}"),
        }
    }
}

/// One immutable entry in the log. `id` and `timestamp` are assigned at
/// write time; there is no update operation anywhere in the API.
///
/// Wire format matches the app's stored shape: camelCase keys, the kind
/// under `"type"`, `userId` omitted for global records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// RFC 3339, assigned at insertion.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Caller-supplied portion of a record.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub metadata: serde_json::Map<String, serde_json::Value>,
    pub user_id: Option<String>,
}

/// Aggregate counts over the unfiltered collection. The time buckets are
/// independent inclusive supersets: a record counted in `today` also counts
/// in `this_week` and `this_month`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    pub total: u64,
    pub today: u64,
    pub this_week: u64,
    pub this_month: u64,
    pub by_type: BTreeMap<String, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_names() {
        for kind in [
            ActivityKind::AppointmentCreated,
            ActivityKind::CampaignCreated,
            ActivityKind::CampaignJoined,
            ActivityKind::DonationCompleted,
            ActivityKind::ProfileUpdated,
        ] {
            let parsed: ActivityKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("donation".parse::<ActivityKind>().is_err());
    }

    #[test]
    fn record_serializes_with_app_field_names() {
        let record = ActivityRecord {
            id: "1-abc".to_string(),
            kind: ActivityKind::CampaignJoined,
            title: "Campaign Joined".to_string(),
            description: "Registered for campaign \"City Drive\"".to_string(),
            metadata: serde_json::Map::new(),
            timestamp: "2025-07-01T10:00:00+05:30".to_string(),
            user_id: Some("u1".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"campaign_joined\""));
        assert!(json.contains("\"userId\":\"u1\""));

        let record = ActivityRecord {
            user_id: None,
            ..record
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("userId"));
    }
}
