use crate::filter::ActivityFilter;
use crate::filter::DateRange;
use crate::store::KvStore;
use crate::types::ActivityKind;
use crate::types::ActivityRecord;
use crate::types::ActivityStats;
use crate::types::NewActivity;
use anyhow::Context;
use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

/// Storage key holding the serialized activity collection.
pub const ACTIVITY_KEY: &str = "activity.json";

/// Maximum records retained; oldest evicted first on overflow.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default entry count for `get_recent_activities`.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Receives failures the log swallows to honor its fail-soft contract.
/// Injectable so hosts can surface silent data loss.
pub trait DiagnosticsSink: Send + Sync {
    fn storage_failure(&self, op: &str, err: &anyhow::Error);
}

/// Default sink: one structured log line, nothing surfaced to the caller.
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn storage_failure(&self, op: &str, err: &anyhow::Error) {
        tracing::warn!("activity log {op} failed: {err:#}");
    }
}

/// Bounded, filterable log of user actions.
///
/// An explicit handle owning its storage key rather than a process-wide
/// singleton. Every public operation is total: reads fail soft to an empty
/// result, writes fail soft to a no-op, and swallowed failures are reported
/// to the diagnostics sink.
pub struct ActivityLog {
    store: Box<dyn KvStore>,
    key: String,
    capacity: usize,
    sink: Box<dyn DiagnosticsSink>,
    // Serializes the read-modify-write cycle between writers sharing this
    // handle; the underlying store offers no such guarantee.
    write_lock: Mutex<()>,
}

impl ActivityLog {
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self {
            store,
            key: ACTIVITY_KEY.to_string(),
            capacity: DEFAULT_CAPACITY,
            sink: Box::new(TracingSink),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn DiagnosticsSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Append one record. Never fails: on storage trouble the record is
    /// dropped and the failure goes to the diagnostics sink.
    pub fn record(&self, activity: NewActivity) {
        if let Err(err) = self.try_record(activity) {
            self.sink.storage_failure("record", &err);
        }
    }

    fn try_record(&self, activity: NewActivity) -> anyhow::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("activity write lock poisoned"))?;
        let mut records = self.read_records()?;
        let now = Local::now();
        let record = ActivityRecord {
            id: new_record_id(&now),
            kind: activity.kind,
            title: activity.title,
            description: activity.description,
            metadata: activity.metadata,
            timestamp: now.to_rfc3339(),
            user_id: activity.user_id,
        };
        records.insert(0, record);
        records.truncate(self.capacity);
        let doc = serde_json::to_string(&records).context("serialize activity collection")?;
        self.store.set(&self.key, &doc)
    }

    fn read_records(&self) -> anyhow::Result<Vec<ActivityRecord>> {
        let Some(doc) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&doc).context("parse activity collection")
    }

    /// Filtered view, newest first. Storage failures yield an empty list.
    pub fn get_activities(&self, filter: &ActivityFilter) -> Vec<ActivityRecord> {
        let records = match self.read_records() {
            Ok(records) => records,
            Err(err) => {
                self.sink.storage_failure("get_activities", &err);
                return Vec::new();
            }
        };
        let cutoff = filter.date_range.cutoff(Local::now());
        records
            .into_iter()
            .filter(|r| filter.matches(r, cutoff))
            .collect()
    }

    /// First `limit` records from the last week, newest first.
    pub fn get_recent_activities(&self, limit: usize) -> Vec<ActivityRecord> {
        let mut out = self.get_activities(&ActivityFilter {
            date_range: DateRange::Week,
            ..Default::default()
        });
        out.truncate(limit);
        out
    }

    pub fn get_activities_by_kind(&self, kind: ActivityKind) -> Vec<ActivityRecord> {
        self.get_activities(&ActivityFilter {
            kind: Some(kind),
            ..Default::default()
        })
    }

    pub fn get_activities_by_user(&self, user_id: &str) -> Vec<ActivityRecord> {
        self.get_activities(&ActivityFilter {
            user_id: Some(user_id.to_string()),
            ..Default::default()
        })
    }

    /// Drop the whole collection. The only deletion the log supports.
    pub fn clear(&self) {
        if let Err(err) = self.try_clear() {
            self.sink.storage_failure("clear", &err);
        }
    }

    fn try_clear(&self) -> anyhow::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("activity write lock poisoned"))?;
        self.store.remove(&self.key)
    }

    /// Single pass over the unfiltered collection. The time buckets use the
    /// same cutoffs as `get_activities` and overlap by design.
    pub fn stats(&self) -> ActivityStats {
        let records = match self.read_records() {
            Ok(records) => records,
            Err(err) => {
                self.sink.storage_failure("stats", &err);
                return ActivityStats::default();
            }
        };
        let now = Local::now();
        let today = DateRange::Today.cutoff(now);
        let week = DateRange::Week.cutoff(now);
        let month = DateRange::Month.cutoff(now);
        let mut stats = ActivityStats {
            total: records.len() as u64,
            ..Default::default()
        };
        for record in &records {
            if let Ok(ts) = DateTime::parse_from_rfc3339(&record.timestamp) {
                let ts = ts.with_timezone(&Utc);
                if today.is_some_and(|c| ts >= c) {
                    stats.today += 1;
                }
                if week.is_some_and(|c| ts >= c) {
                    stats.this_week += 1;
                }
                if month.is_some_and(|c| ts >= c) {
                    stats.this_month += 1;
                }
            }
            *stats
                .by_type
                .entry(record.kind.as_str().to_string())
                .or_insert(0) += 1;
        }
        stats
    }

    // Typed recorders. These encode the only business rules in the
    // component: the sentence a domain event becomes in the log.

    pub fn record_appointment_created(
        &self,
        appointment_id: &str,
        date: &str,
        location: &str,
        user_id: Option<&str>,
    ) {
        let mut metadata = serde_json::Map::new();
        metadata.insert("appointmentId".to_string(), appointment_id.into());
        metadata.insert("date".to_string(), date.into());
        metadata.insert("location".to_string(), location.into());
        self.record(NewActivity {
            kind: ActivityKind::AppointmentCreated,
            title: "Appointment Booked".to_string(),
            description: format!("Blood donation appointment at {location} on {date}"),
            metadata,
            user_id: user_id.map(str::to_string),
        });
    }

    pub fn record_campaign_created(&self, campaign_id: &str, name: &str, user_id: Option<&str>) {
        let mut metadata = serde_json::Map::new();
        metadata.insert("campaignId".to_string(), campaign_id.into());
        metadata.insert("name".to_string(), name.into());
        self.record(NewActivity {
            kind: ActivityKind::CampaignCreated,
            title: "Campaign Created".to_string(),
            description: format!("Created blood donation campaign \"{name}\""),
            metadata,
            user_id: user_id.map(str::to_string),
        });
    }

    pub fn record_campaign_joined(&self, campaign_id: &str, name: &str, user_id: Option<&str>) {
        let mut metadata = serde_json::Map::new();
        metadata.insert("campaignId".to_string(), campaign_id.into());
        metadata.insert("name".to_string(), name.into());
        self.record(NewActivity {
            kind: ActivityKind::CampaignJoined,
            title: "Campaign Joined".to_string(),
            description: format!("Registered for campaign \"{name}\""),
            metadata,
            user_id: user_id.map(str::to_string),
        });
    }

    pub fn record_donation_completed(&self, location: &str, volume_ml: u32, user_id: Option<&str>) {
        let mut metadata = serde_json::Map::new();
        metadata.insert("location".to_string(), location.into());
        metadata.insert("volume".to_string(), volume_ml.into());
        self.record(NewActivity {
            kind: ActivityKind::DonationCompleted,
            title: "Donation Completed".to_string(),
            description: format!("Donated {volume_ml} ml at {location}"),
            metadata,
            user_id: user_id.map(str::to_string),
        });
    }

    pub fn record_profile_updated(&self, fields: &[String], user_id: Option<&str>) {
        let mut metadata = serde_json::Map::new();
        metadata.insert(
            "fields".to_string(),
            serde_json::Value::Array(fields.iter().map(|f| f.as_str().into()).collect()),
        );
        self.record(NewActivity {
            kind: ActivityKind::ProfileUpdated,
            title: "Profile Updated".to_string(),
            description: format!("Updated profile: {}", fields.join(", ")),
            metadata,
            user_id: user_id.map(str::to_string),
        });
    }
}

fn new_record_id(now: &DateTime<Local>) -> String {
    // Millisecond prefix plus a short random suffix; uniqueness is
    // best-effort, the same contract the app's stored ids carry.
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now.timestamp_millis(), &suffix[..8])
}
