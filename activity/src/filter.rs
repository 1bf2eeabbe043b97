use crate::types::ActivityKind;
use crate::types::ActivityRecord;
use chrono::DateTime;
use chrono::Duration;
use chrono::Local;
use chrono::Utc;

/// Time window for queries and stats. `Week` and `Month` are fixed 7x24h and
/// 30x24h windows from "now", not calendar-aware; `Today` starts at local
/// midnight. This wall-clock-naive behavior matches the app's stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl DateRange {
    /// Inclusive lower bound for the range; `None` means unbounded.
    pub fn cutoff(&self, now: DateTime<Local>) -> Option<DateTime<Utc>> {
        match self {
            DateRange::Today => {
                let midnight = now
                    .date_naive()
                    .and_hms_opt(0, 0, 0)
                    .and_then(|m| m.and_local_timezone(Local).earliest())
                    .unwrap_or(now);
                Some(midnight.with_timezone(&Utc))
            }
            DateRange::Week => Some((now - Duration::days(7)).with_timezone(&Utc)),
            DateRange::Month => Some((now - Duration::days(30)).with_timezone(&Utc)),
            DateRange::All => None,
        }
    }
}

impl std::str::FromStr for DateRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "all" => Ok(DateRange::All),
            other => anyhow::bail!("unknown date range: {other}"),
        }
    }
}

/// Query over the collection. Provided fields AND together.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    pub kind: Option<ActivityKind>,
    pub date_range: DateRange,
    /// Exact match; records without an owner never match a user filter.
    pub user_id: Option<String>,
    /// Case-insensitive substring over title OR description.
    pub search: Option<String>,
}

impl ActivityFilter {
    pub(crate) fn matches(&self, record: &ActivityRecord, cutoff: Option<DateTime<Utc>>) -> bool {
        if let Some(kind) = self.kind
            && record.kind != kind
        {
            return false;
        }
        if let Some(user) = &self.user_id
            && record.user_id.as_deref() != Some(user.as_str())
        {
            return false;
        }
        if let Some(cutoff) = cutoff {
            // Unparseable timestamps never match a bounded range.
            match DateTime::parse_from_rfc3339(&record.timestamp) {
                Ok(ts) if ts.with_timezone(&Utc) >= cutoff => {}
                _ => return false,
            }
        }
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            if !record.title.to_lowercase().contains(&needle)
                && !record.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}
