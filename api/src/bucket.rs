//! Day Bucketer: group timestamped records into calendar-day sections.

use crate::context::SportContext;
use crate::{Event, Transaction};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

pub const UNDATED_LABEL: &str = "Date TBD";

pub trait Timestamped {
    fn timestamp(&self) -> Option<DateTime<Utc>>;
}

impl Timestamped for Event {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.start
    }
}

impl Timestamped for Transaction {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<T> {
    /// `None` only for the trailing undated bucket.
    pub date: Option<NaiveDate>,
    pub label: String,
    pub items: Vec<T>,
}

/// Bucket by the viewer's local calendar day.
pub fn bucket_by_day<T: Timestamped>(items: impl IntoIterator<Item = T>) -> Vec<DayBucket<T>> {
    bucket_by_day_in(items, &Local)
}

/// Buckets are created in first-seen order, then sorted by the underlying
/// date (never by label text). Records keep their input order within a
/// bucket; undated records trail in a single "Date TBD" bucket.
pub fn bucket_by_day_in<T, Tz>(items: impl IntoIterator<Item = T>, tz: &Tz) -> Vec<DayBucket<T>>
where
    T: Timestamped,
    Tz: TimeZone,
{
    let mut buckets: Vec<DayBucket<T>> = Vec::new();
    for item in items {
        let date = item.timestamp().map(|ts| ts.with_timezone(tz).date_naive());
        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.items.push(item),
            None => buckets.push(DayBucket {
                date,
                label: date.map(day_label).unwrap_or_else(|| UNDATED_LABEL.to_owned()),
                items: vec![item],
            }),
        }
    }
    buckets.sort_by_key(|b| (b.date.is_none(), b.date));
    buckets
}

/// Medium date label: "Oct 18, 2026".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Section subtitle: "1 Game", "3 Races", "2 Matches".
pub fn bucket_subtitle(ctx: &SportContext, count: usize) -> String {
    let profile = ctx.sport_profile();
    let noun = if count == 1 { profile.event_noun } else { profile.event_noun_plural };
    format!("{count} {noun}")
}
