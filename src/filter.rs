//! Recency filtering for collected articles
//!
//! The portal renders article ages as relative strings (`"· 3 hours ago"`).
//! This module normalizes them to absolute timestamps and drops articles
//! older than a configured number of months.
//!
//! Both functions take `now` explicitly so the conversion is deterministic
//! under test; the session controller passes `Local::now()`.

use chrono::{DateTime, Local, Months, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extract::Article;

/// Relative-time grammar as rendered by the portal: a leading `·` separator
/// glyph, an integer count, a unit, and the word `ago`.
static RELATIVE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^·\s*(\d+)\s+(minute|minutes|hour|hours|day|days|week|weeks|month|months|year|years)\s+ago",
    )
    .expect("relative time pattern is a valid regex")
});

/// Convert a relative-time string to an absolute timestamp.
///
/// Minutes, hours, days and weeks subtract exact durations; months and years
/// are approximated as 30 and 365 days respectively. Anything the grammar
/// does not recognize resolves to `now`, so an unparseable age always
/// survives the subsequent cutoff filter.
#[must_use]
pub fn relative_time_to_absolute(relative_time: &str, now: DateTime<Local>) -> DateTime<Local> {
    let Some(captures) = RELATIVE_TIME.captures(relative_time) else {
        debug!(text = %relative_time, "unrecognized relative time, treating as just published");
        return now;
    };

    let Ok(value) = captures[1].parse::<i64>() else {
        return now;
    };
    let unit = &captures[2];

    let delta = if unit.starts_with("minute") {
        TimeDelta::try_minutes(value)
    } else if unit.starts_with("hour") {
        TimeDelta::try_hours(value)
    } else if unit.starts_with("day") {
        TimeDelta::try_days(value)
    } else if unit.starts_with("week") {
        TimeDelta::try_weeks(value)
    } else if unit.starts_with("month") {
        TimeDelta::try_days(value.saturating_mul(30))
    } else {
        TimeDelta::try_days(value.saturating_mul(365))
    };

    match delta {
        Some(delta) => now - delta,
        None => now,
    }
}

/// Retain only articles whose resolved absolute time is on or after
/// `now - months`. The cutoff subtraction is calendar-aware, unlike the
/// per-article unit conversion above.
#[must_use]
pub fn filter_by_months(articles: Vec<Article>, months: u32, now: DateTime<Local>) -> Vec<Article> {
    let Some(cutoff) = now.checked_sub_months(Months::new(months)) else {
        return articles;
    };

    let before = articles.len();
    let retained: Vec<Article> = articles
        .into_iter()
        .filter(|article| relative_time_to_absolute(&article.relative_time, now) >= cutoff)
        .collect();
    debug!(
        retained = retained.len(),
        dropped = before - retained.len(),
        months,
        "filtered articles by cutoff date"
    );
    retained
}
