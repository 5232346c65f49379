use crate::engine::collectable::{Collectable, Month};
use chrono::{DateTime, Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    All,
    ThisMonth,
    RightNow,
}

impl TimeFilter {
    /// Time phrase used in summary sentences
    pub fn phrase(&self) -> &str {
        match self {
            TimeFilter::All => "total",
            TimeFilter::ThisMonth => "this month",
            TimeFilter::RightNow => "right now",
        }
    }

    /// Short title for the status bar
    pub fn title(&self) -> &str {
        match self {
            TimeFilter::All => "All",
            TimeFilter::ThisMonth => "This Month",
            TimeFilter::RightNow => "Right Now",
        }
    }

    pub fn next(&self) -> TimeFilter {
        match self {
            TimeFilter::All => TimeFilter::ThisMonth,
            TimeFilter::ThisMonth => TimeFilter::RightNow,
            TimeFilter::RightNow => TimeFilter::All,
        }
    }
}

/// Filters a catalog down to what the time filter allows and annotates every
/// returned record with its month string and last-month flag. Returns fresh
/// copies; the cached catalog is never touched, so two views with different
/// filters cannot alias each other's annotations.
pub fn available_at(
    catalog: &[Collectable],
    filter: TimeFilter,
    now: DateTime<Local>,
) -> Vec<Collectable> {
    let current_month = match Month::from_number(now.month()) {
        Some(m) => m,
        None => return Vec::new(),
    };
    let current_hour = now.hour();

    catalog
        .iter()
        .filter(|c| match filter {
            TimeFilter::All => true,
            TimeFilter::ThisMonth => c.months_northern.contains(&current_month),
            TimeFilter::RightNow => {
                c.months_northern.contains(&current_month) && is_active_now(c, current_hour)
            }
        })
        .map(|c| annotate(c, current_month))
        .collect()
}

/// Hour-of-day availability test. timeStart == timeEnd == 0 means all day;
/// some critters have overnight spans (e.g. 19 -> 4).
// TODO: fold second_time_start/second_time_end into this check; the fields
// are parsed from the assets but not consulted yet.
pub fn is_active_now(collectable: &Collectable, hour: u32) -> bool {
    if collectable.time_start == 0 && collectable.time_end == 0 {
        return true;
    }

    if collectable.time_start > collectable.time_end {
        return hour >= collectable.time_start || hour < collectable.time_end;
    }

    hour >= collectable.time_start && hour < collectable.time_end
}

/// Space-joined display labels in fixed calendar order.
pub fn month_labels(months: &[Month]) -> String {
    Month::ALL
        .iter()
        .filter(|m| months.contains(m))
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(" ")
}

// The last-month check reads the unfiltered monthly membership: even in the
// All view, a record available this month but not next month gets the flag.
fn annotate(collectable: &Collectable, current_month: Month) -> Collectable {
    let mut out = collectable.clone();
    out.months = month_labels(&collectable.months_northern);
    out.is_last_month = collectable.months_northern.contains(&current_month)
        && !collectable.months_northern.contains(&current_month.next());
    out
}
