//! When the next daily rollover is due, and where "now" comes from.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone};
use std::sync::{Mutex, PoisonError};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Returns local midnight of the calendar day after `now`, in `now`'s own zone.
///
/// Steps to the next calendar date and resolves midnight there rather than
/// adding a fixed 24 hours, so 23h and 25h DST days still land on midnight.
/// Where a zone skips midnight, the first instant that exists on that day is
/// returned; where midnight occurs twice, the earlier one.
#[must_use]
pub fn next_rollover<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let next_day = now
        .date_naive()
        .succ_opt()
        .and_then(|date| date.and_hms_opt(0, 0, 0));

    next_day
        .and_then(|midnight| first_existing_instant(&tz, midnight))
        .unwrap_or_else(|| {
            // Only reachable at the very end of chrono's date range.
            now.clone()
                .checked_add_signed(TimeDelta::days(1))
                .unwrap_or_else(|| now.clone())
        })
}

/// Walks forward minute by minute until the local wall time maps to a real instant.
fn first_existing_instant<Tz: TimeZone>(tz: &Tz, start: NaiveDateTime) -> Option<DateTime<Tz>> {
    (0..MINUTES_PER_DAY).find_map(|offset| {
        resolve_local(tz.from_local_datetime(&(start + TimeDelta::minutes(offset))))
    })
}

/// Picks the chronologically first mapping. `LocalResult::earliest` returns
/// whichever comes first in the tuple, and not every zone orders it by time.
fn resolve_local<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    match result {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(a, b) => Some(a.min(b)),
        LocalResult::None => None,
    }
}

/// Time source for the writer. Rotation decisions and line timestamps both read it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock in the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that only moves when told to.
///
/// Lets tests and replay tools drive a writer across midnight without waiting for it.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Local>>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(at: DateTime<Local>) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn set(&self, at: DateTime<Local>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
