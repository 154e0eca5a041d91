use crate::error::RasporedError;
use crate::model::{Day, ScheduleRecord};
use crate::records;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Europe::Zagreb;
use chrono_tz::Tz;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike, Property};

/// First Monday of the schedule; every event anchors to this week.
const ANCHOR_MONDAY: (i32, u32, u32) = (2024, 9, 9);

/// Wall-clock times of the seven daily slots, as ((hour, minute) start,
/// (hour, minute) end). Indexed by slot - 1.
const SLOT_TIMES: [((u32, u32), (u32, u32)); 7] = [
    ((8, 0), (8, 45)),
    ((8, 50), (9, 35)),
    ((9, 40), (10, 25)),
    ((10, 40), (11, 25)),
    ((11, 30), (12, 15)),
    ((12, 20), (13, 5)),
    ((13, 10), (13, 55)),
];

const LOCATION: &str = "Room 101";
const DESCRIPTION: &str = "Replace this with the actual event details";

/// Start/end wall-clock time for a 1-based slot index.
pub fn slot_times(slot: u32) -> Option<((u32, u32), (u32, u32))> {
    if slot >= 1 && slot as usize <= SLOT_TIMES.len() {
        Some(SLOT_TIMES[(slot - 1) as usize])
    } else {
        None
    }
}

/// A builder input line that was dropped, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Result of a calendar build: the document plus per-line diagnostics.
pub struct CalendarBuild {
    pub calendar: Calendar,
    pub events: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Build a calendar of biweekly recurring events from record lines.
///
/// Each input line is `day, label, slot-index`. Malformed lines, unknown
/// day codes and out-of-range slot indices are skipped and reported via
/// `CalendarBuild::skipped`; they never abort the run. An empty input
/// produces an empty calendar.
pub fn build_calendar(input: &str) -> Result<CalendarBuild, RasporedError> {
    let mut calendar = Calendar::new();
    let mut skipped = Vec::new();
    let mut events = 0;

    for (index, raw) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let record = match records::parse_line(line) {
            Ok(record) => record,
            Err(reason) => {
                skipped.push(SkippedLine {
                    line_number,
                    line: line.to_string(),
                    reason,
                });
                continue;
            }
        };

        let Some(((start_h, start_m), (end_h, end_m))) = slot_times(record.slot) else {
            skipped.push(SkippedLine {
                line_number,
                line: line.to_string(),
                reason: format!(
                    "slot index {} outside 1..={}",
                    record.slot,
                    SLOT_TIMES.len()
                ),
            });
            continue;
        };

        let date = event_date(record.day).ok_or_else(|| {
            RasporedError::Calendar(format!("invalid anchor date for {}", record.day))
        })?;
        let start = localize(date, start_h, start_m).ok_or_else(|| {
            RasporedError::Calendar(format!(
                "{start_h:02}:{start_m:02} on {date} is not a valid local time"
            ))
        })?;
        let end = localize(date, end_h, end_m).ok_or_else(|| {
            RasporedError::Calendar(format!(
                "{end_h:02}:{end_m:02} on {date} is not a valid local time"
            ))
        })?;

        calendar.push(build_event(&record, start, end));
        events += 1;
    }

    Ok(CalendarBuild {
        calendar,
        events,
        skipped,
    })
}

/// The anchored date for a day: the fixed Monday plus the weekday offset.
fn event_date(day: Day) -> Option<NaiveDate> {
    let (year, month, day_of_month) = ANCHOR_MONDAY;
    NaiveDate::from_ymd_opt(year, month, day_of_month)?.checked_add_days(Days::new(day.offset()))
}

fn localize(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Zagreb.from_local_datetime(&date.and_time(time)).single()
}

fn zoned(dt: DateTime<Tz>) -> CalendarDateTime {
    CalendarDateTime::WithTimezone {
        date_time: dt.naive_local(),
        tzid: dt.timezone().name().to_string(),
    }
}

/// One VEVENT with a biweekly recurrence scoped to the record's weekday.
///
/// UID and DTSTAMP are derived from the start timestamp so repeated runs
/// over the same input serialize identically.
fn build_event(record: &ScheduleRecord, start: DateTime<Tz>, end: DateTime<Tz>) -> Event {
    let uid = format!("{}-raspored@localhost", start.format("%Y%m%dT%H%M%S"));
    let rrule = format!("FREQ=WEEKLY;INTERVAL=2;BYDAY={}", record.day.code());

    Event::new()
        .summary(&record.label)
        .starts(zoned(start))
        .ends(zoned(end))
        .location(LOCATION)
        .description(DESCRIPTION)
        .uid(&uid)
        .timestamp(start.with_timezone(&Utc))
        .append_property(Property::new("RRULE", &rrule))
        .done()
}
