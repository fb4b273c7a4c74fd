//! Occurrence expansion for the calendar view.
//!
//! Turns a parsed iCalendar feed into a flat, time-bounded list of concrete
//! occurrences. Recurrence rules may be unbounded ("every week, forever"),
//! so recurring events are clipped to a display window running from the
//! start of the current month to the end of the month thirteen years out.
//! The rule iterator is consumed lazily and abandoned at the first start
//! past the window end. Non-recurring events pass through verbatim.

use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc,
};
use icalendar::parser::{read_calendar, unfold, Calendar, Component, Property};
use icalendar::{CalendarDateTime, DatePerhapsTime};
use rrule::RRuleSet;

use crate::errors::AppError;
use crate::models::CalendarOccurrence;

const NO_TITLE: &str = "No Title";
const NO_DESCRIPTION: &str = "No description available";
const NO_LOCATION: &str = "No location provided";

/// Number of years of recurring occurrences shown in the grid.
const WINDOW_YEARS: i32 = 13;

/// Compute the display window for recurring events: the start of the
/// current month through the end of the same month thirteen years later.
/// Boundaries are taken in local time at evaluation time and compared as
/// absolute instants.
pub fn display_window(now: DateTime<Local>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_instant(first_of_month(now.year(), now.month()));

    let end_year = now.year() + WINDOW_YEARS;
    let (next_year, next_month) = if now.month() == 12 {
        (end_year + 1, 1)
    } else {
        (end_year, now.month() + 1)
    };
    let end = local_instant(first_of_month(next_year, next_month)) - Duration::seconds(1);

    (start, end)
}

/// Parse raw ICS text and expand every VEVENT into concrete occurrences.
///
/// A feed that fails to parse yields a single error for the whole fetch;
/// no occurrences are produced from a partially-parsed document.
pub fn expand_feed(
    ics: &str,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Result<Vec<CalendarOccurrence>, AppError> {
    let unfolded = unfold(ics);
    let calendar = read_calendar(&unfolded)
        .map_err(|e| AppError::Feed(format!("Failed to parse calendar feed: {}", e)))?;

    let mut occurrences = Vec::new();
    for vevent in vevents(&calendar) {
        expand_vevent(vevent, window_start, window_end, &mut occurrences)?;
    }

    Ok(occurrences)
}

/// Collect VEVENT components, whether at the top level or nested in a
/// VCALENDAR wrapper.
fn vevents<'a>(calendar: &'a Calendar<'a>) -> Vec<&'a Component<'a>> {
    let mut found = Vec::new();
    for component in &calendar.components {
        if component.name == "VEVENT" {
            found.push(component);
        }
        found.extend(component.components.iter().filter(|c| c.name == "VEVENT"));
    }
    found
}

fn expand_vevent(
    vevent: &Component<'_>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    out: &mut Vec<CalendarOccurrence>,
) -> Result<(), AppError> {
    let title = prop_or(vevent, "SUMMARY", NO_TITLE);
    let description = prop_or(vevent, "DESCRIPTION", NO_DESCRIPTION);
    let location = prop_or(vevent, "LOCATION", NO_LOCATION);

    let dtstart = vevent
        .find_prop("DTSTART")
        .ok_or_else(|| AppError::Feed("Feed event is missing DTSTART".to_string()))?;
    let start = DatePerhapsTime::try_from(dtstart)
        .ok()
        .ok_or_else(|| AppError::Feed("Invalid DTSTART in feed".to_string()))?;

    let end = vevent
        .find_prop("DTEND")
        .map(|p| {
            DatePerhapsTime::try_from(p)
                .ok()
                .ok_or_else(|| AppError::Feed("Invalid DTEND in feed".to_string()))
        })
        .transpose()?;

    let start_instant = to_instant(&start)?;
    let end_instant = end.as_ref().map(to_instant).transpose()?;

    match vevent.find_prop("RRULE") {
        None => {
            // Singular events pass through verbatim, no window filtering.
            out.push(CalendarOccurrence {
                title,
                start: start_instant,
                end: end_instant,
                description,
                location,
            });
        }
        Some(rrule) => {
            let duration = end_instant
                .map(|e| e - start_instant)
                .unwrap_or_else(Duration::zero);

            let rule_set = build_rrule_set(vevent, &start, rrule)?;

            // The rule may generate forever; pull occurrences in order and
            // stop at the first start beyond the window end.
            for occurrence in rule_set.into_iter() {
                let occ_start = occurrence.with_timezone(&Utc);
                if occ_start > window_end {
                    break;
                }
                if occ_start < window_start {
                    continue;
                }
                out.push(CalendarOccurrence {
                    title: title.clone(),
                    start: occ_start,
                    end: Some(occ_start + duration),
                    description: description.clone(),
                    location: location.clone(),
                });
            }
        }
    }

    Ok(())
}

fn prop_or(vevent: &Component<'_>, name: &str, fallback: &str) -> String {
    vevent
        .find_prop(name)
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Assemble an rrule-parseable string from the event's DTSTART, RRULE, and
/// any EXDATE properties.
fn build_rrule_set(
    vevent: &Component<'_>,
    start: &DatePerhapsTime,
    rrule: &Property<'_>,
) -> Result<RRuleSet, AppError> {
    let mut lines = vec![dtstart_line(start), format!("RRULE:{}", rrule.val)];

    for exdate in vevent.properties.iter().filter(|p| p.name == "EXDATE") {
        lines.push(property_line(exdate));
    }

    lines.join("\n").parse().map_err(|e| {
        AppError::Feed(format!("Failed to parse recurrence rule in feed: {}", e))
    })
}

/// Format a DTSTART line for the rrule parser, preserving the source's
/// timezone information. All-day dates become midnight UTC.
fn dtstart_line(start: &DatePerhapsTime) -> String {
    match start {
        DatePerhapsTime::Date(d) => format!("DTSTART:{}T000000Z", d.format("%Y%m%d")),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => {
            format!("DTSTART:{}", dt.format("%Y%m%dT%H%M%SZ"))
        }
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => {
            format!("DTSTART:{}Z", naive.format("%Y%m%dT%H%M%S"))
        }
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            format!("DTSTART;TZID={}:{}", tzid, date_time.format("%Y%m%dT%H%M%S"))
        }
    }
}

/// Reconstruct a raw property line (name, parameters, value) so EXDATEs can
/// be handed to the rrule parser untouched.
fn property_line(prop: &Property<'_>) -> String {
    let mut line = prop.name.to_string();
    for param in &prop.params {
        line.push(';');
        line.push_str(param.key.as_ref());
        if let Some(val) = &param.val {
            line.push('=');
            line.push_str(val.as_ref());
        }
    }
    line.push(':');
    line.push_str(prop.val.as_ref());
    line
}

/// Resolve a DatePerhapsTime to an absolute instant.
fn to_instant(dpt: &DatePerhapsTime) -> Result<DateTime<Utc>, AppError> {
    match dpt {
        DatePerhapsTime::Date(d) => Ok(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN))),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Ok(*dt),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => {
            Ok(Utc.from_utc_datetime(naive))
        }
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            let tz: chrono_tz::Tz = tzid
                .parse()
                .map_err(|_| AppError::Feed(format!("Unknown timezone '{}' in feed", tzid)))?;
            Ok(resolve_local(&tz, date_time))
        }
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of month is a valid date")
        .and_time(NaiveTime::MIN)
}

fn local_instant(naive: NaiveDateTime) -> DateTime<Utc> {
    resolve_local(&Local, &naive)
}

fn resolve_local<Z: TimeZone>(tz: &Z, naive: &NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // DST fold: take the earlier reading
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        // DST gap: read the wall time as UTC
        LocalResult::None => Utc.from_utc_datetime(naive),
    }
}
