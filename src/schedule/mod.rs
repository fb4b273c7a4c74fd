//! Schedule view: groups RSVPs by event and splits events into
//! upcoming/past buckets relative to a supplied "now".
//!
//! This is a pure read model. It takes the current collections as
//! parameters, mutates nothing, and returns a fresh result on every call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Attendance, Event, Rsvp};

/// Derived attendance counts for one event's RSVP group.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub total: usize,
    pub yes: usize,
    pub maybe: usize,
}

impl Tally {
    fn count(rsvps: &[Rsvp]) -> Self {
        Self {
            total: rsvps.len(),
            yes: rsvps
                .iter()
                .filter(|r| r.attendance == Attendance::Yes)
                .count(),
            maybe: rsvps
                .iter()
                .filter(|r| r.attendance == Attendance::Maybe)
                .count(),
        }
    }
}

/// An event together with its RSVPs and tallies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventGroup {
    pub event: Event,
    pub rsvps: Vec<Rsvp>,
    pub tally: Tally,
}

/// The partitioned event list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Events at or after "now", soonest first.
    pub upcoming: Vec<EventGroup>,
    /// Events before "now", most recent first.
    pub past: Vec<EventGroup>,
}

/// Build the grouped, partitioned, tallied schedule view.
///
/// Every event appears exactly once, in `upcoming` if its date is at or
/// after `now` and in `past` otherwise. Events with no RSVPs are kept with
/// an empty group and zero tallies. An RSVP whose `event_id` matches no
/// event is a data-integrity leftover and is silently excluded.
pub fn build_schedule(events: &[Event], rsvps: &[Rsvp], now: DateTime<Utc>) -> Schedule {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for event in events {
        let group: Vec<Rsvp> = rsvps
            .iter()
            .filter(|r| r.event_id == event.id)
            .cloned()
            .collect();

        let entry = EventGroup {
            tally: Tally::count(&group),
            event: event.clone(),
            rsvps: group,
        };

        if event.date >= now {
            upcoming.push(entry);
        } else {
            past.push(entry);
        }
    }

    upcoming.sort_by_key(|g| g.event.date);
    past.sort_by(|a, b| b.event.date.cmp(&a.event.date));

    Schedule { upcoming, past }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn event(id: &str, date: DateTime<Utc>) -> Event {
        Event {
            id: id.to_string(),
            name: format!("Event {}", id),
            date,
        }
    }

    fn rsvp(id: &str, event_id: &str, attendance: Attendance) -> Rsvp {
        Rsvp {
            id: id.to_string(),
            event_id: event_id.to_string(),
            name: format!("Member {}", id),
            food: String::new(),
            content: String::new(),
            attendance,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_every_event_appears_exactly_once() {
        let events = vec![
            event("a", now() - Duration::days(3)),
            event("b", now() + Duration::days(1)),
            event("c", now() - Duration::hours(1)),
            event("d", now() + Duration::weeks(2)),
        ];
        let schedule = build_schedule(&events, &[], now());

        let mut seen: Vec<String> = schedule
            .upcoming
            .iter()
            .chain(schedule.past.iter())
            .map(|g| g.event.id.clone())
            .collect();
        seen.sort();
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
        assert_eq!(schedule.upcoming.len(), 2);
        assert_eq!(schedule.past.len(), 2);
    }

    #[test]
    fn test_event_exactly_at_now_is_upcoming() {
        let events = vec![event("boundary", now())];
        let schedule = build_schedule(&events, &[], now());

        assert_eq!(schedule.upcoming.len(), 1);
        assert!(schedule.past.is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let events = vec![
            event("u2", now() + Duration::days(5)),
            event("u1", now() + Duration::days(1)),
            event("p1", now() - Duration::days(1)),
            event("p2", now() - Duration::days(5)),
        ];
        let schedule = build_schedule(&events, &[], now());

        let upcoming: Vec<&str> = schedule
            .upcoming
            .iter()
            .map(|g| g.event.id.as_str())
            .collect();
        let past: Vec<&str> = schedule.past.iter().map(|g| g.event.id.as_str()).collect();
        assert_eq!(upcoming, vec!["u1", "u2"]);
        assert_eq!(past, vec!["p1", "p2"]);
    }

    #[test]
    fn test_tally_consistency() {
        let events = vec![event("e", now() + Duration::days(1))];
        let rsvps = vec![
            rsvp("1", "e", Attendance::Yes),
            rsvp("2", "e", Attendance::Yes),
            rsvp("3", "e", Attendance::No),
            rsvp("4", "e", Attendance::Maybe),
        ];
        let schedule = build_schedule(&events, &rsvps, now());

        let group = &schedule.upcoming[0];
        assert_eq!(group.tally.total, 4);
        assert_eq!(group.tally.yes, 2);
        assert_eq!(group.tally.maybe, 1);
        let no = group
            .rsvps
            .iter()
            .filter(|r| r.attendance == Attendance::No)
            .count();
        assert_eq!(group.tally.total, group.tally.yes + group.tally.maybe + no);
    }

    #[test]
    fn test_event_without_rsvps_still_appears() {
        let events = vec![event("lonely", now() - Duration::days(2))];
        let schedule = build_schedule(&events, &[], now());

        let group = &schedule.past[0];
        assert!(group.rsvps.is_empty());
        assert_eq!(group.tally, Tally::default());
    }

    #[test]
    fn test_orphaned_rsvp_is_excluded() {
        let events = vec![event("e", now() + Duration::days(1))];
        let rsvps = vec![
            rsvp("1", "e", Attendance::Yes),
            rsvp("2", "deleted-event", Attendance::Yes),
        ];
        let schedule = build_schedule(&events, &rsvps, now());

        let group = &schedule.upcoming[0];
        assert_eq!(group.rsvps.len(), 1);
        assert_eq!(group.tally.total, 1);
    }

    #[test]
    fn test_empty_inputs_yield_empty_schedule() {
        let schedule = build_schedule(&[], &[], now());
        assert!(schedule.upcoming.is_empty());
        assert!(schedule.past.is_empty());
    }

    #[test]
    fn test_yesterday_tomorrow_scenario() {
        let e1 = event("e1", now() - Duration::days(1));
        let e2 = event("e2", now() + Duration::days(1));
        let r1 = rsvp("r1", "e1", Attendance::Yes);
        let r2 = rsvp("r2", "e2", Attendance::Maybe);
        let r3 = rsvp("r3", "e2", Attendance::Yes);

        let schedule = build_schedule(
            &[e1.clone(), e2.clone()],
            &[r1.clone(), r2.clone(), r3.clone()],
            now(),
        );

        assert_eq!(schedule.upcoming.len(), 1);
        assert_eq!(schedule.upcoming[0].event, e2);
        assert_eq!(schedule.upcoming[0].rsvps, vec![r2, r3]);
        assert_eq!(
            schedule.upcoming[0].tally,
            Tally {
                total: 2,
                yes: 1,
                maybe: 1
            }
        );

        assert_eq!(schedule.past.len(), 1);
        assert_eq!(schedule.past[0].event, e1);
        assert_eq!(schedule.past[0].rsvps, vec![r1]);
        assert_eq!(
            schedule.past[0].tally,
            Tally {
                total: 1,
                yes: 1,
                maybe: 0
            }
        );
    }

    #[test]
    fn test_idempotent_over_same_inputs() {
        let events = vec![
            event("a", now() - Duration::days(1)),
            event("b", now() + Duration::days(1)),
        ];
        let rsvps = vec![rsvp("1", "a", Attendance::Yes)];

        let first = build_schedule(&events, &rsvps, now());
        let second = build_schedule(&events, &rsvps, now());
        assert_eq!(first, second);
    }
}
