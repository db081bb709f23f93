use chrono::{Datelike as _, Months, NaiveDate, Weekday};
use itertools::Itertools as _;

use crate::model::{RoomBooking, RoomNumber, TimeSlot};
use crate::params::ScheduleParameters;

/// Last calendar day of `month` in `year`, `None` for a month chrono can't represent.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

#[must_use]
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every day of the month in calendar order. Empty for an unrepresentable month.
pub fn month_days(year: i32, month: u32) -> impl Iterator<Item = NaiveDate> + Clone {
    NaiveDate::from_ymd_opt(year, month, 1)
        .into_iter()
        .flat_map(|first| {
            first
                .iter_days()
                .take_while(move |day| day.month() == first.month())
        })
}

/// Produces the bookable slots of a month in the order they get filled:
/// weekday, then hour, then room.
///
/// The enumerator only copies what it needs out of [`ScheduleParameters`] and
/// every method starts a fresh iterator, so it can be walked any number of
/// times with identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEnumerator {
    year: i32,
    month: u32,
    meeting_duration_hours: u32,
    start_hour: u32,
    end_hour: u32,
    room_count: u32,
}

impl SlotEnumerator {
    #[must_use]
    pub const fn new(params: &ScheduleParameters) -> Self {
        Self {
            year: params.year,
            month: params.month,
            meeting_duration_hours: params.meeting_duration_hours,
            start_hour: params.start_hour,
            end_hour: params.end_hour,
            room_count: params.room_count,
        }
    }

    /// Monday to Friday of the month.
    pub fn workdays(&self) -> impl Iterator<Item = NaiveDate> + Clone {
        month_days(self.year, self.month).filter(|date| is_workday(*date))
    }

    /// Meeting start hours of a single day. A meeting has to be over by
    /// `end_hour`, so the last start is at most `end_hour - duration`.
    pub fn hours(&self) -> impl Iterator<Item = u32> + Clone {
        let Self {
            meeting_duration_hours: duration,
            start_hour,
            end_hour,
            ..
        } = *self;
        let step = usize::try_from(duration).unwrap_or(usize::MAX).max(1);
        (start_hour..=end_hour)
            .step_by(step)
            .take_while(move |hour| {
                duration > 0 && hour.checked_add(duration).is_some_and(|ends| ends <= end_hour)
            })
    }

    pub fn slots_on(&self, date: NaiveDate) -> impl Iterator<Item = TimeSlot> + Clone {
        self.hours()
            .map(move |start_hour| TimeSlot { date, start_hour })
    }

    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> + Clone {
        let this = *self;
        self.workdays().flat_map(move |date| this.slots_on(date))
    }

    pub fn rooms(&self) -> impl Iterator<Item = RoomNumber> + Clone {
        (1..=self.room_count).map(RoomNumber)
    }

    /// All bookings of the month, independent of how many employees there are.
    pub fn bookings(&self) -> impl Iterator<Item = RoomBooking> + Clone {
        self.slots()
            .cartesian_product(self.rooms())
            .map(|(slot, room)| RoomBooking { slot, room })
    }
}
