use core::fmt::{self, Display};
use core::ops::RangeInclusive;

use meeting_roster_optimizer::ScheduleParameters;

use crate::RosterConfig;

pub const YEARS: RangeInclusive<i64> = 2000..=2100;
pub const MONTHS: RangeInclusive<i64> = 1..=12;
pub const MIN_EMPLOYEES: i64 = 2;
pub const MEETING_ROOMS: RangeInclusive<i64> = 1..=50;
pub const MEETING_DURATIONS: RangeInclusive<i64> = 1..=4;
pub const HOURS: RangeInclusive<i64> = 0..=23;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRangeError {
    #[error("year must be a valid year (2000-2100), got {0}")]
    Year(i64),
    #[error("month must be a valid month (1-12), got {0}")]
    Month(i64),
    #[error("employees must be at least 2, got {0}")]
    Employees(i64),
    #[error("employees per meeting must be between 1 and {max}, got {value}")]
    EmployeesPerMeeting { value: i64, max: u32 },
    #[error("meeting rooms must be a valid number of meeting rooms (1-50), got {0}")]
    MeetingRooms(i64),
    #[error("meeting duration must be a valid duration in hours (1-4), got {0}")]
    MeetingDuration(i64),
    #[error("start hour must be a valid hour (0-23), got {0}")]
    StartHour(i64),
    #[error("end hour must be between {min} and 23, got {value}")]
    EndHour { value: i64, min: u32 },
}

/// Every range violation of one config, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<InputRangeError>);

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[InputRangeError] {
        &self.0
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid schedule parameters")?;
        for error in &self.0 {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Default)]
struct Checker {
    errors: Vec<InputRangeError>,
}

impl Checker {
    fn check<T: TryFrom<i64>>(
        &mut self,
        value: i64,
        range: RangeInclusive<i64>,
        error: impl FnOnce() -> InputRangeError,
    ) -> Option<T> {
        let checked = range
            .contains(&value)
            .then(|| T::try_from(value).ok())
            .flatten();
        if checked.is_none() {
            self.errors.push(error());
        }
        checked
    }
}

impl RosterConfig {
    /// Checks every field and reports all violations at once. The employees
    /// per meeting are only checked against a valid employee count, the end
    /// hour only against a valid start hour.
    pub fn validate(&self) -> Result<ScheduleParameters, ValidationErrors> {
        let mut checker = Checker::default();

        let year: Option<i32> =
            checker.check(self.year, YEARS, || InputRangeError::Year(self.year));
        let month: Option<u32> =
            checker.check(self.month, MONTHS, || InputRangeError::Month(self.month));
        let total_employees: Option<u32> =
            checker.check(self.employees, MIN_EMPLOYEES..=i64::MAX, || {
                InputRangeError::Employees(self.employees)
            });
        let employees_per_meeting: Option<u32> = total_employees.and_then(|max| {
            checker.check(self.employees_per_meeting, 1..=i64::from(max), || {
                InputRangeError::EmployeesPerMeeting {
                    value: self.employees_per_meeting,
                    max,
                }
            })
        });
        let room_count: Option<u32> = checker.check(self.meeting_rooms, MEETING_ROOMS, || {
            InputRangeError::MeetingRooms(self.meeting_rooms)
        });
        let meeting_duration_hours: Option<u32> =
            checker.check(self.meeting_duration, MEETING_DURATIONS, || {
                InputRangeError::MeetingDuration(self.meeting_duration)
            });
        let start_hour: Option<u32> = checker.check(self.start_hour, HOURS, || {
            InputRangeError::StartHour(self.start_hour)
        });
        let end_hour: Option<u32> = start_hour.and_then(|min| {
            checker.check(self.end_hour, i64::from(min)..=*HOURS.end(), || {
                InputRangeError::EndHour {
                    value: self.end_hour,
                    min,
                }
            })
        });

        match (
            year,
            month,
            total_employees,
            employees_per_meeting,
            room_count,
            meeting_duration_hours,
            start_hour,
            end_hour,
        ) {
            (
                Some(year),
                Some(month),
                Some(total_employees),
                Some(employees_per_meeting),
                Some(room_count),
                Some(meeting_duration_hours),
                Some(start_hour),
                Some(end_hour),
            ) => Ok(ScheduleParameters {
                year,
                month,
                total_employees,
                employees_per_meeting,
                room_count,
                meeting_duration_hours,
                start_hour,
                end_hour,
            }),
            _ => Err(ValidationErrors(checker.errors)),
        }
    }
}
