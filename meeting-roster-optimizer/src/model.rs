use core::fmt::{self, Display};

use chrono::NaiveDate;
use serde::Serialize;

/// One-based number of a meeting room.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Employees are numbered from 1 in the order they get scheduled.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A meeting start on a weekday. The same slot is offered once per room.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start_hour: u32,
}

/// Not every booking receives employees, only those visited before the cursor
/// runs dry.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RoomBooking {
    pub slot: TimeSlot,
    pub room: RoomNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeAssignment {
    pub booking: RoomBooking,
    /// contiguous and increasing, never empty
    pub employees: Vec<EmployeeId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduleStats {
    /// weekdays with at least one filled booking
    pub total_days: u32,
    /// bookings that received at least one employee
    pub total_meetings: u32,
}
