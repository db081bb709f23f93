//! Slot enumeration and greedy employee assignment for a monthly meeting roster.
//!
//! [`SlotEnumerator`] walks the weekdays of a month and yields every bookable
//! `(day, hour, room)` combination in a fixed order. [`run`] threads an
//! [`EmployeeCursor`] through that order and hands each filled booking to a
//! [`RosterSink`].

extern crate alloc;

pub mod cursor;
pub mod engine;
pub mod model;
pub mod params;
pub mod slots;

pub use cursor::EmployeeCursor;
pub use engine::{events, run, RosterEvent, RosterOutcome, RosterSink, Schedule};
pub use model::{
    EmployeeAssignment, EmployeeId, RoomBooking, RoomNumber, ScheduleStats, TimeSlot,
};
pub use params::ScheduleParameters;
pub use slots::SlotEnumerator;
