use serde::Serialize;

/// Range-checked input of a single roster run.
///
/// Values are only constructed by the configuration layer after validation,
/// nothing in this crate checks them again. Out of range values never panic
/// but may produce an empty roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduleParameters {
    pub year: i32,
    /// 1 = January
    pub month: u32,
    pub total_employees: u32,
    pub employees_per_meeting: u32,
    pub room_count: u32,
    pub meeting_duration_hours: u32,
    /// first hour a meeting may start at
    pub start_hour: u32,
    /// hour by which every meeting has to be over
    pub end_hour: u32,
}
