use crate::model::EmployeeId;

/// Points at the next employee that still needs a meeting.
///
/// Employees are handed out strictly in numeric order starting at 1, each one
/// exactly once. The cursor belongs to a single roster run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeCursor {
    scheduled: u32,
    total: u32,
}

impl EmployeeCursor {
    #[must_use]
    pub const fn new(total: u32) -> Self {
        Self {
            scheduled: 0,
            total,
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.scheduled >= self.total
    }

    #[must_use]
    pub const fn scheduled(&self) -> u32 {
        self.scheduled
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.total - self.scheduled
    }

    /// Takes up to `capacity` consecutive employees. The last draw of a run
    /// may be shorter. Returns `None` once nobody is left, never an empty run.
    pub fn draw(&mut self, capacity: u32) -> Option<Vec<EmployeeId>> {
        let count = capacity.min(self.remaining());
        if count == 0 {
            return None;
        }
        let first = self.scheduled + 1;
        self.scheduled += count;
        Some((first..=self.scheduled).map(EmployeeId).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::EmployeeCursor;
    use crate::model::EmployeeId;

    fn ids(range: core::ops::RangeInclusive<u32>) -> Vec<EmployeeId> {
        range.map(EmployeeId).collect()
    }

    #[test]
    fn draws_consecutive_runs() {
        let mut cursor = EmployeeCursor::new(5);

        assert_eq!(cursor.draw(2), Some(ids(1..=2)));
        assert_eq!(cursor.draw(2), Some(ids(3..=4)));
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.draw(2), Some(ids(5..=5)));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.draw(2), None);
        assert_eq!(cursor.scheduled(), 5);
    }

    #[test]
    fn capacity_larger_than_pool() {
        let mut cursor = EmployeeCursor::new(3);
        assert_eq!(cursor.draw(10), Some(ids(1..=3)));
        assert_eq!(cursor.draw(10), None);
    }

    #[test]
    fn zero_capacity_draws_nothing() {
        let mut cursor = EmployeeCursor::new(3);
        assert_eq!(cursor.draw(0), None);
        assert_eq!(cursor.scheduled(), 0);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn empty_pool_is_exhausted() {
        let cursor = EmployeeCursor::new(0);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.remaining(), 0);
    }
}
