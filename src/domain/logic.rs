use crate::domain::customer::{Customer, SCHEDULES};

/// One route: every active customer sharing a pickup schedule.
pub struct ScheduleGroup {
    pub label: &'static str,
    pub customers: Vec<Customer>,
}

/// Partitions the active customer list into one bucket per known schedule,
/// in fixed display order (Weekly, Bi-Weekly, Monthly, On Call).
///
/// A customer whose schedule matches none of the known values lands in no
/// bucket at all; the routes view only ever shows the four above.
pub fn group_by_schedule(customers: &[Customer]) -> Vec<ScheduleGroup> {
    SCHEDULES
        .iter()
        .map(|&label| ScheduleGroup {
            label,
            customers: customers
                .iter()
                .filter(|c| c.schedule == label)
                .cloned()
                .collect(),
        })
        .collect()
}
