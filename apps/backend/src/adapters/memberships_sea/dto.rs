//! DTOs for memberships_sea adapter.

/// One course slot in a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSlot {
    pub course_id: i64,
    pub sequence_number: i32,
}
