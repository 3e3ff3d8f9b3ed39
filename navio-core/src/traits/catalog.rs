use crate::errors::NavioResult;
use crate::models::Course;

/// Course lookup and search, scoped to a program.
pub trait ICourseCatalog: Send + Sync {
    /// Exact course-code match.
    fn course_by_code(&self, program_id: &str, code: &str) -> NavioResult<Option<Course>>;

    /// Case-insensitive substring search over course code and title,
    /// bounded by `limit`.
    fn search_courses(
        &self,
        program_id: &str,
        query: &str,
        limit: usize,
    ) -> NavioResult<Vec<Course>>;
}
