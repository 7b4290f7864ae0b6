pub mod context;
pub mod departments_service;
pub mod employees_service;
pub mod leaves_service;
pub mod performance_service;

pub use departments_service::DepartmentsService;
pub use employees_service::EmployeesService;
pub use leaves_service::LeavesService;
pub use performance_service::PerformanceService;

/// Normalizes list-query pagination: page is at least 1; page size falls
/// back to 10 when absent or non-positive and is capped at 100.
pub fn clamp_page_bounds(page: Option<i64>, page_size: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = match page_size {
        Some(size) if size >= 1 => size.min(100),
        _ => 10,
    };
    (page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page_bounds(None, None), (1, 10));
        assert_eq!(clamp_page_bounds(Some(3), Some(25)), (3, 25));
        assert_eq!(clamp_page_bounds(Some(0), Some(0)), (1, 10));
        assert_eq!(clamp_page_bounds(Some(-5), Some(500)), (1, 100));
        assert_eq!(clamp_page_bounds(Some(2), Some(100)), (2, 100));
    }
}
