use super::{PageParams, Pagination};

fn params(offset: Option<i64>, limit: Option<i64>, page: Option<i64>) -> PageParams {
    PageParams {
        offset,
        limit,
        page,
    }
}

fn resolve(p: PageParams) -> (Pagination, Vec<String>) {
    let mut errors = Vec::new();
    let pagination = Pagination::resolve(&p, &mut errors);
    (pagination, errors)
}

#[test]
fn test_defaults() {
    let (pagination, errors) = resolve(PageParams::default());

    assert!(errors.is_empty());
    assert_eq!(pagination, Pagination::default());
    assert_eq!(pagination.limit, 20);
}

#[test]
fn test_page_and_offset_agree() {
    for (page, limit) in [(1, 20), (2, 20), (3, 7), (10, 100)] {
        let (by_page, _) = resolve(params(None, Some(limit), Some(page)));
        let (by_offset, _) = resolve(params(Some((page - 1) * limit), Some(limit), None));

        assert_eq!(by_page.request(), by_offset.request(), "page {page}, limit {limit}");
    }
}

#[test]
fn test_page_wins_over_offset() {
    let (pagination, errors) = resolve(params(Some(5), Some(10), Some(3)));

    assert!(errors.is_empty());
    assert_eq!(pagination.offset, 20);
    assert_eq!(pagination.page, Some(3));
}

#[test]
fn test_out_of_range_values_are_all_reported() {
    let (_, errors) = resolve(params(Some(-1), Some(101), Some(0)));

    assert_eq!(
        errors,
        vec![
            "limit must be between 1 and 100 (got 101)".to_string(),
            "page must be at least 1 (got 0)".to_string(),
            "offset must be at least 0 (got -1)".to_string(),
        ]
    );
}

#[test]
fn test_limit_bounds_are_inclusive() {
    assert!(resolve(params(None, Some(1), None)).1.is_empty());
    assert!(resolve(params(None, Some(100), None)).1.is_empty());
    assert_eq!(resolve(params(None, Some(0), None)).1.len(), 1);
}

#[test]
fn test_footer_short_page_reports_total() {
    let pagination = Pagination::default();

    assert_eq!(pagination.footer(2, "tasks", &[]), "Total found: 2 tasks");
    assert_eq!(
        pagination.footer(0, "files", &["task 5".to_string()]),
        "Total found: 0 files (task 5)"
    );
}

#[test]
fn test_footer_full_page_with_offset() {
    let (pagination, _) = resolve(params(Some(40), Some(20), None));

    assert_eq!(
        pagination.footer(20, "tasks", &[]),
        "Showing 20 results (limit: 20), offset 40. More may exist: use offset=60 to fetch the next page."
    );
}

#[test]
fn test_footer_full_page_with_page_and_filters() {
    let (pagination, _) = resolve(params(None, Some(2), Some(2)));
    let filters = vec!["task 5".to_string(), "project 7".to_string()];

    assert_eq!(
        pagination.footer(2, "comments", &filters),
        "Showing 2 results (limit: 2, task 5, project 7), page 2. More may exist: use offset=4 or page=3 to fetch the next page."
    );
}

#[test]
fn test_oversized_page_is_rejected() {
    let (pagination, errors) = resolve(params(None, Some(1), Some(i64::from(u32::MAX))));

    assert_eq!(errors, vec![format!("page is too large (got {})", u32::MAX)]);
    assert_eq!(pagination.offset, 0);

    let (_, errors) = resolve(params(None, Some(100), Some(i64::from(u32::MAX / 50))));
    assert_eq!(errors, vec![format!("page is too large (got {})", u32::MAX / 50)]);
}

#[test]
fn test_oversized_offset_is_rejected() {
    let (_, errors) = resolve(params(Some(i64::from(u32::MAX)), Some(20), None));

    assert_eq!(errors, vec![format!("offset is too large (got {})", u32::MAX)]);
}

#[test]
fn test_footer_last_page_does_not_overflow() {
    let pagination = Pagination {
        offset: 0,
        limit: 1,
        page: Some(u32::MAX),
    };

    assert!(pagination.footer(1, "tasks", &[]).contains(&format!("page={}", u32::MAX)));
}
