// Catalog page handlers

use askama::Template;

use crate::config::AppState;
use crate::context::PageContext;
use crate::error::PageError;
use crate::models::catalog::SectionSort;
use crate::views::{CatalogListPage, CourseDetailPage};

use super::PageOutcome;

/// Full course list in declaration order; always succeeds.
pub fn list(ctx: &PageContext, state: &AppState) -> Result<PageOutcome, PageError> {
    let page = CatalogListPage {
        chrome: ctx.chrome("Course Catalog"),
        courses: state.catalog.list(),
    };
    Ok(PageOutcome::page(page.render()?))
}

/// Course detail with section sorting.
///
/// The `sort` query value resolves against the section allow-list and falls
/// back to the original time order; sections are always a sorted copy.
pub fn detail(ctx: &PageContext, state: &AppState) -> Result<PageOutcome, PageError> {
    let id = ctx
        .param("id")
        .ok_or_else(|| PageError::internal("missing route parameter: id"))?;

    let course = state
        .catalog
        .get(id)
        .ok_or_else(|| PageError::not_found(format!("Course {id} not found")))?;

    let sort = SectionSort::parse(ctx.query("sort"));
    let page = CourseDetailPage {
        chrome: ctx.chrome(format!("{} - {}", course.id, course.title)),
        course,
        sections: course.sections_sorted(sort),
        current_sort: sort.as_str(),
    };
    Ok(PageOutcome::page(page.render()?))
}
