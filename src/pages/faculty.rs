// Faculty page handlers

use askama::Template;

use crate::config::AppState;
use crate::context::PageContext;
use crate::error::PageError;
use crate::models::faculty::FacultySort;
use crate::views::{FacultyDetailPage, FacultyListPage};

use super::PageOutcome;

/// Faculty directory, sorted by the validated sort key.
pub async fn list(ctx: &PageContext, state: &AppState) -> Result<PageOutcome, PageError> {
    let sort = FacultySort::parse(ctx.query("sort"));
    let faculty = state.faculty.list_sorted(sort).await;

    let page = FacultyListPage {
        chrome: ctx.chrome("Faculty"),
        faculty,
        current_sort: sort.as_str(),
    };
    Ok(PageOutcome::page(page.render()?))
}

/// Faculty detail by slug or id; absence becomes a 404 before any field of
/// the record is touched.
pub async fn detail(ctx: &PageContext, state: &AppState) -> Result<PageOutcome, PageError> {
    let key = ctx
        .param("slug")
        .ok_or_else(|| PageError::internal("missing route parameter: slug"))?;

    let member = state
        .faculty
        .get_by_key(key)
        .await
        .ok_or_else(|| PageError::not_found(format!("Faculty member {key} not found")))?;

    let page = FacultyDetailPage {
        chrome: ctx.chrome(member.name.clone()),
        member,
    };
    Ok(PageOutcome::page(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Env, LoggingConfig, RegistrationConfig, ServerConfig};
    use crate::routing::matcher::match_pattern;
    use hyper::StatusCode;

    fn test_state() -> AppState {
        AppState::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: Env::Development,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
            registration: RegistrationConfig { hash_cost: 4 },
        })
    }

    #[tokio::test]
    async fn test_list_falls_back_to_name_sort() {
        let state = test_state();
        let ctx = PageContext::for_request(Env::Development, "/faculty", Some("sort=salary"));
        let PageOutcome::Page { html, .. } = list(&ctx, &state).await.unwrap() else {
            panic!("faculty list should render a page");
        };
        assert!(html.contains("current: name"));

        // Name order: Brother Davis before Sister Enkey
        let davis = html.find("Brother Davis").unwrap();
        let enkey = html.find("Sister Enkey").unwrap();
        assert!(davis < enkey);
    }

    #[tokio::test]
    async fn test_detail_by_slug() {
        let state = test_state();
        let params = match_pattern("/faculty/:slug", "/faculty/anderson").unwrap();
        let ctx =
            PageContext::for_request(Env::Development, "/faculty/anderson", None).with_params(params);
        let PageOutcome::Page { html, .. } = detail(&ctx, &state).await.unwrap() else {
            panic!("faculty detail should render a page");
        };
        assert!(html.contains("Sister Anderson"));
        assert!(html.contains("Mathematics"));
    }

    #[tokio::test]
    async fn test_detail_unknown_member_is_404() {
        let state = test_state();
        let params = match_pattern("/faculty/:slug", "/faculty/nobody").unwrap();
        let ctx =
            PageContext::for_request(Env::Development, "/faculty/nobody", None).with_params(params);
        let err = detail(&ctx, &state).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Faculty member nobody not found");
    }
}
