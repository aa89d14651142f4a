// Basic page handlers: home, about, demo, and the diagnostic error route

use crate::context::PageContext;
use crate::error::PageError;
use crate::views::{AboutPage, DemoPage, HomePage};
use askama::Template;

use super::PageOutcome;

pub fn home(ctx: &PageContext) -> Result<PageOutcome, PageError> {
    let page = HomePage {
        chrome: ctx.chrome("Welcome Home"),
    };
    Ok(PageOutcome::page(page.render()?))
}

pub fn about(ctx: &PageContext) -> Result<PageOutcome, PageError> {
    let page = AboutPage {
        chrome: ctx.chrome("About"),
    };
    Ok(PageOutcome::page(page.render()?))
}

/// Demo page served with extra response headers.
pub fn demo(ctx: &PageContext) -> Result<PageOutcome, PageError> {
    let served_at = chrono::Utc::now().to_rfc2822();
    let page = DemoPage {
        chrome: ctx.chrome("Demo"),
        served_at: served_at.clone(),
    };
    let headers = vec![
        ("x-demo-mode", "on".to_string()),
        ("x-served-at", served_at),
    ];
    Ok(PageOutcome::page_with_headers(page.render()?, headers))
}

/// Diagnostic route: always fails with a 500 so the funnel can be exercised.
pub fn test_error() -> Result<PageOutcome, PageError> {
    Err(PageError::internal("This is a test error"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Env;
    use hyper::StatusCode;

    #[test]
    fn test_home_renders_title() {
        let ctx = PageContext::for_request(Env::Production, "/", None);
        let outcome = home(&ctx).unwrap();
        match outcome {
            PageOutcome::Page { html, headers } => {
                assert!(html.contains("Welcome Home"));
                assert!(headers.is_empty());
            }
            PageOutcome::Redirect(_) => panic!("home should render a page"),
        }
    }

    #[test]
    fn test_demo_adds_headers() {
        let ctx = PageContext::for_request(Env::Production, "/demo", None);
        let outcome = demo(&ctx).unwrap();
        match outcome {
            PageOutcome::Page { headers, .. } => {
                assert!(headers.iter().any(|(name, value)| *name == "x-demo-mode" && value == "on"));
                assert!(headers.iter().any(|(name, _)| *name == "x-served-at"));
            }
            PageOutcome::Redirect(_) => panic!("demo should render a page"),
        }
    }

    #[test]
    fn test_test_error_is_500() {
        let err = test_error().unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "This is a test error");
    }
}
