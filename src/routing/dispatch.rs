//! Request dispatch module
//!
//! Entry point for HTTP request processing. Builds the per-request context,
//! matches the route table, runs the handler, and pattern-matches the
//! outcome so that exactly one response is produced per request. Every
//! error, explicit or fallthrough, converges on the funnel here.

use std::convert::Infallible;
use std::sync::Arc;

use askama::Template;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};

use crate::config::{AppState, Env};
use crate::context::PageContext;
use crate::error::PageError;
use crate::logger;
use crate::pages::{self, PageOutcome};
use crate::response;
use crate::views::{NotFoundPage, ServerErrorPage};

use super::table::{match_route, Endpoint};

/// Main entry point for HTTP request handling.
///
/// HEAD is matched as GET with the body stripped after dispatch; the body
/// is collected only for POST requests.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let is_head = parts.method == Method::HEAD;
    let method = if is_head { Method::GET } else { parts.method.clone() };
    let path = parts.uri.path().to_string();
    let query = parts.uri.query().map(ToString::to_string);

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(&parts.method, &parts.uri, parts.version);
    }

    let body = if method == Method::POST {
        match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                logger::log_warning(&format!("Failed to read request body: {e}"));
                Bytes::new()
            }
        }
    } else {
        Bytes::new()
    };

    let mut resp = dispatch(&method, &path, query.as_deref(), &body, &state).await;
    if is_head {
        *resp.body_mut() = Full::new(Bytes::new());
    }
    if access_log {
        logger::log_response(resp.status());
    }

    Ok(resp)
}

/// Route a request to its handler and convert the outcome into a response.
///
/// This is the single dispatcher: handlers return a result, and the match
/// below is the only place a response is written, so no request can be
/// answered twice.
pub async fn dispatch(
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &Bytes,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let ctx = PageContext::for_request(state.config.server.environment, path, query);

    let (ctx, outcome) = match match_route(method, path) {
        Some((endpoint, params)) => {
            let ctx = ctx.with_params(params);
            let outcome = run_endpoint(endpoint, &ctx, body, state).await;
            (ctx, outcome)
        }
        None => (ctx, Err(PageError::not_found("Page Not Found"))),
    };

    match outcome {
        Ok(PageOutcome::Page { html, headers }) => {
            response::build_page_response(StatusCode::OK, html, &headers)
        }
        Ok(PageOutcome::Redirect(target)) => response::build_redirect_response(&target),
        Err(err) => error_response(&err, &ctx),
    }
}

async fn run_endpoint(
    endpoint: Endpoint,
    ctx: &PageContext,
    body: &Bytes,
    state: &Arc<AppState>,
) -> Result<PageOutcome, PageError> {
    match endpoint {
        Endpoint::Home => pages::site::home(ctx),
        Endpoint::About => pages::site::about(ctx),
        Endpoint::Demo => pages::site::demo(ctx),
        Endpoint::TestError => pages::site::test_error(),
        Endpoint::CatalogList => pages::catalog::list(ctx, state),
        Endpoint::CatalogDetail => pages::catalog::detail(ctx, state),
        Endpoint::FacultyList => pages::faculty::list(ctx, state).await,
        Endpoint::FacultyDetail => pages::faculty::detail(ctx, state).await,
        Endpoint::RegisterForm => pages::registration::form(ctx),
        Endpoint::RegisterSubmit => pages::registration::submit(state, body).await,
        Endpoint::RegisterList => pages::registration::list(ctx, state).await,
    }
}

/// The error funnel: classify, render the matching error page, and fall
/// back to an inline body when the error template itself fails.
fn error_response(err: &PageError, ctx: &PageContext) -> Response<Full<Bytes>> {
    let status = err.status();
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        logger::log_error(&format!("request failed: {err}"));
    }

    let message = display_message(err, ctx.env);
    let rendered = if status == StatusCode::NOT_FOUND {
        NotFoundPage {
            chrome: ctx.chrome("Page Not Found"),
            message,
        }
        .render()
    } else {
        ServerErrorPage {
            chrome: ctx.chrome("Server Error"),
            message,
            detail: ctx.env.is_development().then(|| format!("{err:?}")),
        }
        .render()
    };

    match rendered {
        Ok(html) => response::build_page_response(status, html, &[]),
        Err(render_err) => {
            logger::log_error(&format!("error page render failed: {render_err}"));
            response::build_fallback_error_response(status)
        }
    }
}

/// Production shows a generic message; development shows the real one.
fn display_message(err: &PageError, env: Env) -> String {
    if env.is_development() {
        err.to_string()
    } else {
        "An error occurred".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, RegistrationConfig, ServerConfig};

    fn test_state(env: Env) -> Arc<AppState> {
        Arc::new(AppState::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: env,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
            },
            registration: RegistrationConfig { hash_cost: 4 },
        }))
    }

    async fn get(state: &Arc<AppState>, path: &str, query: Option<&str>) -> (StatusCode, String) {
        let resp = dispatch(&Method::GET, path, query, &Bytes::new(), state).await;
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post(state: &Arc<AppState>, path: &str, body: &str) -> Response<Full<Bytes>> {
        dispatch(
            &Method::POST,
            path,
            None,
            &Bytes::from(body.to_string()),
            state,
        )
        .await
    }

    fn registration_body(email: &str, password: &str, confirm: &str) -> String {
        serde_urlencoded::to_string([
            ("name", "Ada Lovelace"),
            ("email", email),
            ("emailConfirm", email),
            ("password", password),
            ("passwordConfirm", confirm),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_unmatched_path_is_a_single_404() {
        let state = test_state(Env::Development);
        let (status, body) = get(&state, "/no/such/page", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
        assert_eq!(body.matches("404 - Page Not Found").count(), 1);
    }

    #[tokio::test]
    async fn test_wrong_method_is_404() {
        let state = test_state(Env::Development);
        let resp = post(&state, "/catalog", "").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_course_404_names_the_id_in_development() {
        let state = test_state(Env::Development);
        let (status, body) = get(&state, "/catalog/CS999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Course CS999 not found"));
    }

    #[tokio::test]
    async fn test_test_error_shows_literal_message_in_development() {
        let state = test_state(Env::Development);
        let (status, body) = get(&state, "/test-error", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("This is a test error"));
    }

    #[tokio::test]
    async fn test_test_error_is_generic_in_production() {
        let state = test_state(Env::Production);
        let (status, body) = get(&state, "/test-error", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("This is a test error"));
        assert!(body.contains("An error occurred"));
    }

    #[tokio::test]
    async fn test_styles_accumulate_per_prefix() {
        let state = test_state(Env::Development);
        let (_, catalog_body) = get(&state, "/catalog", None).await;
        assert!(catalog_body.contains("/css/catalog.css"));
        assert!(catalog_body.contains("/css/main.css"));
        // catalog rule registered before the root rule
        assert!(
            catalog_body.find("/css/catalog.css").unwrap()
                < catalog_body.find("/css/main.css").unwrap()
        );

        let (_, about_body) = get(&state, "/about", None).await;
        assert!(about_body.contains("/css/main.css"));
        assert!(!about_body.contains("/css/catalog.css"));
    }

    #[tokio::test]
    async fn test_course_detail_sorted_by_room() {
        let state = test_state(Env::Development);
        let (status, body) = get(&state, "/catalog/CS121", Some("sort=room")).await;
        assert_eq!(status, StatusCode::OK);
        let first = body.find("STC 390").unwrap();
        let second = body.find("STC 392").unwrap();
        let third = body.find("STC 394").unwrap();
        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn test_demo_response_carries_demo_headers() {
        let state = test_state(Env::Development);
        let resp = dispatch(&Method::GET, "/demo", None, &Bytes::new(), &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("x-demo-mode").unwrap(), "on");
        assert!(resp.headers().contains_key("x-served-at"));
    }

    #[tokio::test]
    async fn test_registration_form_renders() {
        let state = test_state(Env::Development);
        let (status, body) = get(&state, "/register", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("passwordConfirm"));
    }

    #[tokio::test]
    async fn test_mismatched_passwords_never_persist() {
        let state = test_state(Env::Development);
        let body = registration_body("ada@example.com", "s3cret!pass", "different1!");
        let resp = post(&state, "/register", &body).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("Location").unwrap(), "/register");
        assert!(state.users.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_mutation() {
        let state = test_state(Env::Development);
        let body = registration_body("ada@example.com", "s3cret!pass", "s3cret!pass");

        let first = post(&state, "/register", &body).await;
        assert_eq!(first.headers().get("Location").unwrap(), "/register/list");
        assert_eq!(state.users.list_all().await.unwrap().len(), 1);

        let second = post(&state, "/register", &body).await;
        assert_eq!(second.status(), StatusCode::FOUND);
        assert_eq!(second.headers().get("Location").unwrap(), "/register");
        assert_eq!(state.users.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_successful_registration_stores_a_hash() {
        let state = test_state(Env::Development);
        let body = registration_body("grace@example.com", "s3cret!pass", "s3cret!pass");
        let resp = post(&state, "/register", &body).await;
        assert_eq!(resp.headers().get("Location").unwrap(), "/register/list");

        let users = state.users.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "grace@example.com");
        assert_ne!(users[0].password_hash, "s3cret!pass");
        assert!(bcrypt::verify("s3cret!pass", &users[0].password_hash).unwrap());

        let (status, list_body) = get(&state, "/register/list", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(list_body.contains("grace@example.com"));
    }

    #[tokio::test]
    async fn test_faculty_detail_by_id_and_slug_agree() {
        let state = test_state(Env::Development);
        let (status_slug, by_slug) = get(&state, "/faculty/keers", None).await;
        let (status_id, by_id) = get(&state, "/faculty/3", None).await;
        assert_eq!(status_slug, StatusCode::OK);
        assert_eq!(status_id, StatusCode::OK);
        assert!(by_slug.contains("Brother Keers"));
        assert!(by_id.contains("Brother Keers"));
    }
}
