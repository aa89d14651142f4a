// Registration page handlers
// A linear pipeline: each step either proceeds or redirects-and-stops.
// Failures are surfaced to operators through the logger, never to the user.

use askama::Template;
use hyper::body::Bytes;
use serde::Deserialize;

use crate::config::AppState;
use crate::context::PageContext;
use crate::error::PageError;
use crate::logger;
use crate::models::users::NewUser;
use crate::views::{RegisterFormPage, RegisterListPage};

use super::PageOutcome;

const FORM_PATH: &str = "/register";
const LIST_PATH: &str = "/register/list";

/// Special characters accepted by the password rule.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

#[derive(Debug, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "emailConfirm")]
    pub email_confirm: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Display the registration form.
pub fn form(ctx: &PageContext) -> Result<PageOutcome, PageError> {
    let page = RegisterFormPage {
        chrome: ctx.chrome("User Registration"),
    };
    Ok(PageOutcome::page(page.render()?))
}

/// Process a registration submission: parse, validate, check uniqueness,
/// hash, persist. Every failure redirects back to the form.
pub async fn submit(state: &AppState, body: &Bytes) -> Result<PageOutcome, PageError> {
    let form: RegistrationForm = match serde_urlencoded::from_bytes(body) {
        Ok(form) => form,
        Err(e) => {
            logger::log_registration_rejected(&format!("unreadable form body: {e}"));
            return Ok(PageOutcome::redirect(FORM_PATH));
        }
    };

    let problems = validate(&form);
    if !problems.is_empty() {
        logger::log_registration_rejected(&problems.join("; "));
        return Ok(PageOutcome::redirect(FORM_PATH));
    }

    let email = normalize_email(&form.email);
    match state.users.email_exists(&email).await {
        Ok(true) => {
            logger::log_registration_rejected("email already registered");
            return Ok(PageOutcome::redirect(FORM_PATH));
        }
        Ok(false) => {}
        Err(e) => {
            logger::log_error(&format!("registration lookup failed: {e}"));
            return Ok(PageOutcome::redirect(FORM_PATH));
        }
    }

    let password_hash = match state.hasher.hash(form.password).await {
        Ok(hash) => hash,
        Err(e) => {
            logger::log_error(&format!("password hashing failed: {e}"));
            return Ok(PageOutcome::redirect(FORM_PATH));
        }
    };

    let new_user = NewUser {
        name: form.name.trim().to_string(),
        email,
        password_hash,
    };
    match state.users.save(new_user).await {
        Ok(_) => Ok(PageOutcome::redirect(LIST_PATH)),
        Err(e) => {
            logger::log_error(&format!("failed to save user: {e}"));
            Ok(PageOutcome::redirect(FORM_PATH))
        }
    }
}

/// Display all registered users. A repository failure is logged and the
/// page renders with an empty list.
pub async fn list(ctx: &PageContext, state: &AppState) -> Result<PageOutcome, PageError> {
    let users = match state.users.list_all().await {
        Ok(users) => users,
        Err(e) => {
            logger::log_error(&format!("failed to list users: {e}"));
            Vec::new()
        }
    };

    let page = RegisterListPage {
        chrome: ctx.chrome("Registered Users"),
        users,
    };
    Ok(PageOutcome::page(page.render()?))
}

/// Validate a submission against the registration rules. Returns every
/// violated rule, empty when the form is acceptable.
pub fn validate(form: &RegistrationForm) -> Vec<&'static str> {
    let mut problems = Vec::new();

    if form.name.trim().chars().count() < 2 {
        problems.push("Name must be at least 2 characters");
    }
    if !is_valid_email(form.email.trim()) {
        problems.push("Must be a valid email address");
    }
    if normalize_email(&form.email) != normalize_email(&form.email_confirm) {
        problems.push("Email addresses must match");
    }
    if form.password.chars().count() < 8 {
        problems.push("Password must be at least 8 characters");
    }
    if !form.password.chars().any(|c| c.is_ascii_digit()) {
        problems.push("Password must contain at least one number");
    }
    if !form.password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        problems.push("Password must contain at least one special character");
    }
    if form.password_confirm != form.password {
        problems.push("Passwords must match");
    }

    problems
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
