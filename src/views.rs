// View layer
// One askama template struct per page; every page shares the `Chrome` shell

use askama::Template;

use crate::models::catalog::{Course, Section};
use crate::models::faculty::FacultyMember;
use crate::models::users::RegisteredUser;

/// Shared shell values rendered by the base template: page title, the
/// request's accumulated style links, copyright year, and the
/// development-mode flag.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: String,
    pub styles: Vec<&'static str>,
    pub year: i32,
    pub dev: bool,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub chrome: Chrome,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub chrome: Chrome,
}

#[derive(Template)]
#[template(path = "demo.html")]
pub struct DemoPage {
    pub chrome: Chrome,
    pub served_at: String,
}

#[derive(Template)]
#[template(path = "catalog/list.html")]
pub struct CatalogListPage<'a> {
    pub chrome: Chrome,
    pub courses: &'a [Course],
}

#[derive(Template)]
#[template(path = "catalog/detail.html")]
pub struct CourseDetailPage<'a> {
    pub chrome: Chrome,
    pub course: &'a Course,
    pub sections: Vec<Section>,
    pub current_sort: &'static str,
}

#[derive(Template)]
#[template(path = "faculty/list.html")]
pub struct FacultyListPage {
    pub chrome: Chrome,
    pub faculty: Vec<FacultyMember>,
    pub current_sort: &'static str,
}

#[derive(Template)]
#[template(path = "faculty/detail.html")]
pub struct FacultyDetailPage {
    pub chrome: Chrome,
    pub member: FacultyMember,
}

#[derive(Template)]
#[template(path = "register/form.html")]
pub struct RegisterFormPage {
    pub chrome: Chrome,
}

#[derive(Template)]
#[template(path = "register/list.html")]
pub struct RegisterListPage {
    pub chrome: Chrome,
    pub users: Vec<RegisteredUser>,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub chrome: Chrome,
    pub message: String,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorPage {
    pub chrome: Chrome,
    pub message: String,
    pub detail: Option<String>,
}
