//! Route and middleware tables
//!
//! Ordered, static bindings: prefix-scoped style rules run before the
//! matched handler; routes are tried in declaration order.

use hyper::Method;

use super::matcher::{match_pattern, Params};

/// Logical page endpoints, one per route handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Home,
    About,
    Demo,
    TestError,
    CatalogList,
    CatalogDetail,
    FacultyList,
    FacultyDetail,
    RegisterForm,
    RegisterSubmit,
    RegisterList,
}

pub struct Route {
    pub method: Method,
    pub pattern: &'static str,
    pub endpoint: Endpoint,
}

/// A prefix-scoped style-injection rule. Every rule whose prefix covers the
/// request path contributes its stylesheet, in declaration order.
pub struct StyleRule {
    pub prefix: &'static str,
    pub href: &'static str,
}

pub static ROUTES: &[Route] = &[
    Route { method: Method::GET, pattern: "/", endpoint: Endpoint::Home },
    Route { method: Method::GET, pattern: "/about", endpoint: Endpoint::About },
    Route { method: Method::GET, pattern: "/catalog", endpoint: Endpoint::CatalogList },
    Route { method: Method::GET, pattern: "/catalog/:id", endpoint: Endpoint::CatalogDetail },
    Route { method: Method::GET, pattern: "/faculty", endpoint: Endpoint::FacultyList },
    Route { method: Method::GET, pattern: "/faculty/:slug", endpoint: Endpoint::FacultyDetail },
    Route { method: Method::GET, pattern: "/register", endpoint: Endpoint::RegisterForm },
    Route { method: Method::POST, pattern: "/register", endpoint: Endpoint::RegisterSubmit },
    Route { method: Method::GET, pattern: "/register/list", endpoint: Endpoint::RegisterList },
    Route { method: Method::GET, pattern: "/demo", endpoint: Endpoint::Demo },
    Route { method: Method::GET, pattern: "/test-error", endpoint: Endpoint::TestError },
];

pub static STYLE_RULES: &[StyleRule] = &[
    StyleRule { prefix: "/catalog", href: "/css/catalog.css" },
    StyleRule { prefix: "/faculty", href: "/css/faculty.css" },
    StyleRule { prefix: "/", href: "/css/main.css" },
];

/// Find the first route matching the method and path, in declaration order.
pub fn match_route(method: &Method, path: &str) -> Option<(Endpoint, Params)> {
    ROUTES.iter().find_map(|route| {
        if route.method != *method {
            return None;
        }
        match_pattern(route.pattern, path).map(|params| (route.endpoint, params))
    })
}
