// Per-request context
// Built fresh for every request; never shared across requests

use std::collections::HashMap;

use chrono::{Datelike, Utc};

use crate::config::Env;
use crate::routing::matcher::{prefix_matches, Params};
use crate::routing::table::STYLE_RULES;
use crate::views::Chrome;

/// Request-scoped values threaded through middleware and handlers.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub env: Env,
    pub year: i32,
    pub styles: Vec<&'static str>,
    pub params: Params,
    query: HashMap<String, String>,
}

impl PageContext {
    /// Build the context for one request: environment flag, current year,
    /// parsed query map, and the style links contributed by every prefix
    /// rule covering the path, in registration order.
    pub fn for_request(env: Env, path: &str, query: Option<&str>) -> Self {
        let styles = STYLE_RULES
            .iter()
            .filter(|rule| prefix_matches(rule.prefix, path))
            .map(|rule| rule.href)
            .collect();

        let query = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();

        Self {
            env,
            year: Utc::now().year(),
            styles,
            params: Params::new(),
            query,
        }
    }

    /// Attach route parameters once a route has matched.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// The template shell values for this request.
    pub fn chrome(&self, title: impl Into<String>) -> Chrome {
        Chrome {
            title: title.into(),
            styles: self.styles.clone(),
            year: self.year,
            dev: self.env.is_development(),
        }
    }
}
