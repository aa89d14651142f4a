// Page handler module entry point
// One submodule per logical resource; every handler returns
// `Result<PageOutcome, PageError>` and never writes a response itself

pub mod catalog;
pub mod faculty;
pub mod registration;
pub mod site;

/// The successful result of a page handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// A rendered HTML body, plus any extra response headers.
    Page {
        html: String,
        headers: Vec<(&'static str, String)>,
    },
    /// A redirect to another path.
    Redirect(String),
}

impl PageOutcome {
    pub fn page(html: String) -> Self {
        Self::Page {
            html,
            headers: Vec::new(),
        }
    }

    pub fn page_with_headers(html: String, headers: Vec<(&'static str, String)>) -> Self {
        Self::Page { html, headers }
    }

    pub fn redirect(target: impl Into<String>) -> Self {
        Self::Redirect(target.into())
    }
}
