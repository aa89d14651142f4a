//! Routing module
//!
//! Matches incoming requests to page handlers:
//! - Path pattern matching with named parameter segments
//! - Prefix-scoped style middleware rules
//! - A single dispatcher that runs the handler and funnels every error
//!   through one rendering path

mod dispatch;
pub mod matcher;
pub mod table;

pub use dispatch::handle_request;
