//! REST API endpoint implementations.

mod request;
mod search;

pub use request::send_request;
pub use search::{SEARCH_PATH, search};
