//! Pagination module
//!
//! Listing endpoints return one page at a time and point at the next page
//! with a `Link: <url>; rel="next"` response header.
//!
//! # Overview
//!
//! The next page is a pure function of the current response's headers, so
//! the collector carries nothing between iterations except the next URL.
//! Pages are fetched strictly one after another.

mod collector;
mod link;
mod types;

pub use collector::collect_pages;
pub use link::next_page_url;
pub use types::NextPage;

#[cfg(test)]
mod tests;
