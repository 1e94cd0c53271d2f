//! Pagination types

use super::link::next_page_url;
use reqwest::header::HeaderMap;
use url::Url;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this (unsigned) URL
    Continue(Url),
    /// No more pages
    Done,
}

impl NextPage {
    /// Derive the next page from a response's headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        next_page_url(headers).map_or(Self::Done, Self::Continue)
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The next URL, if any
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Continue(url) => Some(url),
            Self::Done => None,
        }
    }
}
