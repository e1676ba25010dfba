//! Request extractors.

pub mod requested_page;
