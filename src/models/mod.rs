//! Page state and the link DTOs handed to templates.

pub mod display;
pub mod pagination;
