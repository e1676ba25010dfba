//! Window selection and link assembly.

pub mod links;
pub mod window;
