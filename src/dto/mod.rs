//! DTO modules that bridge services with templates and the bookstore API.

pub mod api;
pub mod books;
