//! Domain values exchanged between the back-office form and the bookstore API.

pub mod book;
pub mod material;
pub mod page_option;
pub mod types;
