//! Server-rendered HTML front end.

pub mod handlers;
pub mod layout;
pub mod pages;
pub mod recommender_page;
pub mod static_pages;

pub use pages::Page;
