//! Top-level pages, one per `Page` variant

mod admin;
mod blog_post;
mod not_found;
mod portfolio;

pub use admin::AdminPage;
pub use blog_post::BlogPostPage;
pub use not_found::NotFound;
pub use portfolio::PortfolioPage;
