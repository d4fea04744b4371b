pub mod auth;
pub mod contact;
pub mod github;
pub mod markdown;
