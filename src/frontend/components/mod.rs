//! Reusable UI components

mod alert;
mod button;
mod filter_bar;
mod footer;
mod header;
mod input;
mod loading_screen;
mod markdown;
mod mobile_nav;
mod modal;
mod skeleton;

pub use alert::{EmptyState, ErrorAlert, ErrorPanel, SuccessAlert};
pub use button::{Button, ButtonVariant};
pub use filter_bar::{FilterBar, FilterOption};
pub use footer::Footer;
pub use header::Header;
pub use input::{EmailInput, PasswordInput, TextArea, TextInput};
pub use loading_screen::LoadingScreen;
pub use markdown::MarkdownView;
pub use mobile_nav::MobileNav;
pub use modal::Modal;
pub use skeleton::SkeletonGrid;
