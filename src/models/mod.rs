pub use achievement::*;
pub use blog_post::*;
pub use category::*;
pub use certification::*;
pub use content_status::*;
pub use project::*;
pub use skill::*;

mod achievement;
mod blog_post;
mod category;
mod certification;
mod content_status;
mod project;
mod skill;

use serde::{Deserialize, Deserializer};

/// Reads a nullable column into the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
