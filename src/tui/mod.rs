pub mod components;
pub mod input;
pub mod theme;
pub mod wrap;

#[cfg(test)]
pub(crate) mod test_support;

pub use theme::{Theme, ThemeMode};
