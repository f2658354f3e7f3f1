//! Utilities used when tokenizing media.

#[cfg(feature = "log")]
pub mod char;
pub mod constant;
pub mod edit_map;
pub mod normalize_identifier;
pub mod skip;
pub mod slice;
