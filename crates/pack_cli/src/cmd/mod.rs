/// Typed JSON encode command.
pub mod encode;
/// Payload decode and print command.
pub mod inspect;
/// Typed JSON representation of value trees.
pub mod json;
/// Text rendering of value trees.
pub mod print;
pub(crate) mod util;
