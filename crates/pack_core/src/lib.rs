//! Canonical, self-describing binary codec for pack values.

extern crate self as pack;

/// Value model, field metadata, builder, materializer, and the canonical wire codec.
pub mod codec;
