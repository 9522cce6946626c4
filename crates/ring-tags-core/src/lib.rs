//! Core identity types for ring fiducial tag detection.
//!
//! This crate is intentionally small and purely value-typed. It does *not*
//! depend on any image type, edge detector, or decoder; those live in the
//! detector crates that consume these identities.
//!
//! The central type is [`MarkerId`]: which dictionary pattern (if any) a
//! detection names. The id `0` is reserved as [`MarkerId::UNASSIGNED`],
//! the value decoders propagate when a tag could not be identified.

mod ident;
mod logger;

pub use ident::{MarkerId, ParseMarkerIdError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
