//! Ready-made cursor codec strategies for Segue.
//!
//! The core engine treats cursors as opaque tokens; this crate supplies
//! the concrete codecs. Every strategy encodes a `<namespace>:<payload>`
//! plaintext as base64, so tokens are URL-safe-ish, self-describing on
//! inspection, and cheap to validate on the way back in. Decoding is
//! total: any token that fails validation yields `None`, which the
//! engine degrades to "no boundary on that side".
//!
//! # Modules
//!
//! - [`encoding`] - base64 helpers shared by the strategies
//! - [`number`] - `number:` namespace over `i64` keys
//! - [`document`] - `doc:` namespace over 12-byte [`document::DocumentId`] keys

pub mod document;
pub mod encoding;
pub mod number;
