//! Coordinate decoding from the two supported sources.
//!
//! - [`decode_sidecar`] — structured JSON sidecar (Google Takeout export)
//! - [`decode_embedded`] — EXIF GPS tags embedded in the image bytes
//!
//! Both decoders return `Option<RawCoordinate>`: structurally broken input
//! is downgraded to "no candidate" (logged at debug) so the pipeline can
//! fall through to the next source. Neither decoder validates the
//! coordinate — that is the validator's job.

mod embedded;
mod sidecar;

pub use embedded::decode_embedded;
pub use sidecar::decode_sidecar;
