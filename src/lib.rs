//! # geo-ingest
//!
//! Photo geolocation ingest: extract a GPS coordinate from a submitted
//! photo (Google Takeout JSON sidecar or embedded EXIF tags), validate it,
//! assign the nearest named area from a fixed gazetteer, and produce a
//! privacy-jittered coordinate plus a content fingerprint for the caller
//! to persist.
//!
//! ## Quick Start
//!
//! The [`pipeline::ingest`] function runs the full flow for one photo:
//!
//! ```rust,no_run
//! use geo_ingest::gazetteer::Gazetteer;
//! use geo_ingest::pipeline::ingest;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Loaded once at startup; read-only and shareable across threads.
//!     let gazetteer = Gazetteer::load(None)?;
//!
//!     let photo_bytes = std::fs::read("photo.jpg")?;
//!     let sidecar = std::fs::read_to_string("photo.jpg.json").ok();
//!
//!     match ingest(&gazetteer, &photo_bytes, sidecar.as_deref(), "kitchen") {
//!         Ok(outcome) => {
//!             println!("Area: {}", outcome.matched_area);
//!             println!(
//!                 "Public location: ({}, {})",
//!                 outcome.public_coordinate.latitude,
//!                 outcome.public_coordinate.longitude
//!             );
//!             println!("Fingerprint: {}", outcome.fingerprint);
//!         }
//!         Err(e) => eprintln!("Rejected: {e}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The true coordinate never leaves the pipeline: [`pipeline::IngestOutcome`]
//! carries only the jittered position. Decoding failures (corrupt sidecar,
//! unreadable EXIF) downgrade to "no candidate" and fall through to the next
//! source; only a complete absence of usable location data is an error.
//!
//! ## Modules
//!
//! - [`codec`] — coordinate decoding from sidecar JSON and EXIF GPS tags
//! - [`coord`] — raw/validated coordinate types and the validator
//! - [`gazetteer`] — the named-area table and nearest-entry matching
//! - [`jitter`] — bounded random privacy offset
//! - [`fingerprint`] — SHA-256 content digest
//! - [`pipeline`] — per-photo orchestration and the failure taxonomy

pub mod codec;
pub mod coord;
pub mod fingerprint;
pub mod gazetteer;
pub mod jitter;
pub mod pipeline;
