use serde::Serialize;
use thiserror::Error;

use crate::codec;
use crate::coord::{self, RejectReason};
use crate::fingerprint::fingerprint;
use crate::gazetteer::Gazetteer;
use crate::jitter::{jitter, JitteredCoordinate};

/// Which source the coordinate was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeoSource {
    /// Structured JSON sidecar (user/export-curated, tried first).
    Sidecar,
    /// EXIF GPS tags embedded in the image bytes.
    EmbeddedMetadata,
}

impl std::fmt::Display for GeoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sidecar => write!(f, "sidecar"),
            Self::EmbeddedMetadata => write!(f, "embedded-metadata"),
        }
    }
}

/// The result of a successful ingest — the sole artifact handed to the
/// persistence collaborator. The pipeline itself owns no durable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestOutcome {
    /// Hex SHA-256 of the photo bytes, for deduplication/audit.
    pub fingerprint: String,
    /// Where the coordinate came from.
    pub source: GeoSource,
    /// Name of the nearest gazetteer entry.
    pub matched_area: String,
    /// The jittered coordinate — the only coordinate that may be shown
    /// publicly. The true position is never part of the outcome.
    pub public_coordinate: JitteredCoordinate,
    /// Caller-supplied category label, passed through unvalidated.
    pub room_type: String,
}

/// Why an ingest failed. Both variants mean "no usable location" to the
/// caller; the distinction is kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Neither the sidecar nor the embedded metadata yielded a coordinate.
    #[error("no location data found in photo or sidecar; location data is required")]
    NoGeoData,
    /// A coordinate was decoded but failed validation.
    #[error("location data is unusable ({0:?}); location data is required")]
    InvalidGeoData(RejectReason),
}

/// One photo submission for [`ingest_batch`].
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub photo_bytes: &'a [u8],
    pub sidecar: Option<&'a str>,
    pub room_type: &'a str,
}

/// Run the ingest pipeline for one submitted photo.
///
/// Stages run strictly in sequence: decode (sidecar first, embedded
/// metadata only if the sidecar yields nothing), validate, match against
/// the gazetteer, jitter, fingerprint. Any stage producing no candidate or
/// a rejection short-circuits with the specific reason; nothing is retried.
///
/// Pure function of its inputs apart from the jitter randomness — no I/O,
/// no shared mutable state. The gazetteer is read-only and may be shared
/// across concurrent invocations.
///
/// # Example
///
/// ```rust
/// use geo_ingest::gazetteer::Gazetteer;
/// use geo_ingest::pipeline::{ingest, GeoSource};
///
/// let gazetteer = Gazetteer::builtin();
/// let sidecar = r#"{"geoData":{"latitude":45.46,"longitude":-75.52}}"#;
/// let outcome = ingest(&gazetteer, b"...photo bytes...", Some(sidecar), "kitchen")
///     .expect("sidecar has a usable location");
///
/// assert_eq!(outcome.source, GeoSource::Sidecar);
/// assert_eq!(outcome.matched_area, "Orléans Village - Chateauneuf");
/// ```
pub fn ingest(
    gazetteer: &Gazetteer,
    photo_bytes: &[u8],
    sidecar: Option<&str>,
    room_type: &str,
) -> Result<IngestOutcome, IngestError> {
    // Sidecar first: export-curated data outranks embedded metadata.
    let mut source = GeoSource::Sidecar;
    let mut candidate = sidecar.and_then(codec::decode_sidecar);

    if candidate.is_none() {
        log::debug!("No sidecar candidate, trying embedded metadata");
        candidate = codec::decode_embedded(photo_bytes);
        source = GeoSource::EmbeddedMetadata;
    }

    let raw = candidate.ok_or(IngestError::NoGeoData)?;
    log::debug!("Decoded ({}, {}) from {source}", raw.latitude, raw.longitude);

    let validated = coord::validate(raw).map_err(|reason| {
        log::warn!(
            "Rejected coordinate ({}, {}): {reason:?}",
            raw.latitude,
            raw.longitude
        );
        IngestError::InvalidGeoData(reason)
    })?;

    let matched = gazetteer.nearest(&validated);
    let public_coordinate = jitter(&validated);

    log::info!("Matched area: {} (source: {source})", matched.entry.name);

    Ok(IngestOutcome {
        fingerprint: fingerprint(photo_bytes),
        source,
        matched_area: matched.entry.name.clone(),
        public_coordinate,
        room_type: room_type.to_string(),
    })
}

/// Ingest a batch of photos as independent invocations.
///
/// One photo's failure never aborts the rest; results come back in input
/// order, one per submission.
pub fn ingest_batch(
    gazetteer: &Gazetteer,
    submissions: &[Submission<'_>],
) -> Vec<Result<IngestOutcome, IngestError>> {
    submissions
        .iter()
        .map(|s| ingest(gazetteer, s.photo_bytes, s.sidecar, s.room_type))
        .collect()
}
