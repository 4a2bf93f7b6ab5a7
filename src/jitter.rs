use rand::Rng;
use serde::Serialize;

use crate::coord::ValidatedCoordinate;

/// Width of the uniform jitter window in degrees. Each axis is offset by a
/// value in `[-JITTER_DEGREES / 2, JITTER_DEGREES / 2)`, roughly ±45 m at
/// Ottawa's latitude. Not clamped afterwards — the gazetteer's extent keeps
/// outputs far from the poles and the antimeridian.
pub const JITTER_DEGREES: f64 = 0.0008;

/// A coordinate safe for public display: the true position plus a bounded
/// random offset. Recomputed per submission, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JitteredCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Apply the privacy offset using the thread-local RNG.
///
/// The RNG is not cryptographically secure and does not need to be — the
/// goal is casual privacy, not adversarial resistance.
pub fn jitter(coordinate: &ValidatedCoordinate) -> JitteredCoordinate {
    jitter_with(coordinate, &mut rand::rng())
}

/// Apply the privacy offset with a caller-supplied RNG. Seed it for
/// deterministic tests.
pub fn jitter_with<R: Rng>(coordinate: &ValidatedCoordinate, rng: &mut R) -> JitteredCoordinate {
    let offset_lat = (rng.random::<f64>() - 0.5) * JITTER_DEGREES;
    let offset_lng = (rng.random::<f64>() - 0.5) * JITTER_DEGREES;

    JitteredCoordinate {
        latitude: coordinate.latitude() + offset_lat,
        longitude: coordinate.longitude() + offset_lng,
    }
}
