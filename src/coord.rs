use serde::{Deserialize, Serialize};

/// A geographic coordinate as decoded from a sidecar or from EXIF.
///
/// No invariant is enforced at construction — the value may be non-finite,
/// out of range, or the `(0,0)` "location services disabled" sentinel.
/// Run it through [`validate`] before doing anything with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A coordinate that has passed [`validate`].
///
/// Fields are private so the only way to obtain one is through the
/// validator; everything downstream of the codec (matching, jittering)
/// accepts only this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedCoordinate {
    latitude: f64,
    longitude: f64,
}

impl ValidatedCoordinate {
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Why a decoded coordinate was rejected. Internal diagnostic code — the
/// caller-facing message is the same for all of them (no usable location).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// A component is NaN or infinite.
    NonFinite,
    /// Exactly `(0,0)` — cameras emit this when location services are off.
    ZeroSentinel,
    /// Latitude outside `[-90, 90]` or longitude outside `[-180, 180]`.
    OutOfRange,
}

/// Validate a raw coordinate.
///
/// Checks run in a fixed order (non-finite, zero sentinel, range) so the
/// reported reason is deterministic; the order does not change which
/// coordinates pass. Values are carried through unchanged.
pub fn validate(raw: RawCoordinate) -> Result<ValidatedCoordinate, RejectReason> {
    let RawCoordinate {
        latitude,
        longitude,
    } = raw;

    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(RejectReason::NonFinite);
    }

    if latitude == 0.0 && longitude == 0.0 {
        return Err(RejectReason::ZeroSentinel);
    }

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(RejectReason::OutOfRange);
    }

    Ok(ValidatedCoordinate {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(latitude: f64, longitude: f64) -> RawCoordinate {
        RawCoordinate {
            latitude,
            longitude,
        }
    }

    // ── passing coordinates ──────────────────────────────────────────

    #[test]
    fn valid_coordinate_passes_unchanged() {
        let v = validate(raw(45.46, -75.52)).unwrap();
        assert_eq!(v.latitude(), 45.46);
        assert_eq!(v.longitude(), -75.52);
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        assert!(validate(raw(90.0, 180.0)).is_ok());
        assert!(validate(raw(-90.0, -180.0)).is_ok());
    }

    #[test]
    fn single_zero_component_is_fine() {
        assert!(validate(raw(0.0, -75.52)).is_ok());
        assert!(validate(raw(45.46, 0.0)).is_ok());
    }

    // ── rejections ───────────────────────────────────────────────────

    #[test]
    fn nan_rejected() {
        assert_eq!(validate(raw(f64::NAN, -75.52)), Err(RejectReason::NonFinite));
        assert_eq!(validate(raw(45.46, f64::NAN)), Err(RejectReason::NonFinite));
    }

    #[test]
    fn infinite_rejected() {
        assert_eq!(
            validate(raw(f64::INFINITY, 0.0)),
            Err(RejectReason::NonFinite)
        );
        assert_eq!(
            validate(raw(0.0, f64::NEG_INFINITY)),
            Err(RejectReason::NonFinite)
        );
    }

    #[test]
    fn zero_zero_sentinel_rejected() {
        assert_eq!(validate(raw(0.0, 0.0)), Err(RejectReason::ZeroSentinel));
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(validate(raw(90.5, 0.0)), Err(RejectReason::OutOfRange));
        assert_eq!(validate(raw(-91.0, 0.0)), Err(RejectReason::OutOfRange));
        assert_eq!(validate(raw(0.0, 180.1)), Err(RejectReason::OutOfRange));
        assert_eq!(validate(raw(0.0, -200.0)), Err(RejectReason::OutOfRange));
    }

    #[test]
    fn non_finite_reported_before_range() {
        // NaN fails the range check too; the reason must be NonFinite.
        assert_eq!(
            validate(raw(f64::NAN, 999.0)),
            Err(RejectReason::NonFinite)
        );
    }
}
