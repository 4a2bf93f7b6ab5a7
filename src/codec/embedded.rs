use std::io::Cursor;

use exif::{In, Reader, Tag, Value};

use crate::coord::RawCoordinate;

/// A GPS magnitude as it appears in the metadata container. Cameras write
/// a degrees/minutes/seconds rational triple; some editing tools re-encode
/// the value as a single pre-combined decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Magnitude {
    Dms {
        degrees: f64,
        minutes: f64,
        seconds: f64,
    },
    Decimal(f64),
}

impl Magnitude {
    /// Classify an EXIF field value. Anything that is neither a triple nor
    /// a single numeric value is unusable.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Rational(r) if r.len() >= 3 => Some(Self::Dms {
                degrees: r[0].to_f64(),
                minutes: r[1].to_f64(),
                seconds: r[2].to_f64(),
            }),
            Value::Rational(r) if r.len() == 1 => Some(Self::Decimal(r[0].to_f64())),
            Value::Float(v) if v.len() == 1 => Some(Self::Decimal(f64::from(v[0]))),
            Value::Double(v) if v.len() == 1 => Some(Self::Decimal(v[0])),
            _ => None,
        }
    }

    fn to_degrees(self) -> f64 {
        match self {
            Self::Dms {
                degrees,
                minutes,
                seconds,
            } => degrees + minutes / 60.0 + seconds / 3600.0,
            Self::Decimal(value) => value,
        }
    }
}

/// Decode a coordinate from EXIF GPS tags in a raw image byte buffer.
///
/// Returns `None` when the buffer holds no readable metadata container,
/// either tag pair is missing, or the values fail to parse. A corrupt
/// container is never an error — the pipeline reports `NoGeoData` instead.
pub fn decode_embedded(bytes: &[u8]) -> Option<RawCoordinate> {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            log::debug!("No readable metadata container: {e}");
            return None;
        }
    };

    let latitude = decode_axis(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, 'S')?;
    let longitude = decode_axis(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, 'W')?;

    Some(RawCoordinate {
        latitude,
        longitude,
    })
}

/// Decode one axis: magnitude tag plus optional hemisphere reference.
fn decode_axis(
    exif: &exif::Exif,
    value_tag: Tag,
    ref_tag: Tag,
    negative_marker: char,
) -> Option<f64> {
    let field = exif.get_field(value_tag, In::PRIMARY)?;
    let magnitude = Magnitude::from_value(&field.value)?;

    let reference = exif
        .get_field(ref_tag, In::PRIMARY)
        .map(|f| f.display_value().to_string());

    Some(apply_hemisphere(
        magnitude.to_degrees(),
        reference.as_deref(),
        negative_marker,
    ))
}

/// Negate for the southern/western hemisphere marker; an absent reference
/// leaves the magnitude as-is.
fn apply_hemisphere(value: f64, reference: Option<&str>, negative_marker: char) -> f64 {
    match reference {
        Some(r) if r.contains(negative_marker) => -value,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::fixtures::gps_tiff;
    use exif::Rational;

    // ── Magnitude classification ─────────────────────────────────────

    #[test]
    fn rational_triple_is_dms() {
        let value = Value::Rational(vec![
            Rational { num: 45, denom: 1 },
            Rational { num: 27, denom: 1 },
            Rational { num: 30, denom: 1 },
        ]);
        let magnitude = Magnitude::from_value(&value).unwrap();
        assert_eq!(
            magnitude,
            Magnitude::Dms {
                degrees: 45.0,
                minutes: 27.0,
                seconds: 30.0
            }
        );
        assert!((magnitude.to_degrees() - 45.458333333).abs() < 1e-9);
    }

    #[test]
    fn single_rational_is_decimal() {
        let value = Value::Rational(vec![Rational {
            num: 45458333,
            denom: 1000000,
        }]);
        let magnitude = Magnitude::from_value(&value).unwrap();
        assert_eq!(magnitude, Magnitude::Decimal(45.458333));
        assert_eq!(magnitude.to_degrees(), 45.458333);
    }

    #[test]
    fn double_is_decimal() {
        let magnitude = Magnitude::from_value(&Value::Double(vec![45.46])).unwrap();
        assert_eq!(magnitude.to_degrees(), 45.46);
    }

    #[test]
    fn unusable_values_are_none() {
        assert!(Magnitude::from_value(&Value::Rational(vec![])).is_none());
        assert!(Magnitude::from_value(&Value::Double(vec![])).is_none());
        assert!(Magnitude::from_value(&Value::Ascii(vec![b"45.46".to_vec()])).is_none());
    }

    // ── hemisphere handling ──────────────────────────────────────────

    #[test]
    fn south_and_west_negate() {
        assert_eq!(apply_hemisphere(45.0, Some("S"), 'S'), -45.0);
        assert_eq!(apply_hemisphere(75.0, Some("W"), 'W'), -75.0);
    }

    #[test]
    fn north_east_or_absent_stay_positive() {
        assert_eq!(apply_hemisphere(45.0, Some("N"), 'S'), 45.0);
        assert_eq!(apply_hemisphere(75.0, Some("E"), 'W'), 75.0);
        assert_eq!(apply_hemisphere(45.0, None, 'S'), 45.0);
    }

    // ── full decode from a container ─────────────────────────────────

    #[test]
    fn decodes_dms_from_gps_ifd() {
        let tiff = gps_tiff(
            [(45, 1), (27, 1), (30, 1)],
            "N",
            [(75, 1), (41, 1), (0, 1)],
            "W",
        );
        let coord = decode_embedded(&tiff).unwrap();
        assert!((coord.latitude - (45.0 + 27.0 / 60.0 + 30.0 / 3600.0)).abs() < 1e-9);
        assert!((coord.longitude - -(75.0 + 41.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn southern_hemisphere_latitude_is_negative() {
        let tiff = gps_tiff(
            [(33, 1), (52, 1), (0, 1)],
            "S",
            [(151, 1), (12, 1), (0, 1)],
            "E",
        );
        let coord = decode_embedded(&tiff).unwrap();
        assert!(coord.latitude < 0.0);
        assert!(coord.longitude > 0.0);
    }

    #[test]
    fn garbage_buffer_is_no_candidate() {
        assert!(decode_embedded(b"definitely not an image").is_none());
        assert!(decode_embedded(&[]).is_none());
    }

    #[test]
    fn truncated_container_is_no_candidate() {
        let tiff = gps_tiff(
            [(45, 1), (27, 1), (30, 1)],
            "N",
            [(75, 1), (41, 1), (0, 1)],
            "W",
        );
        // Cut into the middle of the GPS IFD.
        assert!(decode_embedded(&tiff[..40]).is_none());
    }
}
