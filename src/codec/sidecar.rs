use serde::Deserialize;
use serde_json::Value;

use crate::coord::RawCoordinate;

/// The subset of a Google Takeout photo sidecar we care about.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sidecar {
    geo_data: Option<GeoData>,
}

#[derive(Debug, Deserialize)]
struct GeoData {
    latitude: Option<Value>,
    longitude: Option<Value>,
}

/// Decode a coordinate from a sidecar JSON payload.
///
/// Returns `None` when the payload is not valid JSON, has no `geoData`
/// record, or either field is missing or non-numeric. A malformed sidecar
/// is never an error — the pipeline falls through to embedded metadata.
pub fn decode_sidecar(text: &str) -> Option<RawCoordinate> {
    let sidecar: Sidecar = match serde_json::from_str(text) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("Sidecar is not parseable JSON: {e}");
            return None;
        }
    };

    let geo = sidecar.geo_data?;
    let latitude = coerce_number(geo.latitude.as_ref()?)?;
    let longitude = coerce_number(geo.longitude.as_ref()?)?;

    Some(RawCoordinate {
        latitude,
        longitude,
    })
}

/// Coerce a JSON value to f64. Numbers are used directly; strings are
/// parsed as decimal (Takeout exports have been seen with both). Anything
/// else is non-numeric.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── well-formed sidecars ─────────────────────────────────────────

    #[test]
    fn numeric_fields_decode() {
        let coord =
            decode_sidecar(r#"{"geoData":{"latitude":45.46,"longitude":-75.52}}"#).unwrap();
        assert_eq!(coord.latitude, 45.46);
        assert_eq!(coord.longitude, -75.52);
    }

    #[test]
    fn string_fields_coerce() {
        let coord =
            decode_sidecar(r#"{"geoData":{"latitude":"45.46","longitude":"-75.52"}}"#).unwrap();
        assert_eq!(coord.latitude, 45.46);
        assert_eq!(coord.longitude, -75.52);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let text = r#"{
            "title": "IMG_1234.jpg",
            "geoData": {"latitude": 45.0, "longitude": -75.0, "altitude": 63.1},
            "geoDataExif": {"latitude": 45.0, "longitude": -75.0}
        }"#;
        let coord = decode_sidecar(text).unwrap();
        assert_eq!(coord.latitude, 45.0);
    }

    #[test]
    fn zero_zero_is_still_a_candidate() {
        // The sentinel is the validator's business, not the codec's.
        let coord = decode_sidecar(r#"{"geoData":{"latitude":0,"longitude":0}}"#).unwrap();
        assert_eq!(coord.latitude, 0.0);
        assert_eq!(coord.longitude, 0.0);
    }

    // ── no-candidate cases ───────────────────────────────────────────

    #[test]
    fn missing_geo_data_yields_none() {
        assert!(decode_sidecar(r#"{"title":"IMG_1234.jpg"}"#).is_none());
    }

    #[test]
    fn null_geo_data_yields_none() {
        assert!(decode_sidecar(r#"{"geoData":null}"#).is_none());
    }

    #[test]
    fn missing_field_yields_none() {
        assert!(decode_sidecar(r#"{"geoData":{"latitude":45.46}}"#).is_none());
    }

    #[test]
    fn non_numeric_field_yields_none() {
        assert!(
            decode_sidecar(r#"{"geoData":{"latitude":"north","longitude":-75.52}}"#).is_none()
        );
        assert!(decode_sidecar(r#"{"geoData":{"latitude":true,"longitude":-75.52}}"#).is_none());
        assert!(
            decode_sidecar(r#"{"geoData":{"latitude":[45.46],"longitude":-75.52}}"#).is_none()
        );
    }

    #[test]
    fn malformed_json_yields_none() {
        assert!(decode_sidecar("not json at all").is_none());
        assert!(decode_sidecar(r#"{"geoData":{"#).is_none());
        assert!(decode_sidecar("").is_none());
    }
}
