//! Codificación polyline de Google (precisión 5)
//!
//! GraphHopper devuelve la geometría de la ruta como un polyline
//! compacto; aquí se decodifica a pares (lat, lon) en la frontera
//! del adaptador. La codificación inversa existe para los tests.

use thiserror::Error;

/// Error al decodificar un polyline malformado
#[derive(Error, Debug, PartialEq)]
pub enum PolylineError {
    #[error("polyline truncado en el byte {0}")]
    Truncated(usize),

    #[error("byte inválido {0:#x} en el polyline")]
    InvalidByte(u8),

    #[error("varint demasiado largo en el byte {0}")]
    Overlong(usize),
}

/// Decodificar un polyline a una secuencia ordenada de pares (lat, lon)
pub fn decode(encoded: &str) -> Result<Vec<(f64, f64)>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut coords = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, consumed) = decode_value(bytes, index)?;
        index += consumed;
        lat += delta_lat;

        let (delta_lng, consumed) = decode_value(bytes, index)?;
        index += consumed;
        lng += delta_lng;

        coords.push((lat as f64 / 1e5, lng as f64 / 1e5));
    }

    Ok(coords)
}

/// Codificar una secuencia de pares (lat, lon) como polyline
pub fn encode(coords: &[(f64, f64)]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for &(lat, lng) in coords {
        let lat_e5 = (lat * 1e5).round() as i64;
        let lng_e5 = (lng * 1e5).round() as i64;

        encode_value(lat_e5 - prev_lat, &mut encoded);
        encode_value(lng_e5 - prev_lng, &mut encoded);

        prev_lat = lat_e5;
        prev_lng = lng_e5;
    }

    encoded
}

/// Leer un delta zigzag en bloques de 5 bits a partir de `start`
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0;
    let mut index = start;

    loop {
        let byte = *bytes.get(index).ok_or(PolylineError::Truncated(index))?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidByte(byte));
        }
        // Un delta válido cabe en 12 bloques de 5 bits; más allá el
        // shift desbordaría el i64
        if shift > 60 {
            return Err(PolylineError::Overlong(index));
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        index += 1;

        if chunk < 0x20 {
            break;
        }
    }

    let value = if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    };

    Ok((value, index - start))
}

fn encode_value(value: i64, out: &mut String) {
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };

    while v >= 0x20 {
        out.push((((v & 0x1f) | 0x20) as u8 + 63) as char);
        v >>= 5;
    }
    out.push((v as u8 + 63) as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture de referencia de la especificación del formato
    const FIXTURE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";
    const FIXTURE_COORDS: [(f64, f64); 3] =
        [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];

    #[test]
    fn test_decode_reference_fixture() {
        let coords = decode(FIXTURE).unwrap();
        assert_eq!(coords, FIXTURE_COORDS.to_vec());
    }

    #[test]
    fn test_encode_reference_fixture() {
        assert_eq!(encode(&FIXTURE_COORDS), FIXTURE);
    }

    #[test]
    fn test_round_trip() {
        let coords = vec![(49.33, -123.03), (49.25, -122.97)];
        let decoded = decode(&encode(&coords)).unwrap();
        assert_eq!(decoded, coords);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<(f64, f64)>::new());
    }

    #[test]
    fn test_decode_truncated() {
        // Falta el componente de longitud del primer punto
        assert!(matches!(decode("_p~iF").unwrap_err(), PolylineError::Truncated(_)));
    }

    #[test]
    fn test_decode_invalid_byte() {
        assert!(matches!(decode("_p~iF\x01~ps|U").unwrap_err(), PolylineError::InvalidByte(_)));
    }

    #[test]
    fn test_decode_overlong_varint() {
        // Bytes de continuación sin fin: el delta no cabe en un i64
        let malformed = "~".repeat(14) + "?";
        assert!(matches!(decode(&malformed).unwrap_err(), PolylineError::Overlong(_)));
    }
}
