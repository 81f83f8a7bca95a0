//! Object key generation for uploaded images

use chrono::Utc;
use rand::Rng;

/// Length of the random base36 suffix
const SUFFIX_LEN: usize = 13;

/// Alphabet of the random suffix (lowercase base36)
const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Extension used when the original filename carries none
const DEFAULT_EXTENSION: &str = "jpg";

/// Derives a new object key of the form `<unix_millis>-<random_base36>.<ext>`
///
/// The extension is taken from after the last `.` of the original filename,
/// falling back to `jpg` when the filename is missing or has no extension.
/// Uniqueness is probabilistic (timestamp plus random suffix); no collision
/// check is performed against the store.
#[must_use]
pub fn generate_object_key(filename: Option<&str>) -> String {
    let timestamp = Utc::now().timestamp_millis();

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    let extension = filename
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION);

    format!("{timestamp}-{suffix}.{extension}")
}
