use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::core::PositionFix;

/// Number of comma-terminated slots in a fix report line.
const FIELD_COUNT: usize = 20;

static GRAMMAR: OnceLock<Regex> = OnceLock::new();

/// Decoder for `+CGNSINF` fix report lines.
///
/// A report line carries the tag followed by 20 comma-terminated positional
/// slots. The line is accepted or rejected as a whole on its shape alone;
/// slot contents are then decoded field by field, and a slot that is empty
/// or fails its typed parse leaves that field unset without affecting any
/// other field.
pub struct Cgnsinf;

impl Cgnsinf {
    fn grammar() -> &'static Regex {
        GRAMMAR.get_or_init(|| {
            Regex::new(&format!(r"^\+CGNSINF: {}$", r"([^,]*),".repeat(FIELD_COUNT))).unwrap()
        })
    }

    fn field<T: FromStr>(caps: &Captures, slot: usize) -> Option<T> {
        caps[slot].parse().ok()
    }

    /// Decode a single response line into a fix record.
    ///
    /// Returns `None` when the line does not structurally match the report
    /// grammar. Slots 9, 10, 14 and 17 through 19 are reserved; they are
    /// consumed for alignment but never exposed.
    pub fn decode(&self, line: &str) -> Option<PositionFix> {
        let caps = Self::grammar().captures(line)?;

        let utc = &caps[3];

        Some(PositionFix {
            gnss_status: Self::field(&caps, 1),
            fix_status: Self::field(&caps, 2),
            utc: (!utc.is_empty()).then(|| utc.to_owned()),
            latitude: Self::field(&caps, 4),
            longitude: Self::field(&caps, 5),
            altitude: Self::field(&caps, 6),
            speed: Self::field(&caps, 7),
            course: Self::field(&caps, 8),
            hdop: Self::field(&caps, 11),
            pdop: Self::field(&caps, 12),
            vdop: Self::field(&caps, 13),
            gps_satellites: Self::field(&caps, 15),
            gnss_satellites: Self::field(&caps, 16),
            signal: Self::field(&caps, 20),
        })
    }
}
