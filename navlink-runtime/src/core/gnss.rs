/// Snapshot of the GNSS receiver state at one query instant.
///
/// Every field is independently optional: a field is `None` when the
/// receiver reported an empty slot for it, or when the slot text failed to
/// parse as the declared type. A receiver without a fix typically reports
/// its status fields while leaving the coordinate-bearing fields empty.
///
/// A fix is constructed fresh per query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionFix {
    /// GNSS engine power state.
    pub gnss_status: Option<u8>,
    /// Fix acquisition state.
    pub fix_status: Option<u8>,
    /// UTC timestamp, `yyyyMMddhhmmss.sss`.
    pub utc: Option<String>,
    /// Latitude in decimal degrees, [-90.0, 90.0].
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, [-180.0, 180.0].
    pub longitude: Option<f64>,
    /// Altitude in meters.
    pub altitude: Option<f32>,
    /// Speed over ground in km/h, [0, 999.99].
    pub speed: Option<f32>,
    /// Course over ground in degrees, [0, 360.00].
    pub course: Option<f32>,
    /// Horizontal dilution of precision, [0, 99.9].
    pub hdop: Option<f32>,
    /// Positional dilution of precision, [0, 99.9].
    pub pdop: Option<f32>,
    /// Vertical dilution of precision, [0, 99.9].
    pub vdop: Option<f32>,
    /// GPS satellites in view, [0, 99].
    pub gps_satellites: Option<u8>,
    /// GNSS satellites used, [0, 99].
    pub gnss_satellites: Option<u8>,
    /// Carrier-to-noise density, up to ~55 dBHz.
    pub signal: Option<f32>,
}

impl PositionFix {
    /// Latitude and longitude pair, if both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl std::fmt::Display for PositionFix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn value<T: std::fmt::Display>(field: &Option<T>) -> String {
            field
                .as_ref()
                .map_or_else(|| "-".to_owned(), |value| value.to_string())
        }

        let mut s = String::new();

        s.push_str(&format!("GNSS status: {}; ", value(&self.gnss_status)));
        s.push_str(&format!("Fix status: {}; ", value(&self.fix_status)));
        s.push_str(&format!("UTC: {}; ", value(&self.utc)));
        s.push_str(&format!("Latitude: {}; ", value(&self.latitude)));
        s.push_str(&format!("Longitude: {}; ", value(&self.longitude)));
        s.push_str(&format!("Altitude: {}; ", value(&self.altitude)));
        s.push_str(&format!("Speed: {}; ", value(&self.speed)));
        s.push_str(&format!("Course: {}; ", value(&self.course)));
        s.push_str(&format!("HDOP: {}; ", value(&self.hdop)));
        s.push_str(&format!("PDOP: {}; ", value(&self.pdop)));
        s.push_str(&format!("VDOP: {}; ", value(&self.vdop)));
        s.push_str(&format!("GPS satellites: {}; ", value(&self.gps_satellites)));
        s.push_str(&format!("GNSS satellites: {}; ", value(&self.gnss_satellites)));
        s.push_str(&format!("Signal: {}", value(&self.signal)));

        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_require_both_axes() {
        let fix = PositionFix {
            latitude: Some(52.092),
            longitude: Some(5.104),
            ..Default::default()
        };

        assert_eq!(fix.coordinates(), Some((52.092, 5.104)));

        let fix = PositionFix {
            latitude: Some(52.092),
            ..Default::default()
        };

        assert_eq!(fix.coordinates(), None);
    }

    #[test]
    fn display_marks_absent_fields() {
        let fix = PositionFix {
            fix_status: Some(1),
            ..Default::default()
        };

        let rendered = fix.to_string();

        assert!(rendered.contains("Fix status: 1"));
        assert!(rendered.contains("Latitude: -"));
        assert!(rendered.ends_with("Signal: -"));
    }
}
