use crate::models::Device;
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_T%H_%M_%S-UTC";

/// Builds an object name that is unlikely to collide with earlier uploads.
///
/// The result is `basename`, then `_<UTC timestamp>` when `timestamp` is set,
/// then `_<serial>` when a device is given, then `suffix` verbatim.
pub fn unique_name(
    basename: &str,
    suffix: &str,
    timestamp: bool,
    device: Option<&dyn Device>,
) -> String {
    unique_name_at(basename, suffix, timestamp.then(Utc::now), device)
}

/// Same as [`unique_name`] with the timestamp supplied by the caller.
pub fn unique_name_at(
    basename: &str,
    suffix: &str,
    timestamp: Option<DateTime<Utc>>,
    device: Option<&dyn Device>,
) -> String {
    let mut name = String::from(basename);

    if let Some(ts) = timestamp {
        name.push('_');
        name.push_str(&ts.format(TIMESTAMP_FORMAT).to_string());
    }

    if let Some(device) = device {
        name.push('_');
        name.push_str(device.serial());
    }

    name.push_str(suffix);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SerialDevice;
    use chrono::TimeZone;
    use regex::Regex;

    #[test]
    fn timestamp_is_appended_by_default() {
        let re = Regex::new(r"^base_\d{4}_\d{2}_\d{2}_T\d{2}_\d{2}_\d{2}-UTC$").unwrap();
        let name = unique_name("base", "", true, None);
        assert!(re.is_match(&name), "unexpected name {}", name);
    }

    #[test]
    fn timestamp_is_zero_padded_utc() {
        let at = Utc.with_ymd_and_hms(2017, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(
            unique_name_at("shot", "", Some(at), None),
            "shot_2017_03_04_T05_06_07-UTC"
        );
    }

    #[test]
    fn suffix_only() {
        assert_eq!(unique_name("base", ".png", false, None), "base.png");
    }

    #[test]
    fn device_serial_only() {
        let device = SerialDevice::new("XYZ");
        assert_eq!(unique_name("base", "", false, Some(&device)), "base_XYZ");
    }

    #[test]
    fn all_parts_in_order() {
        let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap();
        let device = SerialDevice::new("emulator-5554");
        assert_eq!(
            unique_name_at("render", ".html", Some(at), Some(&device)),
            "render_2024_12_31_T23_59_58-UTC_emulator-5554.html"
        );
    }
}
