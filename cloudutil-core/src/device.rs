//! Find My device records and their display formatting.
//!
//! The wire shape is the device dictionary returned by the iCloud
//! "fmipservice" endpoint (the same JSON the debug copy-to-clipboard
//! action dumps). Every field except `name` is optional: absent data
//! renders as "unknown" instead of failing the whole record.

use serde::{Deserialize, Serialize};

use crate::CoreError;
use crate::text::{battery_percent, enabled, friendly_bool};
use crate::tformat::{TimeFormat, format_time_with};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub name: String,
    #[serde(default)]
    pub device_display_name: Option<String>,
    #[serde(default)]
    pub device_status: Option<String>,
    #[serde(default)]
    pub device_model: Option<String>,
    #[serde(default)]
    pub raw_device_model: Option<String>,
    #[serde(default)]
    pub battery_status: Option<String>,
    #[serde(default)]
    pub battery_level: Option<f64>,
    #[serde(rename = "baUUID", default)]
    pub ba_uuid: Option<String>,
    #[serde(default)]
    pub device_discovery_id: Option<String>,
    #[serde(default)]
    pub low_power_mode: Option<bool>,
    #[serde(default)]
    pub activation_locked: Option<bool>,
    #[serde(default)]
    pub passcode_length: Option<u32>,
    #[serde(rename = "fmlyShare", default)]
    pub family_share: Option<bool>,
    #[serde(default)]
    pub lost_mode_enabled: Option<bool>,
    #[serde(default)]
    pub lost_mode_capable: Option<bool>,
    #[serde(default)]
    pub wipe_in_progress: Option<bool>,
    #[serde(default)]
    pub can_wipe_after_lock: Option<bool>,
    #[serde(default)]
    pub location_enabled: Option<bool>,
    #[serde(default)]
    pub location_capable: Option<bool>,
    #[serde(default)]
    pub is_locating: Option<bool>,
    #[serde(default)]
    pub device_with_you: Option<bool>,
    #[serde(default)]
    pub location: Option<DeviceLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLocation {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub floor_level: Option<i32>,
    #[serde(default)]
    pub horizontal_accuracy: Option<f64>,
    #[serde(default)]
    pub vertical_accuracy: Option<f64>,
    #[serde(default)]
    pub position_type: Option<String>,
    #[serde(default)]
    pub is_inaccurate: Option<bool>,
    /// Unix milliseconds of the last location fix.
    #[serde(rename = "timeStamp", default)]
    pub timestamp_unix_ms: Option<u64>,
}

pub fn parse_device(json: &str) -> Result<DeviceSnapshot, CoreError> {
    serde_json::from_str(json).map_err(|err| CoreError::Parse(err.to_string()))
}

/// Parse a device dump holding either a single object or an array.
pub fn parse_device_dump(json: &str) -> Result<Vec<DeviceSnapshot>, CoreError> {
    match serde_json::from_str::<Vec<DeviceSnapshot>>(json) {
        Ok(devices) => Ok(devices),
        Err(_) => parse_device(json).map(|device| vec![device]),
    }
}

/// Human label for a Find My device status code. Unrecognized codes are
/// echoed back unchanged.
pub fn status_label(code: &str) -> &str {
    match code {
        "200" => "Online",
        "201" => "Offline",
        "203" => "Pending",
        "204" => "Unregistered",
        other => other,
    }
}

/// One-line device listing entry: name, display name, battery level and
/// battery status, comma separated, skipping whatever is absent.
pub fn summary_line(device: &DeviceSnapshot) -> String {
    let mut parts = vec![device.name.clone()];
    if let Some(display_name) = &device.device_display_name {
        parts.push(display_name.clone());
    }
    if let Some(level) = device.battery_level {
        parts.push(battery_percent(level));
    }
    if let Some(status) = &device.battery_status {
        parts.push(status.clone());
    }
    parts.join(", ")
}

/// Labeled attribute listing for the device info view.
///
/// `now_unix_ms` anchors the "Location updated ... ago" line; location
/// timestamps in the future clamp to zero elapsed time.
pub fn info_fields(device: &DeviceSnapshot, now_unix_ms: u64) -> Vec<(&'static str, String)> {
    let unknown = || "unknown".to_owned();
    let opt = |value: &Option<String>| value.clone().unwrap_or_else(unknown);
    let flag = |value: Option<bool>| enabled(value.unwrap_or(false)).to_owned();
    let yes_no = |value: Option<bool>| friendly_bool(value.unwrap_or(false)).to_owned();

    let model = match (&device.device_model, &device.raw_device_model) {
        (Some(model), Some(raw)) => format!("{model} ({raw})"),
        (Some(model), None) => model.clone(),
        (None, _) => unknown(),
    };
    let status = device
        .device_status
        .as_deref()
        .map(|code| status_label(code).to_owned())
        .unwrap_or_else(unknown);
    let battery = device
        .battery_level
        .map(battery_percent)
        .unwrap_or_else(unknown);
    let passcode = device
        .passcode_length
        .map(|len| len.to_string())
        .unwrap_or_else(unknown);

    let mut fields = vec![
        ("Name", device.name.clone()),
        ("Status", status),
        ("Model", model),
        ("Display name", opt(&device.device_display_name)),
        ("Battery status", opt(&device.battery_status)),
        ("Battery level", battery),
        ("UUID", opt(&device.ba_uuid)),
        ("Discovery ID", opt(&device.device_discovery_id)),
        ("Low power mode", flag(device.low_power_mode)),
        ("Activation lock", flag(device.activation_locked)),
        ("Passcode length", passcode),
        ("Family share", flag(device.family_share)),
        ("Lost mode", flag(device.lost_mode_enabled)),
        ("Lost mode capable", yes_no(device.lost_mode_capable)),
        ("Wipe in progress", yes_no(device.wipe_in_progress)),
        (
            "Wipe after lock/failed pass code attempts",
            flag(device.can_wipe_after_lock),
        ),
        ("Location services", flag(device.location_enabled)),
        ("Location capable", yes_no(device.location_capable)),
        ("Is locating", yes_no(device.is_locating)),
        ("Device with you", yes_no(device.device_with_you)),
    ];

    if let Some(location) = &device.location {
        let num = |value: Option<f64>| value.unwrap_or(0.0).to_string();
        fields.push(("Location inaccurate", yes_no(location.is_inaccurate)));
        fields.push(("Position type", opt(&location.position_type)));
        fields.push(("Latitude", num(location.latitude)));
        fields.push(("Longitude", num(location.longitude)));
        fields.push(("Altitude", num(location.altitude)));
        fields.push((
            "Floor level",
            location.floor_level.unwrap_or(0).to_string(),
        ));
        fields.push(("Horizontal accuracy", num(location.horizontal_accuracy)));
        fields.push(("Vertical accuracy", num(location.vertical_accuracy)));
        if let Some(timestamp) = location.timestamp_unix_ms {
            let elapsed_ms = now_unix_ms.saturating_sub(timestamp);
            let elapsed = format_time_with(
                elapsed_ms as f64,
                TimeFormat {
                    milliseconds: true,
                    pretty: true,
                },
            );
            fields.push(("Location updated", format!("{elapsed} ago")));
        }
    }

    fields
}

/// [`info_fields`] rendered as "Label: value" lines.
pub fn info_lines(device: &DeviceSnapshot, now_unix_ms: u64) -> Vec<String> {
    info_fields(device, now_unix_ms)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect()
}

/// Confirmation shown after a play-sound request is accepted.
pub fn play_sound_message(device: &DeviceSnapshot) -> String {
    format!("A sound is being played on {}. Listen up!", device.name)
}

/// Confirmation shown after lost mode is enabled on a device.
pub fn lost_mode_message(device: &DeviceSnapshot) -> String {
    format!("Lost mode enabled on {}", device.name)
}

/// User input for enabling lost mode on a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LostModeRequest {
    /// Message displayed on the lost device's screen.
    pub message: String,
    /// Owner phone number; empty means none.
    pub owner_number: String,
    /// New passcode; empty means keep the current one.
    pub passcode: String,
    /// Second entry of the new passcode.
    pub passcode_repeat: String,
}

impl LostModeRequest {
    /// A message is required, and when a new passcode is supplied it must
    /// match the repeated entry.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.message.is_empty() {
            return Err(CoreError::LostModeMessageRequired);
        }
        if !self.passcode.is_empty() && self.passcode != self.passcode_repeat {
            return Err(CoreError::PasscodeMismatch);
        }
        Ok(())
    }
}

/// Coordinates of the last location fix.
pub fn coordinates(device: &DeviceSnapshot) -> Result<(f64, f64), CoreError> {
    let location = device.location.as_ref().ok_or(CoreError::NoLocation)?;
    match (location.latitude, location.longitude) {
        (Some(latitude), Some(longitude)) => Ok((latitude, longitude)),
        _ => Err(CoreError::NoCoordinates),
    }
}

/// Sentence shown after a locate action, e.g. "As of 2 minutes and 5
/// seconds ago, your device is located at or near Springfield.".
///
/// `place_name` comes from the caller's reverse geocoder; this crate
/// performs no network lookups of its own.
pub fn location_summary(
    device: &DeviceSnapshot,
    place_name: &str,
    now_unix_ms: u64,
) -> Result<String, CoreError> {
    let location = device.location.as_ref().ok_or(CoreError::NoLocation)?;
    let timestamp = location
        .timestamp_unix_ms
        .ok_or(CoreError::NoLocationTimestamp)?;
    let elapsed_ms = now_unix_ms.saturating_sub(timestamp);
    let elapsed = format_time_with(
        elapsed_ms as f64,
        TimeFormat {
            milliseconds: true,
            pretty: true,
        },
    );
    Ok(format!(
        "As of {elapsed} ago, your device is located at or near {place_name}."
    ))
}
