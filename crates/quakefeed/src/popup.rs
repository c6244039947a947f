use chrono::{TimeZone, Utc};

use crate::earthquake::Earthquake;

/// Popup body for one earthquake: place heading, magnitude, depth, and time.
///
/// Missing values render as `N/A` rather than dropping the row, matching
/// what the feed consumers expect to see for incomplete events.
pub fn popup_html(quake: &Earthquake) -> String {
    let place = quake.place.as_deref().unwrap_or("Unknown location");

    let magnitude = match quake.magnitude {
        Some(m) => m.to_string(),
        None => "N/A".to_string(),
    };

    let depth = match quake.depth_km {
        Some(d) => format!("{d} km"),
        None => "N/A".to_string(),
    };

    let time = match quake.time_ms.and_then(format_event_time) {
        Some(t) => t,
        None => "N/A".to_string(),
    };

    format!(
        "<h3>{place}</h3><hr>\
         <p><strong>Magnitude:</strong> {magnitude}</p>\
         <p><strong>Depth:</strong> {depth}</p>\
         <p><strong>Time:</strong> {time}</p>"
    )
}

fn format_event_time(time_ms: i64) -> Option<String> {
    let when = Utc.timestamp_millis_opt(time_ms).single()?;
    Some(when.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
