//! SVG badge templates.

use crate::weather::{RenderableResult, TextObservation};

/// Escapes the five XML special characters for use in text and attributes.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats an optional reading, "N/A" when the upstream omitted it.
fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// One-line message for the compact badge, keyed on the raw WMO code.
///
/// Unknown codes get the neutral message rather than the `clear` one they
/// classify as.
pub fn fun_message(weather_code: i32) -> &'static str {
    match weather_code {
        0 => "Clear skies 🌞",
        1..=3 => "A bit cloudy ☁️",
        45 | 48 => "Foggy 🌫️",
        51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => "Rainy 🌧️",
        71 | 73 | 75 | 77 => "Snow ❄️",
        95 | 96 | 99 => "Thunder ⚡",
        _ => "Weather looks fine!",
    }
}

/// Full badge: label, temperature with glyph, daily range, precipitation, wind.
pub fn full_badge(result: &RenderableResult) -> String {
    let display = result.condition.display();

    format!(
        r##"<svg width="420" height="180" xmlns="http://www.w3.org/2000/svg">
  <style>
    .city {{ font-family: Verdana, sans-serif; font-size: 18px; fill: white; font-weight: bold; }}
    .temp {{ font-family: Verdana, sans-serif; font-size: 18px; font-weight: bold; fill: {color}; }}
    .info {{ font-family: Verdana, sans-serif; font-size: 14px; fill: white; }}
  </style>

  <rect width="420" height="180" rx="15" ry="15" fill="#1e1e1e"/>

  <text x="20" y="35" class="city">{label}</text>
  <text x="400" y="35" class="temp" text-anchor="end">{temp}°C {glyph}</text>

  <text x="20" y="70" class="info">Min: {min}°C | Max: {max}°C</text>
  <text x="20" y="100" class="info">Precipitation: {precip} mm</text>
  <text x="20" y="130" class="info">Wind: {wind} km/h</text>
</svg>
"##,
        color = display.color,
        label = escape_xml(&result.location_label),
        temp = result.temperature_c,
        glyph = display.glyph,
        min = reading(result.daily_min_c),
        max = reading(result.daily_max_c),
        precip = reading(result.daily_precipitation_mm),
        wind = result.wind_speed_kmh,
    )
}

/// Compact badge: label, temperature and a short message.
pub fn compact_badge(result: &RenderableResult) -> String {
    format!(
        r##"<svg width="420" height="120" xmlns="http://www.w3.org/2000/svg">
  <style>
    .city {{ font-family: Verdana, sans-serif; font-size: 18px; fill: white; font-weight: bold; }}
    .temp {{ font-family: Verdana, sans-serif; font-size: 18px; font-weight: bold; fill: skyblue; }}
    .info {{ font-family: Verdana, sans-serif; font-size: 14px; fill: orange; }}
  </style>

  <rect width="420" height="120" rx="15" ry="15" fill="#1e1e1e"/>

  <text x="20" y="35" class="city">{label}</text>
  <text x="400" y="35" class="temp" text-anchor="end">{temp}°C</text>

  <text x="20" y="75" class="info">{message}</text>
</svg>
"##,
        label = escape_xml(&result.location_label),
        temp = result.temperature_c,
        message = escape_xml(fun_message(result.weather_code)),
    )
}

/// Temperature badge for the free-text source.
pub fn temperature_badge(observation: &TextObservation) -> String {
    let display = observation.condition.display();

    format!(
        r##"<svg width="300" height="120" xmlns="http://www.w3.org/2000/svg">
  <style>
    text {{ font-family: "Verdana", "DejaVu Sans", sans-serif; }}
  </style>
  <rect width="300" height="120" rx="15" ry="15" fill="#1e1e1e"/>
  <text x="150" y="40" font-size="18" font-weight="bold" text-anchor="middle" fill="white">
    Current Weather in {city}
  </text>
  <text x="150" y="85" font-size="32" text-anchor="middle" fill="{color}">
    {temp} {glyph}
  </text>
</svg>
"##,
        city = escape_xml(&observation.city),
        color = display.color,
        temp = escape_xml(&observation.temperature),
        glyph = display.glyph,
    )
}
