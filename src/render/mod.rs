//! Render Module
//!
//! Turns lookup results into SVG badges or JSON reports.

pub mod json;
pub mod svg;

pub use json::WeatherReport;
pub use svg::{compact_badge, escape_xml, full_badge, fun_message, temperature_badge};
