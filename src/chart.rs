//! Turn filtered detections into stacked-bar segments.
//!
//! `compose` only describes the chart; `render` draws it.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::catalog::LanguageCatalog;
use crate::detector::DetectionResult;
use crate::error::LookupError;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#1f78b4`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Qualitative 12-color "Paired" palette.
pub const PAIRED: [Color; 12] = [
    Color::rgb(0xa6, 0xce, 0xe3),
    Color::rgb(0x1f, 0x78, 0xb4),
    Color::rgb(0xb2, 0xdf, 0x8a),
    Color::rgb(0x33, 0xa0, 0x2c),
    Color::rgb(0xfb, 0x9a, 0x99),
    Color::rgb(0xe3, 0x1a, 0x1c),
    Color::rgb(0xfd, 0xbf, 0x6f),
    Color::rgb(0xff, 0x7f, 0x00),
    Color::rgb(0xca, 0xb2, 0xd6),
    Color::rgb(0x6a, 0x3d, 0x9a),
    Color::rgb(0xff, 0xff, 0x99),
    Color::rgb(0xb1, 0x59, 0x28),
];

/// Colors for `count` consecutive segments.
///
/// Up to the palette size, colors are sampled evenly across the whole
/// palette so that small charts use contrasting ends of it. Beyond that the
/// palette cycles; neighbours never share a color either way.
pub fn palette(count: usize) -> Vec<Color> {
    let size = PAIRED.len();
    if count <= 1 {
        return PAIRED.iter().copied().take(count).collect();
    }
    if count > size {
        return (0..count).map(|i| PAIRED[i % size]).collect();
    }

    (0..count)
        .map(|i| {
            let position = i as f64 / (count - 1) as f64;
            let index = ((position * size as f64) as usize).min(size - 1);
            PAIRED[index]
        })
        .collect()
}

/// One slice of the stacked bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment {
    pub language_code: String,
    pub label: String,
    pub start_fraction: f64,
    pub width_fraction: f64,
    pub color: Color,
}

// Colors serialize as CSS hex strings.
impl Serialize for ChartSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChartSegment", 5)?;
        state.serialize_field("language_code", &self.language_code)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("start_fraction", &self.start_fraction)?;
        state.serialize_field("width_fraction", &self.width_fraction)?;
        state.serialize_field("color", &self.color.to_hex())?;
        state.end()
    }
}

/// Legend label, e.g. "English 80.0%".
pub fn segment_label(display_name: &str, proportion: f64) -> String {
    format!("{} {:.1}%", display_name, proportion * 100.0)
}

/// Lay out `results` as consecutive segments of one bar, in input order.
///
/// Every code is resolved before any segment is produced, so an unknown code
/// yields an error and no partial chart.
pub fn compose(
    results: &[DetectionResult],
    catalog: &LanguageCatalog,
) -> Result<Vec<ChartSegment>, LookupError> {
    let entries = results
        .iter()
        .map(|result| catalog.resolve(&result.language_code))
        .collect::<Result<Vec<_>, _>>()?;

    let colors = palette(results.len());
    let mut start = 0.0;

    Ok(results
        .iter()
        .zip(entries)
        .zip(colors)
        .map(|((result, entry), color)| {
            let segment = ChartSegment {
                language_code: result.language_code.clone(),
                label: segment_label(entry.display_name, result.proportion),
                start_fraction: start,
                width_fraction: result.proportion,
                color,
            };
            start += result.proportion;
            segment
        })
        .collect())
}
