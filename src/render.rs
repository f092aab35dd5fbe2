//! Drawing: SVG bar chart, the HTML page around it, and a terminal variant.

use std::fmt::Write;

use crate::chart::ChartSegment;

const BAR_WIDTH: f64 = 480.0;
const BAR_HEIGHT: f64 = 60.0;
const LEGEND_X: f64 = BAR_WIDTH + 16.0;
const LEGEND_ROW_HEIGHT: f64 = 18.0;
const LEGEND_SWATCH: f64 = 10.0;
const LEGEND_WIDTH: f64 = 200.0;

/// Width of the bar drawn by `text_chart`, in cells.
const TEXT_BAR_CELLS: usize = 50;

pub const PAGE_TITLE: &str = "Language Detection";
pub const NO_SIGNIFICANT_LANGUAGE: &str = "No significant languages detected.";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// One stacked horizontal bar spanning [0, 1] with a legend on its right.
///
/// No axes or ticks are drawn. An empty slice draws an empty frame.
pub fn svg(segments: &[ChartSegment]) -> String {
    let legend_height = segments.len() as f64 * LEGEND_ROW_HEIGHT;
    let height = BAR_HEIGHT.max(legend_height);
    let width = LEGEND_X + LEGEND_WIDTH;

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" role="img">"#
    );
    let _ = write!(
        out,
        r##"<g class="bar"><line x1="0" y1="0" x2="0" y2="{BAR_HEIGHT}" stroke="#ccc"/>"##
    );
    for segment in segments {
        let _ = write!(
            out,
            r#"<rect x="{:.3}" y="0" width="{:.3}" height="{BAR_HEIGHT}" fill="{}"><title>{}</title></rect>"#,
            segment.start_fraction * BAR_WIDTH,
            segment.width_fraction * BAR_WIDTH,
            segment.color.to_hex(),
            escape_html(&segment.label),
        );
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="legend">"#);
    for (i, segment) in segments.iter().enumerate() {
        let y = i as f64 * LEGEND_ROW_HEIGHT;
        let _ = write!(
            out,
            r#"<rect x="{LEGEND_X}" y="{:.1}" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
            y + 3.0,
            segment.color.to_hex(),
            LEGEND_X + LEGEND_SWATCH + 6.0,
            y + 12.0,
            escape_html(&segment.label),
        );
    }
    out.push_str("</g></svg>");
    out
}

/// What the result area of the page shows.
#[derive(Debug, Clone, Copy)]
pub enum PageResult<'a> {
    /// Fresh page, nothing uploaded yet
    None,
    Chart(&'a [ChartSegment]),
    NoSignificantLanguage,
    Error(&'a str),
}

/// The single application page.
///
/// `reliable_only` sets the initial state of the reliability checkbox.
pub fn page(result: PageResult<'_>, reliable_only: bool) -> String {
    let checked = if reliable_only { " checked" } else { "" };

    let body = match result {
        PageResult::None => String::new(),
        PageResult::Chart(segments) => {
            format!(
                r#"<section class="result"><h2>Languages</h2>{}</section>"#,
                svg(segments)
            )
        }
        PageResult::NoSignificantLanguage => format!(
            r#"<section class="result"><p class="warning">{}</p></section>"#,
            escape_html(NO_SIGNIFICANT_LANGUAGE)
        ),
        PageResult::Error(message) => format!(
            r#"<section class="result"><p class="error">{}</p></section>"#,
            escape_html(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 760px; margin: 2rem auto; }}
.warning {{ color: #8a6d3b; background: #fcf8e3; padding: .75rem; }}
.error {{ color: #a94442; background: #f2dede; padding: .75rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>Upload a <code>.txt</code> file to detect languages.</p>
<form action="/detect" method="post" enctype="multipart/form-data">
<label><input type="checkbox" name="reliable_only" value="on"{checked}> Show only reliable detections</label><br>
<input type="file" name="file" accept=".txt" required>
<button type="submit">Detect</button>
</form>
{body}
</body>
</html>
"#,
        title = escape_html(PAGE_TITLE),
    )
}

/// Terminal rendition: one proportional bar row per segment.
pub fn text_chart(segments: &[ChartSegment]) -> String {
    let label_width = segments
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for segment in segments {
        let cells = (segment.width_fraction * TEXT_BAR_CELLS as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<width$}  {}",
            segment.label,
            "█".repeat(cells.max(1)),
            width = label_width
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Color, PAIRED};

    fn segment(label: &str, start: f64, width: f64, color: Color) -> ChartSegment {
        ChartSegment {
            language_code: "en".to_string(),
            label: label.to_string(),
            start_fraction: start,
            width_fraction: width,
            color,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html(r#""quoted" 'single'"#), "&quot;quoted&quot; &#39;single&#39;");
        assert_eq!(escape_html("Français"), "Français");
    }

    #[test]
    fn test_svg_empty_has_no_segments_or_legend() {
        let out = svg(&[]);
        assert!(out.starts_with("<svg"));
        assert!(!out.contains("<rect"));
        assert!(!out.contains("<text"));
    }

    #[test]
    fn test_svg_scales_segments_to_bar_width() {
        let segments = vec![
            segment("English 75.0%", 0.0, 0.75, PAIRED[0]),
            segment("French 25.0%", 0.75, 0.25, PAIRED[11]),
        ];
        let out = svg(&segments);

        assert!(out.contains(r#"x="0.000" y="0" width="360.000""#));
        assert!(out.contains(r#"x="360.000" y="0" width="120.000""#));
        assert!(out.contains("#a6cee3"));
        assert!(out.contains("#b15928"));
        assert!(out.contains(">English 75.0%</text>"));
        assert!(out.contains(">French 25.0%</text>"));
    }

    #[test]
    fn test_svg_escapes_labels() {
        let out = svg(&[segment("<b>", 0.0, 1.0, PAIRED[0])]);
        assert!(out.contains("&lt;b&gt;"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_page_without_result() {
        let html = page(PageResult::None, true);
        assert!(html.contains("<h1>Language Detection</h1>"));
        assert!(html.contains(r#"name="reliable_only" value="on" checked"#));
        assert!(html.contains(r#"accept=".txt""#));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn test_page_unchecked_reliability() {
        let html = page(PageResult::None, false);
        assert!(!html.contains(" checked"));
    }

    #[test]
    fn test_page_with_chart() {
        let segments = vec![segment("English 80.0%", 0.0, 0.8, PAIRED[0])];
        let html = page(PageResult::Chart(&segments), true);
        assert!(html.contains("<h2>Languages</h2>"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_page_with_warning() {
        let html = page(PageResult::NoSignificantLanguage, true);
        assert!(html.contains("No significant languages detected."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_page_with_error_is_escaped() {
        let html = page(PageResult::Error("bad <file>"), true);
        assert!(html.contains(r#"<p class="error">bad &lt;file&gt;</p>"#));
    }

    #[test]
    fn test_text_chart() {
        let segments = vec![
            segment("English 80.0%", 0.0, 0.8, PAIRED[0]),
            segment("French 20.0%", 0.8, 0.2, PAIRED[11]),
        ];
        let out = text_chart(&segments);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("English 80.0%  "));
        assert_eq!(lines[0].matches('█').count(), 40);
        assert_eq!(lines[1].matches('█').count(), 10);
    }

    #[test]
    fn test_text_chart_empty() {
        assert!(text_chart(&[]).is_empty());
    }
}
