//! Terminal and JSON output formatting for the CLI.

use std::collections::BTreeMap;
use std::io::{self, Write};

use qualpal_core::{PaletteAnalysis, Rgb};
use serde_json::json;

const RESET: &str = "\x1b[0m";

/// 8-bit channels of a color, clamped like hex formatting.
fn channels(color: &Rgb) -> (u8, u8, u8) {
    let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (q(color.r()), q(color.g()), q(color.b()))
}

/// A hex string rendered on its own color as background, with black or
/// white foreground chosen for contrast by luminance.
pub fn colorized_hex(color: &Rgb) -> String {
    let (r, g, b) = channels(color);
    let lum = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
    let fg = if lum > 128.0 { 0 } else { 255 };
    format!(
        "\x1b[48;2;{r};{g};{b}m\x1b[38;2;{fg};{fg};{fg}m{}{RESET}",
        color.hex()
    )
}

/// A two-cell background swatch in the color, followed by a reset.
fn swatch(color: &Rgb) -> String {
    let (r, g, b) = channels(color);
    format!("\x1b[48;2;{r};{g};{b}m  {RESET}")
}

/// Write a palette as hex values joined by `delim`. A trailing newline is
/// added when the delimiter itself is not a newline.
pub fn write_palette<W: Write>(
    out: &mut W,
    colors: &[Rgb],
    delim: &str,
    colorize: bool,
) -> io::Result<()> {
    for (i, color) in colors.iter().enumerate() {
        if i > 0 {
            write!(out, "{delim}")?;
        }
        if colorize {
            write!(out, "{}", colorized_hex(color))?;
        } else {
            write!(out, "{}", color.hex())?;
        }
    }
    if delim != "\n" {
        writeln!(out)?;
    } else if !colors.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

/// Write one viewing condition's analysis: a color listing with nearest
/// neighbor distances, then the full difference matrix.
pub fn write_analysis<W: Write>(
    out: &mut W,
    label: &str,
    colors: &[Rgb],
    analysis: &PaletteAnalysis,
    colorize: bool,
) -> io::Result<()> {
    writeln!(out, "Condition: {label}")?;
    writeln!(out, "  {:>3} {:>8} {:>9}", "Idx", "Hex", "MinDist")?;
    for (i, color) in colors.iter().enumerate() {
        if colorize {
            write!(out, "{} ", swatch(color))?;
        } else {
            write!(out, "   ")?;
        }
        writeln!(
            out,
            "{i:>3}  {} {:>8.2}",
            color.hex(),
            analysis.min_distances[i]
        )?;
    }
    if let Some(bg_min) = analysis.bg_min_distance {
        writeln!(out, "  Background min distance: {bg_min:.2}")?;
    }
    writeln!(out)?;

    let m = &analysis.difference_matrix;
    writeln!(out, "Difference matrix:")?;
    write!(out, "    ")?;
    for j in 0..m.nrow() {
        write!(out, "{j:>8}")?;
    }
    writeln!(out)?;
    for i in 0..m.nrow() {
        write!(out, "{i:>3} ")?;
        for j in 0..m.nrow() {
            write!(out, "{:>8.2}", m.get(i, j))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Build the JSON form of a full analysis report.
pub fn analysis_json(
    colors: &[Rgb],
    report: &BTreeMap<&'static str, PaletteAnalysis>,
) -> serde_json::Value {
    let conditions: BTreeMap<&str, serde_json::Value> = report
        .iter()
        .map(|(label, analysis)| {
            let m = &analysis.difference_matrix;
            let rows: Vec<Vec<f64>> = (0..m.nrow()).map(|i| m.row(i).to_vec()).collect();
            (
                *label,
                json!({
                    "difference_matrix": rows,
                    "min_distances": analysis.min_distances,
                    "bg_min_distance": analysis.bg_min_distance,
                }),
            )
        })
        .collect();
    json!({
        "colors": colors.iter().map(|c| c.hex()).collect::<Vec<_>>(),
        "conditions": conditions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qualpal_core::{analyze_palette, CvdConfig, Metric};

    fn rgb(hex: &str) -> Rgb {
        hex.parse().unwrap()
    }

    #[test]
    fn plain_palette_output_joins_with_delimiter() {
        let colors = vec![rgb("#ff0000"), rgb("#00ff00")];

        let mut buf = Vec::new();
        write_palette(&mut buf, &colors, "\n", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "#ff0000\n#00ff00\n");

        let mut buf = Vec::new();
        write_palette(&mut buf, &colors, ",", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "#ff0000,#00ff00\n");

        let mut buf = Vec::new();
        write_palette(&mut buf, &[], "\n", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "");
    }

    #[test]
    fn colorized_hex_picks_contrasting_foreground() {
        let bright = colorized_hex(&rgb("#ffffff"));
        assert!(bright.contains("\x1b[48;2;255;255;255m"));
        assert!(bright.contains("\x1b[38;2;0;0;0m"));
        assert!(bright.contains("#ffffff"));
        assert!(bright.ends_with(RESET));

        let dark = colorized_hex(&rgb("#000080"));
        assert!(dark.contains("\x1b[38;2;255;255;255m"));
    }

    #[test]
    fn analysis_text_lists_every_color_and_matrix_row() {
        let colors = vec![rgb("#ff0000"), rgb("#00ff00"), rgb("#0000ff")];
        let report = analyze_palette(
            &colors,
            Metric::default(),
            &CvdConfig::default(),
            None,
            1.0,
        )
        .unwrap();

        let mut buf = Vec::new();
        write_analysis(&mut buf, "normal", &colors, &report["normal"], false).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Condition: normal"));
        for c in &colors {
            assert!(text.contains(&c.hex()));
        }
        assert_eq!(text.matches("    0.00").count(), 3);
        assert!(!text.contains("Background min distance"));
    }

    #[test]
    fn analysis_json_shape() {
        let colors = vec![rgb("#ff0000"), rgb("#0000ff")];
        let report = analyze_palette(
            &colors,
            Metric::default(),
            &CvdConfig::default(),
            Some(rgb("#ffffff")),
            1.0,
        )
        .unwrap();

        let value = analysis_json(&colors, &report);
        assert_eq!(value["colors"][0], "#ff0000");
        // Empty CVD config analyzes all three deficiencies plus normal.
        let conditions = value["conditions"].as_object().unwrap();
        assert_eq!(
            conditions.keys().collect::<Vec<_>>(),
            vec!["deutan", "normal", "protan", "tritan"]
        );
        let normal = &conditions["normal"];
        assert_eq!(normal["difference_matrix"].as_array().unwrap().len(), 2);
        assert_eq!(normal["min_distances"].as_array().unwrap().len(), 2);
        assert!(normal["bg_min_distance"].as_f64().unwrap() > 0.0);
    }
}
