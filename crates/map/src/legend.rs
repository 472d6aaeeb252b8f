//! Legend markup generated from the palette table.

use quakemap_colormap::{legend, Palette};
use quakemap_layers::escape_html;

/// Legend `<div>` for the bottom-right map control: one swatch per band.
pub fn legend_html(palette: Palette) -> String {
    let mut html = String::from("<div class=\"info legend\">");
    for entry in legend(palette) {
        html.push_str(&format!(
            "<div class=\"{}\"><i style=\"background:{}\"></i> {}</div>",
            entry.class,
            entry.color.to_hex(),
            escape_html(entry.label)
        ));
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_band() {
        let html = legend_html(Palette::Reference);
        assert_eq!(html.matches("<i style=").count(), 8);
        assert!(html.contains("background:#64C8FA"));
        assert!(html.contains("> 7+</div>"));
        assert!(html.contains("&lt; 1"));
    }

    #[test]
    fn distinct_palette_swatch() {
        assert!(legend_html(Palette::Distinct).contains("background:#4B0082"));
        assert!(!legend_html(Palette::Reference).contains("#4B0082"));
    }
}
