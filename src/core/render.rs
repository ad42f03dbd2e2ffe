use crate::core::geometry::{Label, Point, TriangleLayout};
use std::fmt::Write;

const BACKGROUND: &str = "#f8f8f8";
const FILL: &str = "#e5e7eb";
const OUTLINE: &str = "#1f2937";
const INK: &str = "#111827";
const FONT_FAMILY: &str = "Segoe UI, sans-serif";

/// Renders the layout as a standalone SVG document.
pub fn render_svg(layout: &TriangleLayout) -> String {
    let mut svg = String::new();
    let (w, h) = (layout.canvas.width, layout.canvas.height);
    let [ra, ae, be] = layout.vertices();

    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"  <polygon points="{}" fill="{FILL}" stroke="{OUTLINE}"/>"#,
        points(&[ra, ae, be])
    );
    for (from, to) in [(ra, ae), (ra, be), (ae, be)] {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{INK}" stroke-width="3"/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y)
        );
    }
    let _ = writeln!(
        svg,
        r#"  <polyline points="{}" fill="none" stroke="{INK}" stroke-width="2"/>"#,
        points(&layout.marker)
    );
    for label in &layout.labels {
        svg.push_str(&text(label));
    }
    svg.push_str("</svg>\n");
    svg
}

fn text(label: &Label) -> String {
    let (x, y) = (num(label.position.x), num(label.position.y));
    let transform = if label.rotation != 0.0 {
        // SVG rotates clockwise.
        format!(r#" transform="rotate({} {} {})""#, num(-label.rotation), x, y)
    } else {
        String::new()
    };
    format!(
        "  <text x=\"{x}\" y=\"{y}\" fill=\"{INK}\" font-family=\"{FONT_FAMILY}\" font-size=\"11pt\" \
         font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"central\"{transform}>{}</text>\n",
        escape(&label.text)
    )
}

fn points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two decimals, without trailing zeros.
fn num(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
