use std::fmt::Write as _;

use super::mapper::{MappedCurve, PlotDomain};
use super::{
    no_data_notice, x_tick_label, y_tick_label, y_title_centre, X_TICKS, X_TITLE, Y_TICKS,
    Y_TITLE,
};
use crate::color;

/// Render the profile figure as a standalone SVG document.
pub fn render_svg(domain: &PlotDomain, mapped: &MappedCurve) -> String {
    let (w, h) = (domain.width, domain.height);
    let (left, right) = (domain.left(), domain.right());
    let (top, bottom) = (domain.top(), domain.bottom());
    let fg = color::FOREGROUND.hex();
    let grid = color::COMMENT.hex();

    let mut body = String::new();
    let _ = writeln!(
        body,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        color::PANEL.hex()
    );
    let _ = writeln!(
        body,
        r#"  <rect x="0" y="0" width="{w}" height="{bottom}" fill="{}"/>"#,
        color::SELECTION.hex()
    );

    for &x in &X_TICKS {
        let px = domain.pixel_x(x);
        let _ = writeln!(
            body,
            r#"  <line x1="{px}" y1="{top}" x2="{px}" y2="{bottom}" stroke="{grid}" stroke-width="1"/>"#
        );
        let _ = writeln!(
            body,
            r#"  <text x="{px}" y="{}" fill="{fg}" font-size="12" text-anchor="middle">{}</text>"#,
            bottom + 20.0,
            x_tick_label(x)
        );
    }

    for &y in &Y_TICKS {
        let py = domain.pixel_y(y);
        let _ = writeln!(
            body,
            r#"  <line x1="{left}" y1="{py}" x2="{right}" y2="{py}" stroke="{grid}" stroke-width="1"/>"#
        );
        let _ = writeln!(
            body,
            r#"  <text x="{}" y="{py}" fill="{fg}" font-size="12" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            left - 5.0,
            y_tick_label(y)
        );
    }

    match mapped.svg_path_data() {
        Some(d) => {
            let _ = writeln!(
                body,
                r#"  <path d="{d}" fill="none" stroke="{}" stroke-width="2"/>"#,
                color::PINK.hex()
            );
        }
        None => {
            let _ = writeln!(
                body,
                r#"  <text x="{}" y="{}" fill="{}" font-size="18" text-anchor="middle">{}</text>"#,
                w / 2.0,
                h / 2.0,
                color::RED.hex(),
                escape(&no_data_notice(domain))
            );
        }
    }

    let _ = writeln!(
        body,
        r#"  <text x="{}" y="{}" fill="{fg}" font-size="14" text-anchor="middle">{X_TITLE}</text>"#,
        w / 2.0,
        h - 10.0
    );
    let (tx, ty) = y_title_centre(domain);
    let _ = writeln!(
        body,
        r#"  <text x="{tx}" y="{ty}" fill="{fg}" font-size="14" text-anchor="middle" transform="rotate(-90, {tx}, {ty})">{Y_TITLE}</text>"#
    );

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::mapper::PathCommand;

    #[test]
    fn path_is_embedded() {
        let mapped = MappedCurve::Path(vec![
            PathCommand::MoveTo { x: 50.0, y: 550.0 },
            PathCommand::LineTo { x: 750.0, y: 300.0 },
        ]);
        let svg = render_svg(&PlotDomain::default(), &mapped);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.contains(r#"<path d="M 50 550 L 750 300""#));
        assert!(!svg.contains("No data"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn grid_has_a_line_per_tick() {
        let svg = render_svg(&PlotDomain::default(), &MappedCurve::NoRenderableData);
        assert_eq!(svg.matches("<line ").count(), X_TICKS.len() + Y_TICKS.len());
        assert!(svg.contains(">0.40</text>"));
        assert!(svg.contains(">0.5</text>"));
    }

    #[test]
    fn notice_replaces_missing_path() {
        let svg = render_svg(&PlotDomain::default(), &MappedCurve::NoRenderableData);
        assert!(!svg.contains("<path"));
        assert!(svg.contains("No data for the selected parameters at x ≥ 0.5"));
    }

    #[test]
    fn y_title_is_rotated_at_left_edge() {
        let svg = render_svg(&PlotDomain::default(), &MappedCurve::NoRenderableData);
        assert!(svg.contains(r#"transform="rotate(-90, 20, 300)">δ (m)</text>"#));
    }
}
