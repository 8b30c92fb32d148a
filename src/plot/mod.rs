/// Plot geometry shared by the on-screen canvas and the SVG export.
pub mod mapper;
pub mod svg;

use mapper::PlotDomain;

/// Streamwise positions with a vertical grid line and label [m].
pub const X_TICKS: [f64; 6] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0];

/// Thickness values with a horizontal grid line and label [m].
pub const Y_TICKS: [f64; 9] = [0.0, 0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35, 0.40];

pub const X_TITLE: &str = "x (m)";
pub const Y_TITLE: &str = "δ (m)";

pub fn x_tick_label(x: f64) -> String {
    format!("{x}")
}

pub fn y_tick_label(y: f64) -> String {
    format!("{y:.2}")
}

/// Centre of the rotated y-axis title, left of the tick labels.
pub fn y_title_centre(domain: &PlotDomain) -> (f64, f64) {
    (domain.left() / 2.5, domain.height / 2.0)
}

/// Text shown in place of the curve when nothing can be drawn.
pub fn no_data_notice(domain: &PlotDomain) -> String {
    format!("No data for the selected parameters at x ≥ {}", domain.x_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_title_sits_in_left_margin() {
        let d = PlotDomain::default();
        assert_eq!(y_title_centre(&d), (20.0, 300.0));
    }
}
