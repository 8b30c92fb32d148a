use std::f32::consts::FRAC_PI_2;

use eframe::egui::epaint::TextShape;
use eframe::egui::{self, Align2, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};

use crate::color;
use crate::plot::mapper::{MappedCurve, PlotDomain};
use crate::plot::{
    no_data_notice, x_tick_label, y_tick_label, y_title_centre, X_TICKS, X_TITLE, Y_TICKS,
    Y_TITLE,
};
use crate::state::{AppState, LoadState};

// ---------------------------------------------------------------------------
// Boundary-layer profile (central panel)
// ---------------------------------------------------------------------------

/// Render the profile canvas, or the load-state notice in its place.
pub fn profile_plot(ui: &mut Ui, state: &AppState) {
    ui.heading("Boundary Layer Profile");
    ui.add_space(8.0);

    let view = match &state.load {
        LoadState::Loading(_) => {
            centered_notice(ui, "Loading data…", color::COMMENT.color32());
            return;
        }
        LoadState::Failed(msg) => {
            centered_notice(ui, &format!("Error loading data: {msg}"), color::RED.color32());
            return;
        }
        LoadState::Empty => {
            centered_notice(ui, "The dataset contains no data rows.", color::RED.color32());
            return;
        }
        LoadState::Ready { view, .. } => view,
    };

    canvas(ui, &state.domain, &view.mapped);
}

fn centered_notice(ui: &mut Ui, text: &str, colour: egui::Color32) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(text).color(colour).size(16.0));
    });
}

/// Maps the fixed `width × height` view box into the allocated rect,
/// keeping its aspect ratio and centring it.
struct ViewBox {
    origin: Pos2,
    scale: f32,
}

impl ViewBox {
    fn fit(rect: Rect, domain: &PlotDomain) -> Self {
        let scale = (rect.width() / domain.width as f32).min(rect.height() / domain.height as f32);
        let used = Vec2::new(domain.width as f32, domain.height as f32) * scale;
        Self {
            origin: rect.center() - used / 2.0,
            scale,
        }
    }

    fn pos(&self, x: f64, y: f64) -> Pos2 {
        self.origin + Vec2::new(x as f32, y as f32) * self.scale
    }

    fn font(&self, size: f32) -> FontId {
        FontId::proportional((size * self.scale).max(8.0))
    }
}

/// Top-left corner for a galley of `size` rotated by -90° (reading
/// bottom-to-top) so that it is centred on `centre`.
fn upright_text_anchor(centre: Pos2, size: Vec2) -> Pos2 {
    centre + Vec2::new(-size.y / 2.0, size.x / 2.0)
}

fn canvas(ui: &mut Ui, domain: &PlotDomain, mapped: &MappedCurve) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let vb = ViewBox::fit(response.rect, domain);
    let fg = color::FOREGROUND.color32();
    let grid = Stroke::new(1.0, color::COMMENT.color32());

    painter.rect_filled(
        Rect::from_min_max(vb.pos(0.0, 0.0), vb.pos(domain.width, domain.bottom())),
        0.0,
        color::SELECTION.color32(),
    );

    for &x in &X_TICKS {
        let px = domain.pixel_x(x);
        painter.line_segment([vb.pos(px, domain.top()), vb.pos(px, domain.bottom())], grid);
        painter.text(
            vb.pos(px, domain.bottom() + 12.0),
            Align2::CENTER_TOP,
            x_tick_label(x),
            vb.font(12.0),
            fg,
        );
    }

    for &y in &Y_TICKS {
        let py = domain.pixel_y(y);
        painter.line_segment([vb.pos(domain.left(), py), vb.pos(domain.right(), py)], grid);
        painter.text(
            vb.pos(domain.left() - 5.0, py),
            Align2::RIGHT_CENTER,
            y_tick_label(y),
            vb.font(12.0),
            fg,
        );
    }

    painter.text(
        vb.pos(domain.width / 2.0, domain.height - 10.0),
        Align2::CENTER_BOTTOM,
        X_TITLE,
        vb.font(14.0),
        fg,
    );
    let galley = painter.layout_no_wrap(Y_TITLE.to_owned(), vb.font(14.0), fg);
    let (cx, cy) = y_title_centre(domain);
    let anchor = upright_text_anchor(vb.pos(cx, cy), galley.size());
    painter.add(TextShape::new(anchor, galley, fg).with_angle(-FRAC_PI_2));

    match mapped {
        MappedCurve::Path(_) => {
            let stroke = Stroke::new(2.0, color::PINK.color32());
            for subpath in mapped.subpaths() {
                let points: Vec<Pos2> = subpath.iter().map(|&[x, y]| vb.pos(x, y)).collect();
                if points.len() == 1 {
                    painter.circle_filled(points[0], 1.5, stroke.color);
                } else {
                    painter.add(egui::Shape::line(points, stroke));
                }
            }
        }
        MappedCurve::NoRenderableData => {
            painter.text(
                vb.pos(domain.width / 2.0, domain.height / 2.0),
                Align2::CENTER_CENTER,
                no_data_notice(domain),
                vb.font(18.0),
                color::RED.color32(),
            );
        }
    }
}
