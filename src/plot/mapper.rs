use std::fmt::Write as _;

use crate::data::model::Record;

// ---------------------------------------------------------------------------
// PlotDomain – physical window and canvas geometry
// ---------------------------------------------------------------------------

/// Physical axis ranges and the pixel canvas they are drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotDomain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
    /// Space reserved on every side for tick labels.
    pub margin: f64,
}

impl Default for PlotDomain {
    /// x ∈ [0.5, 5] m, δ ∈ [0, 0.40] m on an 800×600 canvas.
    fn default() -> Self {
        Self {
            x_min: 0.5,
            x_max: 5.0,
            y_min: 0.0,
            y_max: 0.40,
            width: 800.0,
            height: 600.0,
            margin: 50.0,
        }
    }
}

impl PlotDomain {
    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin
    }

    pub fn top(&self) -> f64 {
        self.margin
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin
    }

    pub fn plot_width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn plot_height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// Horizontal pixel coordinate of streamwise position `x`.
    pub fn pixel_x(&self, x: f64) -> f64 {
        self.left() + (x - self.x_min) / (self.x_max - self.x_min) * self.plot_width()
    }

    /// Vertical pixel coordinate of thickness `y`; larger values sit higher.
    pub fn pixel_y(&self, y: f64) -> f64 {
        self.bottom() - (y - self.y_min) / (self.y_max - self.y_min) * self.plot_height()
    }
}

// ---------------------------------------------------------------------------
// Path description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the point.
    MoveTo { x: f64, y: f64 },
    /// Connect the previous point to this one.
    LineTo { x: f64, y: f64 },
}

/// Result of mapping a curve onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum MappedCurve {
    Path(Vec<PathCommand>),
    /// Nothing of the curve lies inside the visible domain.
    NoRenderableData,
}

impl MappedCurve {
    /// Split into polylines, one per `MoveTo`.
    pub fn subpaths(&self) -> Vec<Vec<[f64; 2]>> {
        let MappedCurve::Path(commands) = self else {
            return Vec::new();
        };
        let mut out: Vec<Vec<[f64; 2]>> = Vec::new();
        for cmd in commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => out.push(vec![[x, y]]),
                PathCommand::LineTo { x, y } => match out.last_mut() {
                    Some(current) => current.push([x, y]),
                    None => out.push(vec![[x, y]]),
                },
            }
        }
        out
    }

    /// SVG path data (`"M x y L x y ..."`), `None` when nothing is renderable.
    pub fn svg_path_data(&self) -> Option<String> {
        let MappedCurve::Path(commands) = self else {
            return None;
        };
        let mut d = String::new();
        for cmd in commands {
            if !d.is_empty() {
                d.push(' ');
            }
            let _ = match *cmd {
                PathCommand::MoveTo { x, y } => write!(d, "M {x} {y}"),
                PathCommand::LineTo { x, y } => write!(d, "L {x} {y}"),
            };
        }
        Some(d)
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map an x-sorted curve into canvas coordinates.
///
/// Points left of `x_min` are dropped from the path, as are points with a
/// non-finite `x` or `delta99`. The first kept point, and any kept point
/// whose source predecessor was dropped, begins a new subpath so no line is
/// drawn across the gap.
pub fn map_curve(curve: &[Record], domain: &PlotDomain) -> MappedCurve {
    let mut commands = Vec::with_capacity(curve.len());
    let mut previous_dropped = true;

    for record in curve {
        let visible =
            record.x.is_finite() && record.delta99.is_finite() && record.x >= domain.x_min;
        if !visible {
            previous_dropped = true;
            continue;
        }

        let x = domain.pixel_x(record.x);
        let y = domain.pixel_y(record.delta99);
        commands.push(if previous_dropped {
            PathCommand::MoveTo { x, y }
        } else {
            PathCommand::LineTo { x, y }
        });
        previous_dropped = false;
    }

    if commands.is_empty() {
        MappedCurve::NoRenderableData
    } else {
        MappedCurve::Path(commands)
    }
}
