//! Triangle layout on a canvas.
//!
//! The right angle sits in the lower left corner. Leg `a` runs to the right and
//! leg `b` runs up, both scaled uniformly so the triangle fills the canvas minus
//! a fixed padding. Labels for the legs sit outside their edges. The hypotenuse
//! label is pushed along the outward normal of the hypotenuse.

use crate::domain::model::{Canvas, TriangleSpec};
use crate::utils::format::format_g;

pub const PADDING: f64 = 50.0;
pub const MARKER_SIZE: f64 = 22.0;
const LEG_A_LABEL_GAP: f64 = 18.0;
const LEG_B_LABEL_GAP: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Point,
    /// Counter-clockwise rotation in degrees.
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriangleLayout {
    pub spec: TriangleSpec,
    pub canvas: Canvas,
    /// Pixels per unit length.
    pub scale: f64,
    pub right_angle: Point,
    /// Far end of leg `a`.
    pub a_end: Point,
    /// Far end of leg `b`.
    pub b_end: Point,
    /// Open polyline drawing the right-angle square.
    pub marker: [Point; 4],
    pub labels: [Label; 3],
}

impl TriangleLayout {
    pub fn compute(spec: TriangleSpec, canvas: Canvas) -> Self {
        let width = f64::from(canvas.width.max(1));
        let height = f64::from(canvas.height.max(1));

        let max_a = (width - 2.0 * PADDING).max(1.0);
        let max_b = (height - 2.0 * PADDING).max(1.0);
        let scale = (max_a / spec.a()).min(max_b / spec.b());

        let right_angle = Point::new(PADDING, height - PADDING);
        let a_end = Point::new(right_angle.x + spec.a() * scale, right_angle.y);
        let b_end = Point::new(right_angle.x, right_angle.y - spec.b() * scale);

        let marker = [
            right_angle,
            Point::new(right_angle.x + MARKER_SIZE, right_angle.y),
            Point::new(right_angle.x + MARKER_SIZE, right_angle.y - MARKER_SIZE),
            Point::new(right_angle.x, right_angle.y - MARKER_SIZE),
        ];

        let a_mid = right_angle.midpoint(a_end);
        let b_mid = right_angle.midpoint(b_end);
        let labels = [
            Label {
                text: format!("a = {}", format_g(spec.a())),
                position: Point::new(a_mid.x, right_angle.y + LEG_A_LABEL_GAP),
                rotation: 0.0,
            },
            Label {
                text: format!("b = {}", format_g(spec.b())),
                position: Point::new(right_angle.x - LEG_B_LABEL_GAP, b_mid.y),
                rotation: 90.0,
            },
            Label {
                text: format!("c = {}", format_g(spec.hypotenuse())),
                position: hypotenuse_label_position(right_angle, a_end, b_end, width, height),
                rotation: 0.0,
            },
        ];

        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            scale,
            "triangle layout computed"
        );

        Self {
            spec,
            canvas,
            scale,
            right_angle,
            a_end,
            b_end,
            marker,
            labels,
        }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.right_angle, self.a_end, self.b_end]
    }

    /// One-line summary of the side lengths, e.g. `a = 3, b = 4, c = 5`.
    pub fn describe(&self) -> String {
        self.labels
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn hypotenuse_label_position(
    right_angle: Point,
    a_end: Point,
    b_end: Point,
    width: f64,
    height: f64,
) -> Point {
    let dx = b_end.x - a_end.x;
    let dy = b_end.y - a_end.y;
    let length = dx.hypot(dy).max(1.0);
    let mut nx = -dy / length;
    let mut ny = dx / length;

    let mid = a_end.midpoint(b_end);
    let centroid = Point::new(
        (right_angle.x + a_end.x + b_end.x) / 3.0,
        (right_angle.y + a_end.y + b_end.y) / 3.0,
    );
    if (mid.x - centroid.x) * nx + (mid.y - centroid.y) * ny < 0.0 {
        nx = -nx;
        ny = -ny;
    }

    let offset = (0.08 * width.min(height)).clamp(18.0, 32.0);
    let right_shift = (0.04 * width).clamp(10.0, 26.0);
    Point::new(mid.x + nx * offset + right_shift, mid.y + ny * offset)
}
