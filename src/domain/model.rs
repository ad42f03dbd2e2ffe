use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Pythagorean triplet `(x, y, z)` with `x < y < z` and `x² + y² = z²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Triplet {
    pub x: u64,
    pub y: u64,
    pub z: u64,
}

impl Triplet {
    /// Returns `None` unless the values are strictly ordered, positive and
    /// satisfy the Pythagorean relation.
    pub fn new(x: u64, y: u64, z: u64) -> Option<Self> {
        if x == 0 || x >= y || y >= z {
            return None;
        }
        let lhs = x.checked_mul(x)?.checked_add(y.checked_mul(y)?)?;
        (lhs == z.checked_mul(z)?).then_some(Self { x, y, z })
    }

    pub fn sum(&self) -> u64 {
        self.x + self.y + self.z
    }

    pub fn product(&self) -> u64 {
        self.x * self.y * self.z
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Inclusive upper limit on `x + y + z`. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchBound(u64);

impl SearchBound {
    pub fn new(max_sum: u64) -> Option<Self> {
        (max_sum > 0).then_some(Self(max_sum))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// The two legs of a right triangle. Both are finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleSpec {
    a: f64,
    b: f64,
}

impl TriangleSpec {
    pub fn new(a: f64, b: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(a) && valid(b)).then_some(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn hypotenuse(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// One line of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripletRow {
    pub index: usize,
    pub x: u64,
    pub y: u64,
    pub z: u64,
    pub sum: u64,
    pub product: u64,
}

impl TripletRow {
    /// `index` is 1-based.
    pub fn new(index: usize, triplet: &Triplet) -> Self {
        Self {
            index,
            x: triplet.x,
            y: triplet.y,
            z: triplet.z,
            sum: triplet.sum(),
            product: triplet.product(),
        }
    }
}

/// Drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const DEFAULT_WIDTH: u32 = 520;
    pub const DEFAULT_HEIGHT: u32 = 380;

    /// Zero dimensions are raised to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Raw text of the three input fields, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    pub a: String,
    pub b: String,
    pub max_sum: String,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            a: "3".to_string(),
            b: "4".to_string(),
            max_sum: "100".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Text, Self::Csv, Self::Tsv, Self::Json];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unsupported format '{}'. Valid formats: {}",
                    s,
                    Self::ALL.map(|f| f.name()).join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triplet_checked_constructor() {
        assert!(Triplet::new(3, 4, 5).is_some());
        assert!(Triplet::new(4, 3, 5).is_none());
        assert!(Triplet::new(3, 4, 6).is_none());
        assert!(Triplet::new(0, 1, 1).is_none());
    }

    #[test]
    fn test_triplet_derived_values() {
        let t = Triplet::new(5, 12, 13).unwrap();
        assert_eq!(t.sum(), 30);
        assert_eq!(t.product(), 780);
        assert_eq!(t.to_string(), "(5, 12, 13)");

        let row = TripletRow::new(2, &t);
        assert_eq!(row.index, 2);
        assert_eq!(row.sum, 30);
        assert_eq!(row.product, 780);
    }

    #[test]
    fn test_bound_and_spec_reject_non_positive() {
        assert!(SearchBound::new(0).is_none());
        assert_eq!(SearchBound::new(12).unwrap().get(), 12);

        assert!(TriangleSpec::new(0.0, 4.0).is_none());
        assert!(TriangleSpec::new(3.0, f64::NAN).is_none());
        assert!(TriangleSpec::new(3.0, f64::INFINITY).is_none());
        let spec = TriangleSpec::new(3.0, 4.0).unwrap();
        assert_eq!(spec.hypotenuse(), 5.0);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.extension(), "txt");
    }

    #[test]
    fn test_canvas_clamps_zero() {
        let canvas = Canvas::new(0, 0);
        assert_eq!((canvas.width, canvas.height), (1, 1));
        assert_eq!(Canvas::default(), Canvas::new(520, 380));
    }
}
