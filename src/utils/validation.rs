use crate::domain::model::{SearchBound, TriangleSpec};
use crate::utils::error::{InputField, PythagorasError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses one leg. Both `.` and `,` are accepted as decimal separator.
pub fn parse_leg(field: InputField, text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| PythagorasError::invalid_number(field, text))?;

    if !value.is_finite() {
        return Err(PythagorasError::invalid_number(field, text));
    }
    if value <= 0.0 {
        return Err(PythagorasError::out_of_range(field, value));
    }
    Ok(value)
}

pub fn parse_triangle(a_text: &str, b_text: &str) -> Result<TriangleSpec> {
    let a = parse_leg(InputField::LegA, a_text)?;
    let b = parse_leg(InputField::LegB, b_text)?;
    TriangleSpec::new(a, b).ok_or_else(|| PythagorasError::out_of_range(InputField::LegA, a))
}

/// Parses the sum bound as a whole number greater than zero.
pub fn parse_max_sum(text: &str) -> Result<SearchBound> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| PythagorasError::invalid_number(InputField::MaxSum, text))?;

    u64::try_from(value)
        .ok()
        .and_then(SearchBound::new)
        .ok_or_else(|| PythagorasError::out_of_range(InputField::MaxSum, value))
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PythagorasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PythagorasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PythagorasError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
