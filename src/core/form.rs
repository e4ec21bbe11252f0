//! # Form Input
//!
//! Raw text held by the Add Car form and the rental modals, plus the
//! coercion that turns it into request payloads.
//!
//! Coercion follows JavaScript `Number()` semantics since the backend was
//! written against a browser client: surrounding whitespace is ignored, a
//! blank field is `0`, and anything unparseable is "not a number". Invalid
//! numbers are passed through as `null` for the backend to reject.

use crate::api::NewCar;

/// Fields of the Add Car form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarField {
    Make,
    Model,
    Year,
    PlateNumber,
    DailyRate,
}

impl CarField {
    pub const ALL: [CarField; 5] = [
        CarField::Make,
        CarField::Model,
        CarField::Year,
        CarField::PlateNumber,
        CarField::DailyRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CarField::Make => "Make",
            CarField::Model => "Model",
            CarField::Year => "Year",
            CarField::PlateNumber => "Plate Number",
            CarField::DailyRate => "Daily Rate",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which text input an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Car(CarField),
    CustomerName,
    TaxRate,
}

/// A single edit to a text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Clear,
}

impl TextEdit {
    pub fn apply(&self, buffer: &mut String) {
        match self {
            TextEdit::Insert(c) => buffer.push(*c),
            // Inputs are single-line
            TextEdit::Paste(text) => buffer.extend(text.chars().filter(|c| !c.is_control())),
            TextEdit::Backspace => {
                buffer.pop();
            }
            TextEdit::Clear => buffer.clear(),
        }
    }
}

/// Raw text of the Add Car form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub plate_number: String,
    pub daily_rate: String,
}

impl CarForm {
    pub fn field(&self, field: CarField) -> &str {
        match field {
            CarField::Make => &self.make,
            CarField::Model => &self.model,
            CarField::Year => &self.year,
            CarField::PlateNumber => &self.plate_number,
            CarField::DailyRate => &self.daily_rate,
        }
    }

    pub fn field_mut(&mut self, field: CarField) -> &mut String {
        match field {
            CarField::Make => &mut self.make,
            CarField::Model => &mut self.model,
            CarField::Year => &mut self.year,
            CarField::PlateNumber => &mut self.plate_number,
            CarField::DailyRate => &mut self.daily_rate,
        }
    }

    /// Trim strings and coerce numbers into the creation payload.
    pub fn to_payload(&self) -> NewCar {
        NewCar {
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: coerce_integer(&self.year),
            plate_number: self.plate_number.trim().to_string(),
            daily_rate: coerce_number(&self.daily_rate),
        }
    }
}

/// `Number(text)`: blank is 0, unparseable or non-finite is `None`.
///
/// Unsigned `0x`/`0o`/`0b` literals are read in their radix.
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(n) = radix_literal(trimmed) {
        return n;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `Some(result)` if `text` carries a radix prefix, `None` otherwise.
fn radix_literal(text: &str) -> Option<Option<f64>> {
    let (prefix, digits) = text.split_at_checked(2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    let value = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
    Some(Some(value).filter(|n| n.is_finite()))
}

/// Like [`coerce_number`], but only integral values survive.
pub fn coerce_integer(text: &str) -> Option<i64> {
    coerce_number(text)
        .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64)
        .map(|n| n as i64)
}

/// Tax rate for a return request. Blank or invalid input falls back to 0.
pub fn coerce_tax_rate(text: &str) -> f64 {
    coerce_number(text).unwrap_or(0.0)
}
