use std::fmt;

use crate::shared::errors::{AppError, AppResult};

/// Scanned product code (UPC/EAN), digits only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode(String);

impl Barcode {
    /// Normalize scanner output.
    ///
    /// Scanners append CR/LF, tabs or a BOM and humans type dashes or spaces;
    /// all non-digit characters are dropped.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Barcode '{}' contains no digits",
                raw.trim()
            )));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
