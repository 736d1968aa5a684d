use crate::shared::errors::{AppError, AppResult};

const MAX_INPUT_LENGTH: usize = 255;

pub struct Validator;

impl Validator {
    /// Trims free-typed input and rejects values that cannot be searched.
    pub fn search_input(value: Option<&str>, field: &str) -> AppResult<String> {
        let trimmed = value.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(format!("{} cannot be empty", field)));
        }
        if trimmed.chars().count() > MAX_INPUT_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "{} too long (max {} characters)",
                field, MAX_INPUT_LENGTH
            )));
        }
        Ok(trimmed.to_string())
    }
}
