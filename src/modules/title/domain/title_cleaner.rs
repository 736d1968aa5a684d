use regex::{Regex, RegexBuilder};

use crate::shared::errors::AppResult;

/// Transformation that can be applied to a raw product title
///
/// Each transformation is composable and testable in isolation.
pub trait TitleTransformation: Send + Sync {
    fn transform(&self, title: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Cuts the title at the first bracketed or parenthesised suffix
#[derive(Debug, Clone)]
pub struct TruncateSuffixTransform {
    markers: Vec<&'static str>,
}

impl TruncateSuffixTransform {
    pub fn new() -> Self {
        Self {
            markers: vec![" [", " ("],
        }
    }
}

impl Default for TruncateSuffixTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleTransformation for TruncateSuffixTransform {
    fn transform(&self, title: &str) -> String {
        let cut = self
            .markers
            .iter()
            .filter_map(|marker| title.find(marker))
            .min()
            .unwrap_or(title.len());

        title[..cut].to_string()
    }

    fn name(&self) -> &'static str {
        "TruncateSuffix"
    }
}

/// Removes every case-insensitive match of the junk keyword pattern
#[derive(Debug, Clone)]
pub struct RemoveJunkKeywordsTransform {
    pattern: Regex,
}

impl RemoveJunkKeywordsTransform {
    pub fn new(pattern: &str) -> AppResult<Self> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { pattern })
    }
}

impl TitleTransformation for RemoveJunkKeywordsTransform {
    fn transform(&self, title: &str) -> String {
        self.pattern.replace_all(title, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "RemoveJunkKeywords"
    }
}

/// Trims whitespace and a single dangling trailing hyphen
#[derive(Debug, Clone)]
pub struct TrimTrailingSeparatorTransform;

impl TitleTransformation for TrimTrailingSeparatorTransform {
    fn transform(&self, title: &str) -> String {
        let trimmed = title.trim();
        trimmed
            .strip_suffix('-')
            .unwrap_or(trimmed)
            .trim()
            .to_string()
    }

    fn name(&self) -> &'static str {
        "TrimTrailingSeparator"
    }
}

/// Strips marketing and edition noise from barcode-derived titles
///
/// The pipeline is re-applied until the title stops changing, so a removal
/// that exposes new noise (a keyword glued around another keyword, a second
/// trailing hyphen) is cleaned up as well and `clean` is idempotent.
pub struct TitleCleaner {
    transformations: Vec<Box<dyn TitleTransformation>>,
}

impl TitleCleaner {
    /// Build the standard pipeline for the given junk keyword pattern
    pub fn new(junk_pattern: &str) -> AppResult<Self> {
        Ok(Self {
            transformations: vec![
                Box::new(TruncateSuffixTransform::new()),
                Box::new(RemoveJunkKeywordsTransform::new(junk_pattern)?),
                Box::new(TrimTrailingSeparatorTransform),
            ],
        })
    }

    pub fn clean(&self, raw: &str) -> String {
        let mut current = raw.to_string();

        loop {
            let next = self.apply_once(&current);
            // Every transformation only ever removes text, so this terminates.
            if next == current {
                return next;
            }
            current = next;
        }
    }

    fn apply_once(&self, title: &str) -> String {
        let mut result = title.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}
