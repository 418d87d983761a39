// SkinConsult - core/classify.rs
//
// Keyword rules mapping a product name to its routine step.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::StepCategory;
use crate::util::constants::{
    CLEANSE_KEYWORDS, MOISTURIZE_KEYWORDS, PROTECT_KEYWORDS, TREAT_KEYWORDS,
};

/// Keyword groups in priority order. The first group with a hit decides.
const RULES: &[(&[&str], StepCategory)] = &[
    (CLEANSE_KEYWORDS, StepCategory::Cleanse),
    (TREAT_KEYWORDS, StepCategory::Treat),
    (MOISTURIZE_KEYWORDS, StepCategory::Moisturize),
    (PROTECT_KEYWORDS, StepCategory::Protect),
];

/// Classify a product by its display name.
///
/// Matching is a case-insensitive substring test. Names that hit no keyword
/// group fall back to `Treat`. Total: every input, including the empty
/// string, yields a category.
pub fn classify(name: &str) -> StepCategory {
    let name = name.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, step)| *step)
        .unwrap_or(StepCategory::Treat)
}
