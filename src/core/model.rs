// SkinConsult - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Product (one catalog row)
// =============================================================================

/// A single product row from the catalog.
///
/// Text fields are stored trimmed. Any of them except `name` may be empty;
/// an empty `skin_types` or `concerns` never matches a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product display name. Never empty for rows accepted into a catalog.
    pub name: String,

    /// Free-text list of compatible skin types.
    pub skin_types: String,

    /// Free-text description of addressed concerns.
    pub concerns: String,

    /// Path or URL of a product image.
    pub image_ref: String,

    /// URL with more information about the product.
    pub detail_url: String,
}

// =============================================================================
// Step category
// =============================================================================

/// The role a product plays in a routine, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StepCategory {
    Cleanse,
    Treat,
    Moisturize,
    Protect,
}

impl StepCategory {
    /// Returns all variants in routine order.
    pub fn all() -> &'static [StepCategory] {
        &[
            StepCategory::Cleanse,
            StepCategory::Treat,
            StepCategory::Moisturize,
            StepCategory::Protect,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            StepCategory::Cleanse => "Cleanse",
            StepCategory::Treat => "Treat",
            StepCategory::Moisturize => "Moisturize",
            StepCategory::Protect => "Protect",
        }
    }
}

impl std::fmt::Display for StepCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Schedule
// =============================================================================

/// A time of day in the routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Morning,
    Evening,
    Night,
}

impl Phase {
    /// Returns all phases in schedule order.
    pub fn all() -> &'static [Phase] {
        &[Phase::Morning, Phase::Evening, Phase::Night]
    }

    /// Ordered steps to fill for this phase.
    pub fn steps(&self) -> &'static [StepCategory] {
        match self {
            Phase::Morning => &[
                StepCategory::Cleanse,
                StepCategory::Treat,
                StepCategory::Protect,
            ],
            Phase::Evening => &[
                StepCategory::Cleanse,
                StepCategory::Treat,
                StepCategory::Moisturize,
            ],
            Phase::Night => &[StepCategory::Cleanse, StepCategory::Moisturize],
        }
    }

    /// Plain label, e.g. "Morning Routine".
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Morning => "Morning Routine",
            Phase::Evening => "Evening Routine",
            Phase::Night => "Night Routine",
        }
    }

    /// Header label with its icon, as shown above each phase in text output.
    pub fn header(&self) -> &'static str {
        match self {
            Phase::Morning => "☀️ Morning Routine",
            Phase::Evening => "🌆 Evening Routine",
            Phase::Night => "🌙 Night Routine",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Total number of (phase, step) slots in the schedule.
pub fn schedule_slot_count() -> usize {
    Phase::all().iter().map(|p| p.steps().len()).sum()
}

// =============================================================================
// Input vocabulary
// =============================================================================

/// Skin types offered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
    Sensitive,
}

impl SkinType {
    pub fn all() -> &'static [SkinType] {
        &[
            SkinType::Oily,
            SkinType::Dry,
            SkinType::Combination,
            SkinType::Normal,
            SkinType::Sensitive,
        ]
    }

    /// Label used both for display and for matching against the catalog.
    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
            SkinType::Normal => "Normal",
            SkinType::Sensitive => "Sensitive",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SkinType::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown skin type '{wanted}' (expected one of: {})",
                    labels(SkinType::all().iter().map(|t| t.label()))
                )
            })
    }
}

/// Primary concerns offered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Acne,
    Pigmentation,
    Hydration,
    SunProtection,
    Pimples,
}

impl Concern {
    pub fn all() -> &'static [Concern] {
        &[
            Concern::Acne,
            Concern::Pigmentation,
            Concern::Hydration,
            Concern::SunProtection,
            Concern::Pimples,
        ]
    }

    /// Label used both for display and for matching against the catalog.
    pub fn label(&self) -> &'static str {
        match self {
            Concern::Acne => "Acne",
            Concern::Pigmentation => "Pigmentation",
            Concern::Hydration => "Hydration",
            Concern::SunProtection => "Sun protection",
            Concern::Pimples => "Pimples",
        }
    }
}

impl std::fmt::Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Concern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept shell-friendly spellings of multi-word labels.
        let wanted = s.trim().replace(['-', '_'], " ");
        Concern::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                format!(
                    "unknown concern '{}' (expected one of: {})",
                    s.trim(),
                    labels(Concern::all().iter().map(|c| c.label()))
                )
            })
    }
}

fn labels<'a>(iter: impl Iterator<Item = &'a str>) -> String {
    iter.collect::<Vec<_>>().join(", ")
}

// =============================================================================
// Routine request
// =============================================================================

/// The three user inputs to a routine build.
///
/// `skin_type` and `concern` are matched as case-insensitive substrings of
/// the catalog's free-text columns. `exclusion`, when present and non-empty,
/// removes every product whose name contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineRequest {
    pub skin_type: String,
    pub concern: String,
    pub exclusion: Option<String>,
}

impl RoutineRequest {
    pub fn new(
        skin_type: impl Into<String>,
        concern: impl Into<String>,
        exclusion: Option<String>,
    ) -> Self {
        Self {
            skin_type: skin_type.into(),
            concern: concern.into(),
            exclusion,
        }
    }

    /// Build a request from the front-end vocabulary.
    pub fn from_profile(skin_type: SkinType, concern: Concern, exclusion: Option<String>) -> Self {
        Self::new(skin_type.label(), concern.label(), exclusion)
    }

    /// The exclusion term if one is in effect (empty counts as none).
    pub fn active_exclusion(&self) -> Option<&str> {
        self.exclusion.as_deref().filter(|term| !term.is_empty())
    }
}
