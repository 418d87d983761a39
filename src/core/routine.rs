// SkinConsult - core/routine.rs
//
// Routine selector: filters the catalog by the user's profile and fills the
// fixed morning/evening/night schedule.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Selection rule: for each (phase, step) slot the first candidate in catalog
// row order with that step category wins. Reordering the catalog therefore
// changes the routine.

use crate::core::catalog::Catalog;
use crate::core::model::{Phase, Product, RoutineRequest, StepCategory};
use serde::Serialize;

/// One (phase, step) position in the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineSlot<'c> {
    pub phase: Phase,
    pub step: StepCategory,

    /// The chosen product, or `None` when no candidate has this step.
    pub product: Option<&'c Product>,
}

/// A filled schedule for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine<'c> {
    pub request: RoutineRequest,

    /// Number of catalog records that passed the filters.
    pub candidates: usize,

    /// Every slot of the schedule in display order.
    pub slots: Vec<RoutineSlot<'c>>,
}

impl<'c> Routine<'c> {
    /// Slots belonging to one phase, in step order.
    pub fn slots_for(&self, phase: Phase) -> impl Iterator<Item = &RoutineSlot<'c>> {
        self.slots.iter().filter(move |s| s.phase == phase)
    }

    /// Number of slots with a product.
    pub fn found_count(&self) -> usize {
        self.slots.iter().filter(|s| s.product.is_some()).count()
    }

    /// (phase, step) pairs left without a product.
    pub fn missing_steps(&self) -> Vec<(Phase, StepCategory)> {
        self.slots
            .iter()
            .filter(|s| s.product.is_none())
            .map(|s| (s.phase, s.step))
            .collect()
    }
}

/// Result of a routine build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutineOutcome<'c> {
    /// No catalog record survived the filters. No schedule is produced.
    NoMatch { request: RoutineRequest },

    /// At least one candidate exists; every slot is present.
    Plan(Routine<'c>),
}

impl<'c> RoutineOutcome<'c> {
    pub fn request(&self) -> &RoutineRequest {
        match self {
            RoutineOutcome::NoMatch { request } => request,
            RoutineOutcome::Plan(routine) => &routine.request,
        }
    }

    /// The routine, if one was produced.
    pub fn plan(&self) -> Option<&Routine<'c>> {
        match self {
            RoutineOutcome::Plan(routine) => Some(routine),
            RoutineOutcome::NoMatch { .. } => None,
        }
    }

    /// Slots to display: empty for `NoMatch`.
    pub fn slots(&self) -> &[RoutineSlot<'c>] {
        match self {
            RoutineOutcome::Plan(routine) => &routine.slots,
            RoutineOutcome::NoMatch { .. } => &[],
        }
    }
}

/// Apply the profile filters, returning indices of matching entries.
///
/// Returns a Vec of indices into the catalog in row order. A record matches
/// when its skin types contain the requested skin type and its concerns
/// contain the requested concern, and its name does not contain the active
/// exclusion term. All tests are case-insensitive substring tests; an empty
/// field never matches.
pub fn filter_candidates(catalog: &Catalog, request: &RoutineRequest) -> Vec<usize> {
    let skin_lower = request.skin_type.to_lowercase();
    let concern_lower = request.concern.to_lowercase();
    let exclusion_lower = request.active_exclusion().map(str::to_lowercase);

    catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            let p = &entry.product;
            field_contains(&p.skin_types, &skin_lower)
                && field_contains(&p.concerns, &concern_lower)
                && !exclusion_lower
                    .as_deref()
                    .is_some_and(|term| p.name.to_lowercase().contains(term))
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Case-insensitive substring test where an empty field is treated as absent.
fn field_contains(field: &str, needle_lower: &str) -> bool {
    !field.is_empty() && field.to_lowercase().contains(needle_lower)
}

/// Build the routine for `request`.
pub fn build_routine<'c>(catalog: &'c Catalog, request: &RoutineRequest) -> RoutineOutcome<'c> {
    let candidates = filter_candidates(catalog, request);

    tracing::debug!(
        skin_type = %request.skin_type,
        concern = %request.concern,
        exclusion = ?request.active_exclusion(),
        candidates = candidates.len(),
        catalog = catalog.len(),
        "Profile filter applied"
    );

    if candidates.is_empty() {
        return RoutineOutcome::NoMatch {
            request: request.clone(),
        };
    }

    let mut slots = Vec::new();
    for &phase in Phase::all() {
        for &step in phase.steps() {
            let product = candidates
                .iter()
                .filter_map(|&idx| catalog.get(idx))
                .find(|entry| entry.step == step)
                .map(|entry| &entry.product);
            if product.is_none() {
                tracing::debug!(phase = %phase, step = %step, "No candidate for step");
            }
            slots.push(RoutineSlot {
                phase,
                step,
                product,
            });
        }
    }

    RoutineOutcome::Plan(Routine {
        request: request.clone(),
        candidates: candidates.len(),
        slots,
    })
}
