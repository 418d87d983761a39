// SkinConsult - ui/report.rs
//
// Plain-text rendering of a routine: one section per phase, one block per
// step. Renders whatever the selector produced and makes no decisions.

use crate::core::model::{Concern, Phase, Product, SkinType, StepCategory};
use crate::core::routine::{RoutineOutcome, RoutineSlot};
use crate::util::constants;
use std::io::{self, Write};

/// Width of the divider printed after each product.
const DIVIDER_WIDTH: usize = 40;

/// Presentation switches for the text report.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Print the title, intro and footer captions.
    pub show_captions: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_captions: true,
        }
    }
}

/// Render a routine outcome as a text report.
///
/// A no-match outcome prints a single error message and no phases.
pub fn render_text<W: Write>(
    outcome: &RoutineOutcome<'_>,
    options: ReportOptions,
    out: &mut W,
) -> io::Result<()> {
    if options.show_captions {
        writeln!(out, "{} - AI Skin Consultant", constants::APP_NAME)?;
        writeln!(out, "{}", constants::INTRO_CAPTION)?;
        writeln!(out)?;
    }

    let request = outcome.request();
    write!(
        out,
        "Profile: {} skin, {} concern",
        request.skin_type, request.concern
    )?;
    match request.active_exclusion() {
        Some(term) => writeln!(out, ", avoiding \"{term}\"")?,
        None => writeln!(out)?,
    }
    writeln!(out)?;

    match outcome {
        RoutineOutcome::NoMatch { .. } => {
            writeln!(out, "Error: {}", constants::NO_MATCH_MESSAGE)?;
        }
        RoutineOutcome::Plan(routine) => {
            for &phase in Phase::all() {
                render_phase_header(phase, out)?;
                for slot in routine.slots_for(phase) {
                    render_slot(slot, out)?;
                }
                writeln!(out)?;
            }
        }
    }

    if options.show_captions {
        writeln!(out, "{}", constants::FOOTER_CAPTION)?;
    }
    Ok(())
}

fn render_phase_header<W: Write>(phase: Phase, out: &mut W) -> io::Result<()> {
    let header = phase.header().to_uppercase();
    writeln!(out, "{header}")?;
    writeln!(out, "{}", "=".repeat(header.chars().count()))
}

fn render_slot<W: Write>(slot: &RoutineSlot<'_>, out: &mut W) -> io::Result<()> {
    match slot.product {
        Some(product) => render_product(slot.step, product, out),
        None => writeln!(out, "(i) {}", not_found_message(slot.step)),
    }
}

fn render_product<W: Write>(step: StepCategory, product: &Product, out: &mut W) -> io::Result<()> {
    writeln!(out, "#### {step}")?;
    writeln!(out, "  {}", product.name)?;
    writeln!(out, "  Reason: Targeted for {}", product.concerns)?;
    if !product.image_ref.is_empty() {
        writeln!(out, "  Image: {}", product.image_ref)?;
    }
    if !product.detail_url.is_empty() {
        writeln!(out, "  View Details: {}", product.detail_url)?;
    }
    writeln!(out, "{}", "-".repeat(DIVIDER_WIDTH))
}

/// Placeholder text for a step without a product.
pub fn not_found_message(step: StepCategory) -> String {
    format!("No specific {step} found matching your profile.")
}

/// List the accepted skin types and concerns.
pub fn render_options<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Skin types:")?;
    for skin in SkinType::all() {
        writeln!(out, "  {skin}")?;
    }
    writeln!(out, "Concerns:")?;
    for concern in Concern::all() {
        writeln!(out, "  {concern}")?;
    }
    Ok(())
}

/// Print `name -> step` lines, one per name.
pub fn render_classification<W: Write>(
    rows: &[(String, StepCategory)],
    out: &mut W,
) -> io::Result<()> {
    let width = rows.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
    for (name, step) in rows {
        writeln!(out, "{name:<width$}  {step}")?;
    }
    Ok(())
}
