// SkinConsult - app/consultant.rs
//
// Request orchestration: fetch the shared catalog, build the routine, and
// hand the outcome to the chosen writer. Also drives the interactive
// prompt loop, which reuses one catalog load for every routine it builds.

use crate::app::catalog_store::CatalogStore;
use crate::core::export;
use crate::core::model::{Concern, RoutineRequest, SkinType};
use crate::core::routine::{build_routine, RoutineOutcome};
use crate::platform::config::OutputFormat;
use crate::ui::report::{self, ReportOptions};
use crate::util::constants;
use crate::util::error::{ConsultError, ExportError};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Write an outcome in the requested format.
///
/// `output_path` is used only for error context (e.g. "<stdout>").
pub fn write_outcome<W: Write>(
    outcome: &RoutineOutcome<'_>,
    format: OutputFormat,
    options: ReportOptions,
    writer: &mut W,
    output_path: &Path,
) -> Result<(), ExportError> {
    let io_err = |source: io::Error| ExportError::Io {
        path: output_path.to_path_buf(),
        source,
    };
    match format {
        OutputFormat::Text => report::render_text(outcome, options, writer).map_err(io_err)?,
        OutputFormat::Json => {
            export::export_json(outcome, chrono::Utc::now(), &mut *writer, output_path)?;
        }
        OutputFormat::Csv => {
            export::export_csv(outcome, &mut *writer, output_path)?;
        }
    }
    writer.flush().map_err(io_err)
}

/// Build one routine and write it out.
///
/// Returns `true` when a plan was produced and `false` for the catalog-wide
/// no-match outcome.
pub fn recommend<W: Write>(
    store: &CatalogStore,
    request: &RoutineRequest,
    format: OutputFormat,
    options: ReportOptions,
    writer: &mut W,
    output_path: &Path,
) -> Result<bool, ConsultError> {
    let catalog = store.get()?;
    let outcome = build_routine(&catalog, request);

    match &outcome {
        RoutineOutcome::Plan(routine) => tracing::info!(
            candidates = routine.candidates,
            filled = routine.found_count(),
            missing = ?routine.missing_steps(),
            "Routine built"
        ),
        RoutineOutcome::NoMatch { .. } => tracing::info!(
            skin_type = %request.skin_type,
            concern = %request.concern,
            "No products match profile"
        ),
    }

    write_outcome(&outcome, format, options, writer, output_path)?;
    Ok(outcome.plan().is_some())
}

/// Counters reported when an interactive session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub routines: usize,
    pub no_matches: usize,
}

/// Prompt for profiles until end of input or "quit", printing a routine for
/// each completed profile.
pub fn run_interactive<R: BufRead, W: Write>(
    store: &CatalogStore,
    format: OutputFormat,
    options: ReportOptions,
    input: &mut R,
    output: &mut W,
) -> Result<SessionStats, ConsultError> {
    let console = PathBuf::from("<console>");
    let io_err = |operation: &'static str| {
        let path = console.clone();
        move |source: io::Error| ConsultError::Io {
            path,
            operation,
            source,
        }
    };

    // Fail before prompting if the catalog cannot be read.
    store.get()?;

    let mut stats = SessionStats::default();
    loop {
        let skin_choices = SkinType::all().iter().map(|s| s.label()).collect::<Vec<_>>();
        let Some(skin) = prompt_choice::<SkinType, _, _>(
            input,
            output,
            &format!("Skin type [{}]", skin_choices.join("/")),
        )
        .map_err(io_err("prompt"))?
        else {
            break;
        };

        let concern_choices = Concern::all().iter().map(|c| c.label()).collect::<Vec<_>>();
        let Some(concern) = prompt_choice::<Concern, _, _>(
            input,
            output,
            &format!("Primary concern [{}]", concern_choices.join("/")),
        )
        .map_err(io_err("prompt"))?
        else {
            break;
        };

        let Some(exclusion) = prompt_exclusion(input, output).map_err(io_err("prompt"))? else {
            break;
        };

        let request = RoutineRequest::from_profile(skin, concern, exclusion);
        let matched = recommend(store, &request, format, options, output, &console)?;
        stats.routines += 1;
        if !matched {
            stats.no_matches += 1;
        }
        writeln!(output).map_err(io_err("write"))?;
    }

    tracing::info!(
        routines = stats.routines,
        no_matches = stats.no_matches,
        "Interactive session finished"
    );
    Ok(stats)
}

/// Read one trimmed line. `None` on end of input or a quit command.
fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim_end_matches(['\r', '\n']).to_string();
    if matches!(answer.trim().to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(None);
    }
    Ok(Some(answer))
}

/// Prompt until the answer parses as `T`.
fn prompt_choice<T, R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<T>>
where
    T: FromStr<Err = String>,
    R: BufRead,
    W: Write,
{
    while let Some(answer) = read_answer(input, output, label)? {
        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "  {e}")?,
        }
    }
    Ok(None)
}

/// Prompt for the exclusion term. Outer `None` is end of input; inner
/// `None` means no exclusion.
fn prompt_exclusion<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Option<String>>> {
    let label = "Allergy guard - ingredient to avoid (blank for none)";
    while let Some(answer) = read_answer(input, output, label)? {
        if answer.chars().count() > constants::MAX_EXCLUSION_TERM_LEN {
            writeln!(
                output,
                "  Too long: at most {} characters.",
                constants::MAX_EXCLUSION_TERM_LEN
            )?;
            continue;
        }
        let term = (!answer.trim().is_empty()).then_some(answer);
        return Ok(Some(term));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::model::Product;
    use std::io::Cursor;

    fn store() -> CatalogStore {
        let product = |name: &str, skin: &str, concern: &str| Product {
            name: name.to_string(),
            skin_types: skin.to_string(),
            concerns: concern.to_string(),
            image_ref: String::new(),
            detail_url: String::new(),
        };
        CatalogStore::preloaded(
            "memory.csv",
            Catalog::from_products(vec![
                product("Foaming Wash", "Oily", "Acne"),
                product("Niacinamide Serum", "Oily", "Acne"),
                product("Hydra Cream", "Dry", "Hydration"),
            ]),
        )
    }

    fn quiet() -> ReportOptions {
        ReportOptions {
            show_captions: false,
        }
    }

    #[test]
    fn test_recommend_reports_match_state() {
        let store = store();
        let mut out = Vec::new();
        let matched = recommend(
            &store,
            &RoutineRequest::new("Oily", "Acne", None),
            OutputFormat::Text,
            quiet(),
            &mut out,
            Path::new("<stdout>"),
        )
        .unwrap();
        assert!(matched);
        assert!(String::from_utf8(out).unwrap().contains("Foaming Wash"));

        let mut out = Vec::new();
        let matched = recommend(
            &store,
            &RoutineRequest::new("Sensitive", "Acne", None),
            OutputFormat::Csv,
            quiet(),
            &mut out,
            Path::new("<stdout>"),
        )
        .unwrap();
        assert!(!matched);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_recommend_missing_catalog_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("missing.csv"));
        let result = recommend(
            &store,
            &RoutineRequest::new("Oily", "Acne", None),
            OutputFormat::Json,
            quiet(),
            &mut Vec::new(),
            Path::new("<stdout>"),
        );
        assert!(matches!(result, Err(ConsultError::Catalog(_))));
    }

    #[test]
    fn test_interactive_session_builds_each_profile() {
        let store = store();
        let script = "oily\nacne\n\nscaly\ndry\nhydration\ncream\nquit\n";
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let stats =
            run_interactive(&store, OutputFormat::Text, quiet(), &mut input, &mut output).unwrap();

        assert_eq!(
            stats,
            SessionStats {
                routines: 2,
                no_matches: 1
            }
        );
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Niacinamide Serum"));
        assert!(text.contains("unknown skin type 'scaly'"));
        assert!(text.contains("avoiding \"cream\""));
        assert!(text.contains(constants::NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_interactive_rejects_long_exclusion() {
        let store = store();
        let long = "x".repeat(constants::MAX_EXCLUSION_TERM_LEN + 1);
        let script = format!("Oily\nsun-protection\n{long}\nspf\n");
        let mut input = Cursor::new(script.into_bytes());
        let mut output = Vec::new();
        let stats =
            run_interactive(&store, OutputFormat::Text, quiet(), &mut input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Too long"));
        assert!(text.contains("avoiding \"spf\""));
        assert_eq!(stats.routines, 1);
        assert_eq!(stats.no_matches, 1);
    }

    #[test]
    fn test_interactive_ends_on_eof_mid_profile() {
        let store = store();
        let mut input = Cursor::new(b"Oily\n".to_vec());
        let mut output = Vec::new();
        let stats =
            run_interactive(&store, OutputFormat::Json, quiet(), &mut input, &mut output).unwrap();
        assert_eq!(stats, SessionStats::default());
    }
}
