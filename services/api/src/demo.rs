use clap::Args;
use deduction_ai::error::AppError;
use deduction_ai::workflows::fieldnotes::FieldNoteImporter;
use deduction_ai::workflows::profiling::{
    CueCategory, DeductionEngine, SubjectAssessment, SubjectObservation,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional field-note CSV sheet to merge into the walkthrough observation.
    #[arg(long)]
    pub(crate) field_notes: Option<PathBuf>,
    /// Limit the ranked profile listing to the top N entries.
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Skip the cue library portion of the demo output.
    #[arg(long)]
    pub(crate) skip_catalog: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AnalysisArgs {
    /// Observed cue identifier (repeatable)
    #[arg(long = "cue", value_name = "CUE")]
    pub(crate) cues: Vec<String>,
    /// Situational context tag (repeatable)
    #[arg(long = "context", value_name = "TAG")]
    pub(crate) contexts: Vec<String>,
    /// Optional field-note CSV sheet to merge into the observation
    #[arg(long)]
    pub(crate) field_notes: Option<PathBuf>,
    /// Limit the ranked profile listing to the top N entries
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Echo the effective observation before the report
    #[arg(long)]
    pub(crate) list_observations: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Restrict the listing to one category (e.g. physical_markers)
    #[arg(long, value_parser = crate::infra::parse_category)]
    pub(crate) category: Option<CueCategory>,
}

pub(crate) fn run_analysis(args: AnalysisArgs) -> Result<(), AppError> {
    let AnalysisArgs {
        cues,
        contexts,
        field_notes,
        top,
        list_observations,
    } = args;

    let base = SubjectObservation {
        observed_cues: cues,
        context_tags: contexts,
    };
    let (observation, imported) = load_observation_from_path(field_notes, base)?;

    let engine = DeductionEngine::standard();
    let assessment = engine.analyze(&observation);
    render_assessment(&observation, &assessment, imported, top, list_observations);

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let engine = DeductionEngine::standard();
    render_catalog(&engine, args.category);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        field_notes,
        top,
        skip_catalog,
    } = args;

    println!("Behavioral deduction demo");
    let (observation, imported) =
        load_observation_from_path(field_notes, walkthrough_observation())?;

    let engine = DeductionEngine::standard();
    let assessment = engine.analyze(&observation);
    render_assessment(&observation, &assessment, imported, top, true);

    if !skip_catalog {
        println!();
        render_catalog(&engine, None);
    }

    match serde_json::to_string_pretty(&assessment) {
        Ok(json) => println!("\nAssessment payload:\n{json}"),
        Err(err) => println!("\nAssessment payload unavailable: {err}"),
    }

    Ok(())
}

/// Canned observation set used when the demo runs without a field-note sheet.
fn walkthrough_observation() -> SubjectObservation {
    SubjectObservation {
        observed_cues: vec![
            "inward_watch_face".to_string(),
            "tactical_nail_cut".to_string(),
            "peripheral_scanning".to_string(),
            "past_tense_present_event".to_string(),
            "voice_pitch_elevation".to_string(),
        ],
        context_tags: vec!["job_interview".to_string()],
    }
}

pub(crate) fn load_observation_from_path(
    field_notes: Option<PathBuf>,
    mut base: SubjectObservation,
) -> Result<(SubjectObservation, bool), AppError> {
    match field_notes {
        Some(path) => {
            let imported = FieldNoteImporter::from_path(path)?;
            base.merge(imported);
            Ok((base, true))
        }
        None => Ok((base, false)),
    }
}

pub(crate) fn render_assessment(
    observation: &SubjectObservation,
    assessment: &SubjectAssessment,
    imported: bool,
    top: Option<usize>,
    list_observations: bool,
) {
    println!("Subject assessment");
    if imported {
        println!("Data source: direct observations plus field-note import");
    } else {
        println!("Data source: direct observations");
    }

    if list_observations {
        println!(
            "Observed cues ({}): {}",
            observation.observed_cues.len(),
            observation.observed_cues.join(", ")
        );
        if observation.context_tags.is_empty() {
            println!("Context tags: none");
        } else {
            println!("Context tags: {}", observation.context_tags.join(", "));
        }
    }

    if assessment.manipulation_risk() {
        println!("\nCAUTION: manipulation indicators present; verify independently before acting");
    }

    if assessment.findings.is_empty() {
        println!("\nIncongruence findings: none");
    } else {
        println!("\nIncongruence findings");
        for finding in &assessment.findings {
            println!("- {}", finding.summary());
        }
    }

    let shown = match top {
        Some(limit) => assessment.top_profiles(limit),
        None => &assessment.profiles,
    };

    if shown.is_empty() {
        println!("\nRanked profiles: none scored above zero");
        return;
    }

    println!("\nRanked profiles");
    for report in shown {
        let alert_note = if report.priority_alert() {
            " [priority]"
        } else {
            ""
        };
        println!(
            "- {} | score {} | confidence {} | threat {}{}",
            report.display_name(),
            report.score,
            report.confidence_label,
            report.threat_label,
            alert_note
        );
    }

    let suppressed = assessment.profiles.len().saturating_sub(shown.len());
    if suppressed > 0 {
        println!("  ({suppressed} lower-ranked profiles suppressed)");
    }
}

fn render_catalog(engine: &DeductionEngine, category: Option<CueCategory>) {
    println!("Cue library");
    for (table_category, cues) in engine.library().cues_by_category() {
        if let Some(wanted) = category {
            if wanted != table_category {
                continue;
            }
        }
        println!("\n{} ({} cues)", table_category.label(), cues.len());
        for cue in cues {
            println!("- {cue}");
        }
    }

    if category.is_none() {
        println!("\nContext tags");
        for tag in engine.library().context_tags() {
            println!("- {tag}");
        }
    }
}
