use crate::infra::engine_from_env;
use clap::Args;
use name_fortune::error::AppError;
use name_fortune::fortune::{
    AnalysisDepth, AnalysisRequest, AspectSelection, Element, FortuneReport, NumerologyEntry,
};
use serde_json::json;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Full name to analyze, 2 to 6 Chinese characters
    pub(crate) name: String,
    /// Report depth: basic, detailed or comprehensive
    #[arg(long, default_value_t = AnalysisDepth::Comprehensive)]
    pub(crate) depth: AnalysisDepth,
    /// Comma separated life aspects to score, or "all"
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub(crate) aspects: Vec<String>,
    /// Skip the predictions section
    #[arg(long)]
    pub(crate) no_predictions: bool,
    /// Skip the advice section
    #[arg(long)]
    pub(crate) no_advice: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NumerologyArgs {
    /// Grid value to look up; values above 81 wrap around
    pub(crate) number: u32,
    /// Print the entry as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl AnalyzeArgs {
    fn to_request(&self) -> Result<AnalysisRequest, AppError> {
        let aspects = AspectSelection::parse(&self.aspects)?;
        let mut request = AnalysisRequest::new(self.name.clone())
            .with_depth(self.depth)
            .with_aspects(aspects);
        if self.no_predictions {
            request = request.without_predictions();
        }
        if self.no_advice {
            request = request.without_advice();
        }
        Ok(request)
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let engine = engine_from_env()?;
    let request = args.to_request()?;
    let report = engine.analyze(&request)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_report(&report, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_numerology(args: NumerologyArgs) -> Result<(), AppError> {
    let engine = engine_from_env()?;
    let entry = engine.numerology(args.number)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let payload = json!({
            "requested": args.number,
            "number": entry.number,
            "element": Element::of(i64::from(entry.number)),
            "tier": entry.tier,
            "score": entry.score(),
            "category": entry.category,
            "meaning": entry.meaning,
        });
        serde_json::to_writer_pretty(&mut out, &payload).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_numerology(args.number, entry, &mut out)?;
    }
    Ok(())
}

pub(crate) fn render_numerology(
    requested: u32,
    entry: &NumerologyEntry,
    out: &mut impl Write,
) -> io::Result<()> {
    if requested != entry.number {
        writeln!(out, "{requested} wraps to {}", entry.number)?;
    }
    writeln!(
        out,
        "{} [{}] {} {} ({}): {}",
        entry.number,
        Element::of(i64::from(entry.number)),
        entry.tier.label(),
        entry.score(),
        entry.category.label(),
        entry.meaning
    )
}

pub(crate) fn render_report(report: &FortuneReport, out: &mut impl Write) -> io::Result<()> {
    let structure = &report.name_structure;
    writeln!(
        out,
        "{} ({}, {} analysis)",
        report.full_name,
        structure.layout(),
        report.analysis_type
    )?;
    writeln!(
        out,
        "Surname {} / given name {}, total strokes {}",
        structure.surname, structure.given_name, report.stroke_counts.total
    )?;

    writeln!(out, "\nFive grids:")?;
    for reading in &report.numerology_analysis {
        writeln!(
            out,
            "  {} {:>3} [{}] {} {}: {}",
            reading.label,
            reading.value,
            reading.element,
            reading.tier.label(),
            reading.category.label(),
            reading.meaning
        )?;
    }

    let talents = &report.three_talents_analysis;
    writeln!(
        out,
        "\nThree talents: {} {} ({}) {}",
        talents.configuration,
        talents.tier.label(),
        talents.score,
        talents.meaning
    )?;
    writeln!(out, "  {}", talents.narrative_description)?;

    if !report.aspect_analysis.is_empty() {
        writeln!(out, "\nLife aspects:")?;
        for result in report.aspect_analysis.values() {
            writeln!(
                out,
                "  {} {:>3} {} ({} {} / {} {})",
                result.label,
                result.score,
                result.tier.label(),
                result.primary.grid.label(),
                result.primary.value,
                result.secondary.grid.label(),
                result.secondary.value
            )?;
        }
    }

    writeln!(out, "\nAge phases:")?;
    for result in report.age_analysis.values() {
        writeln!(
            out,
            "  {} ({}) {:>3} {} via {}",
            result.label,
            result.age_range,
            result.score,
            result.tier.label(),
            result.influencing_grid.label()
        )?;
    }

    let overall = &report.overall_score;
    writeln!(
        out,
        "\nOverall: {} {} ({})",
        overall.score,
        overall.tier.label(),
        overall.label
    )?;

    if let Some(predictions) = &report.predictions {
        writeln!(out, "\nImportant ages:")?;
        for period in &predictions.important_periods {
            writeln!(
                out,
                "  {} {}: {}",
                period.age,
                period.stage.label(),
                period.advice
            )?;
        }
    }

    if let Some(advice) = &report.advice {
        writeln!(
            out,
            "\nLucky element {}: colors {}, direction {}, season {}",
            advice.lucky.element,
            advice.lucky.colors,
            advice.lucky.direction,
            advice.lucky.season
        )?;
        if let Some(summary) = advice.overall {
            writeln!(out, "  {summary}")?;
        }
    }

    for warning in &report.warnings {
        writeln!(out, "warning: {}", warning.summary())?;
    }
    Ok(())
}
