use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use colmap_cli::input::read_columns;
use colmap_cli::summary::{explain_table, hints_table, print_mapping_summary};
use colmap_map::{
    ColumnMatcher, DomainHintTable, FlowDiagram, FlowOptions, load_hint_table, validate_columns,
};
use colmap_model::{ColumnSide, ConfidenceThresholds};

use crate::cli::{ExplainArgs, HintArgs, MatchArgs, OutputFormatArg};

pub fn run_match(args: &MatchArgs) -> Result<()> {
    let span = info_span!(
        "match",
        source = %args.source.display(),
        target = %args.target.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let matcher = ColumnMatcher::new(load_hints(&args.hints)?);
    let sources = read_columns(&args.source).context("load source columns")?;
    let targets = read_columns(&args.target).context("load target columns")?;
    if targets.is_empty() {
        warn!("target schema has no columns, every source will be unmatched");
    }

    let result = matcher
        .match_columns(&sources, &targets)
        .context("match columns")?;
    let matched = result.iter().filter(|m| m.is_matched()).count();
    info!(
        sources = sources.len(),
        targets = targets.len(),
        matched,
        repeated_targets = result.repeated_targets().len(),
        duration_ms = start.elapsed().as_millis(),
        "matching complete"
    );

    match args.format {
        OutputFormatArg::Table => {
            print_mapping_summary(&result, &ConfidenceThresholds::default());
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&result).context("serialize mappings")?;
            println!("{json}");
        }
        OutputFormatArg::Flow => {
            let options = FlowOptions {
                min_confidence: args.min_confidence,
                weight_scale: args.weight_scale,
            };
            let diagram = FlowDiagram::from_result(&result, &options);
            info!(
                nodes = diagram.nodes.len(),
                links = diagram.links.len(),
                "flow diagram built"
            );
            let json = serde_json::to_string_pretty(&diagram).context("serialize flow diagram")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_explain(args: &ExplainArgs) -> Result<()> {
    validate_columns(&[args.source.as_str()], ColumnSide::Source)?;
    validate_columns(&[args.target.as_str()], ColumnSide::Target)?;
    let matcher = ColumnMatcher::new(load_hints(&args.hints)?);
    let score = matcher.explain_pair(&args.source, &args.target);
    debug!(
        source = %args.source,
        target = %args.target,
        explanation = %score.explain(),
        "explained pair"
    );
    println!("{} -> {}", args.source, args.target);
    println!("{}", explain_table(&score));
    Ok(())
}

pub fn run_hints(args: &HintArgs) -> Result<()> {
    let hints = load_hints(args)?;
    println!("{}", hints_table(&hints));
    Ok(())
}

fn load_hints(args: &HintArgs) -> Result<DomainHintTable> {
    match &args.hints {
        Some(path) => load_hint_table(path).context("load hint table"),
        None => Ok(DomainHintTable::builtin()),
    }
}
