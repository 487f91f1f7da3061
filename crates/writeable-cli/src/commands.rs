use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, warn};

use writeable_analyze::{AnalysisOptions, AnalysisPipeline, Register};
use writeable_cli::pipeline::{AnalyzedDocument, analyze_text, list_documents, read_text_file};
use writeable_report::write_report_json;

use crate::cli::{AnalyzeArgs, RegisterArg};
use crate::summary::apply_table_style;
use crate::types::{AnalyzeResult, DocumentSummary};

/// One document to analyze: inline text, stdin, or a file on disk.
struct DocumentSource {
    name: String,
    path: Option<PathBuf>,
    text: Option<String>,
}

pub fn run_categories() -> Result<()> {
    let pipeline = AnalysisPipeline::with_defaults(&AnalysisOptions::default());
    let mut table = Table::new();
    table.set_header(vec!["Category", "Description"]);
    apply_table_style(&mut table);
    for category in pipeline.categories() {
        table.add_row(vec![category, describe_category(category)]);
    }
    println!("{table}");
    Ok(())
}

fn describe_category(category: &str) -> &'static str {
    match category {
        "grammar" => "Sentence structure: punctuation, run-ons, repeated words, agreement",
        "clarity" => "Readability: sentence length, clause nesting, filler words",
        "tone" => "Register: overly formal or overly casual word choice",
        _ => "",
    }
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let options = analysis_options(args);
    let pipeline = AnalysisPipeline::with_defaults(&options);

    let sources = collect_sources(args)?;
    let batch = sources.len() > 1;
    let progress = if batch {
        let bar = ProgressBar::new(sources.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .context("progress bar template")?,
        );
        Some(bar)
    } else {
        None
    };

    let run_span = info_span!("analyze", document_count = sources.len());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let mut documents = Vec::new();
    let mut errors = Vec::new();
    let mut error_findings = 0usize;

    for source in &sources {
        if let Some(bar) = &progress {
            bar.set_message(source.name.clone());
        }

        match analyze_source(&pipeline, source, args, batch) {
            Ok(summary) => {
                error_findings += summary.report.error_count();
                documents.push(summary);
            }
            Err(error) => {
                warn!(document = %source.name, error = %error, "document skipped");
                errors.push(format!("{}: {error:#}", source.name));
            }
        }

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    info!(
        document_count = documents.len(),
        error_count = errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "analysis run complete"
    );

    let has_errors = !errors.is_empty() || (error_findings > 0 && !args.no_fail_on_findings);
    Ok(AnalyzeResult {
        documents,
        errors,
        has_errors,
    })
}

fn analyze_source(
    pipeline: &AnalysisPipeline,
    source: &DocumentSource,
    args: &AnalyzeArgs,
    batch: bool,
) -> Result<DocumentSummary> {
    let text = match &source.text {
        Some(text) => text.clone(),
        None => {
            let path = source.path.as_deref().context("source has no path")?;
            read_text_file(path)?
        }
    };

    let analyzed = analyze_text(pipeline, &source.name, &text)?;

    let json_report = if args.json {
        let dir = report_dir(args, source, batch);
        Some(write_report_json(
            &dir,
            &analyzed.canonical_text,
            &analyzed.report,
        )?)
    } else {
        None
    };

    let AnalyzedDocument {
        name,
        sentence_count,
        paragraph_count,
        report,
        ..
    } = analyzed;
    Ok(DocumentSummary {
        name,
        sentence_count,
        paragraph_count,
        report,
        json_report,
    })
}

fn analysis_options(args: &AnalyzeArgs) -> AnalysisOptions {
    AnalysisOptions::new()
        .with_run_on_words(args.run_on_words)
        .with_max_sentence_words(args.max_sentence_words)
        .with_register(match args.register {
            RegisterArg::Formal => Register::Formal,
            RegisterArg::Neutral => Register::Neutral,
            RegisterArg::Casual => Register::Casual,
        })
}

fn collect_sources(args: &AnalyzeArgs) -> Result<Vec<DocumentSource>> {
    if let Some(text) = &args.text {
        return Ok(vec![DocumentSource {
            name: "inline text".to_string(),
            path: None,
            text: Some(text.clone()),
        }]);
    }

    let path = args.path.as_deref().context("no input path")?;
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(vec![DocumentSource {
            name: "stdin".to_string(),
            path: None,
            text: Some(text),
        }]);
    }

    if path.is_dir() {
        let files = list_documents(path)?;
        return Ok(files.into_iter().map(file_source).collect());
    }

    if !path.is_file() {
        bail!("{} is not a file or directory", path.display());
    }
    Ok(vec![file_source(path.to_path_buf())])
}

fn file_source(path: PathBuf) -> DocumentSource {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();
    DocumentSource {
        name,
        path: Some(path),
        text: None,
    }
}

fn report_dir(args: &AnalyzeArgs, source: &DocumentSource, batch: bool) -> PathBuf {
    let base = args.output_dir.clone().unwrap_or_else(|| {
        match (&args.path, &source.path) {
            (Some(input), _) if input.is_dir() => input.join("output"),
            (_, Some(file)) => file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            _ => PathBuf::from("."),
        }
    });
    if batch {
        base.join(document_stem(source))
    } else {
        base
    }
}

fn document_stem(source: &DocumentSource) -> String {
    source
        .path
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .unwrap_or("document")
        .to_string()
}
