//! One-shot analysis commands.

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::analysis::{AnalysisRequest, SignalDetector};
use crate::cli::{AnalysisOptions, build_session};
use crate::config::{Config, OutputFormat};
use crate::report::{self, TextReport};
use crate::samples;
use crate::session::AnalysisSession;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// News text, headline or claim. Read from stdin when omitted.
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Source URL of the article
    #[arg(short, long)]
    pub url: Option<String>,

    #[command(flatten)]
    pub options: AnalysisOptions,
}

/// Analyze a single piece of text and print the result.
pub async fn run_analyze(args: &AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let text = load_text(args)?;
    let mut request = AnalysisRequest::new(text);
    if let Some(url) = &args.url {
        request = request.with_url(url.as_str());
    }

    let session = build_session(config);
    analyze_and_print(&session, request, args.options.verbose, config).await
}

/// List the sample headlines, or analyze each of them.
pub async fn run_samples(run: bool, verbose: bool, config: &Config) -> anyhow::Result<()> {
    if !run {
        println!("{}", report::render_samples(config.output.format)?);
        return Ok(());
    }

    let session = build_session(config);
    for (i, text) in samples::SAMPLE_TEXTS.iter().enumerate() {
        if config.output.format == OutputFormat::Text {
            println!("\n[{}] {}", i + 1, text);
        }
        analyze_and_print(&session, AnalysisRequest::new(*text), verbose, config).await?;
        session.reset();
    }
    Ok(())
}

pub(crate) async fn analyze_and_print(
    session: &AnalysisSession,
    request: AnalysisRequest,
    verbose: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let notice = session.submit(request.clone()).await?;
    if notice.is_failure() {
        anyhow::bail!("{}: {}", notice.title, notice.description);
    }

    let result = session
        .result()
        .context("analysis finished without a result")?;

    let text_output = config.output.format == OutputFormat::Text;
    if verbose && text_output {
        let signals = SignalDetector::new().detect(&request.text);
        print!(
            "\n{}",
            TextReport::new(config.output.color).render_signals(&signals)
        );
    }

    let rendered = report::render(
        config.output.format,
        config.output.color,
        &request,
        &result,
    )?;
    println!("{}", rendered);
    Ok(())
}

/// Text from the argument, the file, or stdin (in that order).
fn load_text(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No text given: pass it as an argument, with --file, or on stdin");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}
