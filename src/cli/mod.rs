//! Command line interface.
//!
//! ```text
//! truth-sifter analyze "BREAKING: shocking news" --url https://example.com
//! truth-sifter samples --run --no-delay
//! truth-sifter                      # interactive prompt
//! ```

mod analyze;
mod interactive;

use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

pub use analyze::{AnalyzeArgs, run_analyze, run_samples};
pub use interactive::run_interactive;

use crate::analysis::MockAnalyzer;
use crate::config::{Config, OutputFormat};
use crate::session::AnalysisSession;
use crate::validation::RequestValidator;

#[derive(Parser, Debug)]
#[command(
    name = "truth-sifter",
    version,
    about = "Score news text for signs of misinformation (demo analyzer)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a piece of text (argument, file or stdin)
    Analyze(AnalyzeArgs),

    /// List the sample headlines
    Samples {
        /// Analyze every sample instead of listing them
        #[arg(long)]
        run: bool,

        #[command(flatten)]
        options: AnalysisOptions,
    },

    /// Prompt for articles until interrupted (default)
    Interactive {
        #[command(flatten)]
        options: AnalysisOptions,
    },
}

/// Flags shared by every command that runs analyses.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Seed the random draws for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the simulated analysis latency
    #[arg(long)]
    pub no_delay: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also list the phrases that triggered each signal
    #[arg(short, long)]
    pub verbose: bool,
}

impl AnalysisOptions {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.analysis.seed = Some(seed);
        }
        if self.no_delay {
            config.analysis.delay = Duration::ZERO;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

/// Build a session wired to the mock analyzer.
pub fn build_session(config: &Config) -> AnalysisSession {
    let analyzer = MockAnalyzer::new(&config.analysis);
    AnalysisSession::new(Arc::new(analyzer), RequestValidator::new())
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli, mut config: Config) -> anyhow::Result<()> {
    if cli.no_color {
        config.output.color = false;
    }

    match cli.command {
        Some(Command::Analyze(args)) => {
            args.options.apply(&mut config);
            run_analyze(&args, &config).await
        }
        Some(Command::Samples { run, options }) => {
            options.apply(&mut config);
            run_samples(run, options.verbose, &config).await
        }
        Some(Command::Interactive { options }) => {
            options.apply(&mut config);
            run_interactive(options.verbose, &config).await
        }
        None => run_interactive(false, &config).await,
    }
}
