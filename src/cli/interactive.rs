//! Interactive prompt: the terminal version of the analysis form.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::analysis::AnalysisRequest;
use crate::cli::analyze::analyze_and_print;
use crate::cli::build_session;
use crate::config::Config;
use crate::error::SessionError;
use crate::report;
use crate::samples;

const TEXT_PROMPT: &str = "news> ";
const URL_PROMPT: &str = "source url (optional)> ";

/// What the user typed at the text prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Text(String),
    Sample(&'static str),
    ListSamples,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return Input::Text(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit" | "exit"), None) => Input::Quit,
        (Some("help" | "h"), None) => Input::Help,
        (Some("samples"), None) => Input::ListSamples,
        (Some("sample"), Some(n)) => match n.parse().ok().and_then(samples::get) {
            Some(text) => Input::Sample(text),
            None => Input::Unknown(trimmed.to_string()),
        },
        _ => Input::Unknown(trimmed.to_string()),
    }
}

fn print_help() {
    println!("Paste news article text, a headline or a claim, then press Enter.");
    println!("Commands:");
    println!("  :samples      list the sample headlines");
    println!("  :sample N     analyze sample N");
    println!("  :help         show this help");
    println!("  :quit         leave");
}

/// Run the prompt loop until the user quits or closes stdin.
pub async fn run_interactive(verbose: bool, config: &Config) -> anyhow::Result<()> {
    let session = build_session(config);
    let mut editor = DefaultEditor::new()?;

    println!("Truth Sifter | Misinformation Detection (demo)");
    println!("Paste news content or claims to analyze. Type :help for commands.");
    println!();

    loop {
        let line = match editor.readline(TEXT_PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let text = match parse_input(&line) {
            Input::Text(text) => text,
            Input::Sample(text) => {
                println!("{}", text);
                text.to_string()
            }
            Input::ListSamples => {
                println!("{}", report::render_samples(config.output.format)?);
                continue;
            }
            Input::Help => {
                print_help();
                continue;
            }
            Input::Quit => break,
            Input::Empty => continue,
            Input::Unknown(command) => {
                println!("Unknown command: {} (try :help)", command);
                continue;
            }
        };
        let _ = editor.add_history_entry(line.as_str());

        let url = match editor.readline(URL_PROMPT) {
            Ok(url) => url,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => String::new(),
            Err(e) => return Err(e.into()),
        };

        let request = AnalysisRequest::new(text).with_url(url);
        eprintln!("Analyzing...");

        match analyze_and_print(&session, request, verbose, config).await {
            Ok(()) => {}
            Err(e) => match e.downcast_ref::<SessionError>() {
                Some(SessionError::Rejected(reason)) => eprintln!("{}", reason),
                _ => eprintln!("{}", e),
            },
        }

        // "Analyze another article"
        session.reset();
        println!();
    }

    Ok(())
}
