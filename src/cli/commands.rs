//! Command implementation for the requery CLI.

use std::io::{self, Write};

use log::info;

use crate::cli::args::{OutputFormat, RequeryArgs};
use crate::cli::output::{HumanReporter, output_report};
use crate::error::Result;
use crate::session::{
    BuiltinStopWords, FeedbackCollector, FeedbackSession, FileStopWords,
    GoogleCustomSearchProvider, JsonFileProvider, ResultProvider, SilentObserver, StopWordSource,
    TerminalFeedbackCollector, UrlStopWords,
};

/// Execute the CLI: run one feedback session from the parsed arguments.
pub fn execute_command(args: RequeryArgs) -> Result<()> {
    let config = args.session_config()?;
    info!(
        "Strategy {}, target precision {}",
        config.augmentation.strategy, config.target_precision
    );

    let stop_words = stop_word_source(&args).load()?;
    let provider = result_provider(&args)?;
    let collector = feedback_collector(&args);

    let mut session = FeedbackSession::new(config, stop_words, provider, collector)?;

    let report = match args.output_format {
        OutputFormat::Human => {
            let mut reporter =
                HumanReporter::new(io::stdout(), &args.api_key, &args.engine_id, args.precision);
            session.run_with_observer(&args.query, &mut reporter)?
        }
        OutputFormat::Json => session.run_with_observer(&args.query, &mut SilentObserver)?,
    };

    let mut stdout = io::stdout().lock();
    output_report(&mut stdout, &report, &args)?;
    stdout.flush()?;
    Ok(())
}

fn stop_word_source(args: &RequeryArgs) -> Box<dyn StopWordSource> {
    match (&args.stop_words, &args.stop_words_url) {
        (Some(path), _) => Box::new(FileStopWords::new(path)),
        (None, Some(url)) => Box::new(UrlStopWords::new(url.clone())),
        (None, None) => Box::new(BuiltinStopWords),
    }
}

fn result_provider(args: &RequeryArgs) -> Result<Box<dyn ResultProvider>> {
    match &args.results_file {
        Some(path) => Ok(Box::new(JsonFileProvider::new(path))),
        None => Ok(Box::new(GoogleCustomSearchProvider::new(
            args.api_key.clone(),
            args.engine_id.clone(),
        )?)),
    }
}

/// Prompts go to stdout for the human transcript and to stderr when stdout
/// carries JSON.
fn feedback_collector(args: &RequeryArgs) -> Box<dyn FeedbackCollector> {
    let input = io::BufReader::new(io::stdin());
    match args.output_format {
        OutputFormat::Human => Box::new(TerminalFeedbackCollector::new(input, io::stdout())),
        OutputFormat::Json => Box::new(TerminalFeedbackCollector::new(input, io::stderr())),
    }
}
