//! Output formatting for the CLI.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, RequeryArgs};
use crate::error::Result;
use crate::session::{IterationReport, SessionObserver, SessionOutcome, SessionReport};

/// Prints the interactive transcript: parameters before every round, a
/// feedback summary after it, and the closing message.
pub struct HumanReporter<W: Write> {
    out: W,
    api_key: String,
    engine_id: String,
    target_precision: f64,
}

impl<W: Write> HumanReporter<W> {
    pub fn new(out: W, api_key: &str, engine_id: &str, target_precision: f64) -> Self {
        HumanReporter {
            out,
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
            target_precision,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SessionObserver for HumanReporter<W> {
    fn attempt_started(&mut self, _attempt: usize, query: &str) -> Result<()> {
        writeln!(self.out, "Parameters:")?;
        writeln!(self.out, "Client key  = {}", self.api_key)?;
        writeln!(self.out, "Engine key  = {}", self.engine_id)?;
        writeln!(self.out, "Query  = {query}")?;
        writeln!(self.out, "Precision  = {}", self.target_precision)?;
        Ok(())
    }

    fn iteration_finished(
        &mut self,
        report: &IterationReport,
        outcome: Option<SessionOutcome>,
    ) -> Result<()> {
        writeln!(self.out, "FEEDBACK SUMMARY")?;
        writeln!(self.out, "Query {}", report.query)?;
        writeln!(self.out, "Precision {}", report.precision)?;

        match outcome {
            Some(SessionOutcome::TargetReached) | Some(SessionOutcome::PrecisionZero) => {}
            _ => writeln!(
                self.out,
                "Still below the desired precision of {}",
                self.target_precision
            )?,
        }

        if outcome.is_none() {
            writeln!(self.out, "Indexing results ....")?;
            writeln!(self.out, "Augmenting by {}", report.added_terms.join(" "))?;
        }
        Ok(())
    }

    fn session_finished(&mut self, report: &SessionReport) -> Result<()> {
        writeln!(self.out, "{}", report.outcome)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Output the final report in the requested format.
///
/// The human transcript is written while the session runs, so only JSON
/// produces output here.
pub fn output_report<W: Write>(
    out: &mut W,
    report: &SessionReport,
    args: &RequeryArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => Ok(()),
        OutputFormat::Json => output_json(out, report, args.pretty),
    }
}

/// Output a value as JSON.
pub fn output_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn iteration(added_terms: &[&str]) -> IterationReport {
        IterationReport {
            attempt: 1,
            query: "per se".to_string(),
            precision: 0.3,
            relevant: 3,
            total: 10,
            added_terms: added_terms.iter().map(|s| s.to_string()).collect(),
            started_at: Utc::now(),
        }
    }

    fn transcript(outcome: Option<SessionOutcome>, added_terms: &[&str]) -> String {
        let mut reporter = HumanReporter::new(Vec::new(), "key", "cx", 0.9);
        reporter.attempt_started(1, "per se").unwrap();
        reporter.iteration_finished(&iteration(added_terms), outcome).unwrap();
        if let Some(outcome) = outcome {
            let report = SessionReport {
                outcome,
                final_query: "per se".to_string(),
                iterations: vec![iteration(added_terms)],
            };
            reporter.session_finished(&report).unwrap();
        }
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_continuing_round() {
        let text = transcript(None, &["latin", "phrase"]);

        assert!(text.starts_with(
            "Parameters:\nClient key  = key\nEngine key  = cx\nQuery  = per se\n"
        ));
        assert!(text.contains("FEEDBACK SUMMARY\nQuery per se\nPrecision 0.3\n"));
        assert!(text.contains("Still below the desired precision of 0.9\n"));
        assert!(text.ends_with("Augmenting by latin phrase\n"));
    }

    #[test]
    fn test_final_messages() {
        let reached = transcript(Some(SessionOutcome::TargetReached), &[]);
        assert!(reached.ends_with("Desired precision reached, done\n"));
        assert!(!reached.contains("Still below"));

        let stuck = transcript(Some(SessionOutcome::NoNewTerms), &[]);
        assert!(stuck.contains("Still below the desired precision of 0.9\n"));
        assert!(stuck.ends_with("Below desired precision, but can no longer augment the query\n"));
    }

    #[test]
    fn test_output_json() {
        let mut out = Vec::new();
        output_json(&mut out, &iteration(&["latin"]), false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["query"], "per se");
        assert_eq!(value["added_terms"][0], "latin");
    }
}
