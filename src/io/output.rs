//! Report output: JSON for machine consumers, colored terminal summary for
//! humans.

use crate::core::{RiskReport, Severity};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RiskReport) -> anyhow::Result<()> {
        let score = format!("{}/100", report.overall_score);
        let band = report.risk_band.level;
        writeln!(self.writer, "{}", "LEGACY RISK ANALYSIS".bold())?;
        writeln!(self.writer, "────────────────────────────")?;
        writeln!(
            self.writer,
            "Risk score: {} ({})",
            colorize_score(&score, band),
            report.risk_band.description
        )?;
        writeln!(
            self.writer,
            "Files analyzed: {} | Total lines: {}",
            report.analyzed_files, report.total_lines
        )?;
        writeln!(
            self.writer,
            "Functions: avg {} chars, max {} chars, {} god functions",
            report.complexity_metrics.avg_function_length,
            report.complexity_metrics.max_function_length,
            report.complexity_metrics.god_functions
        )?;
        writeln!(self.writer)?;

        if !report.top_findings.is_empty() {
            writeln!(self.writer, "{}", "TOP FINDINGS".bold())?;
            for (i, finding) in report.top_findings.iter().enumerate() {
                writeln!(
                    self.writer,
                    "{}. [{}] {} - {}",
                    i + 1,
                    severity_label(finding.severity),
                    finding.pattern,
                    finding.impact
                )?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "{}", "PATTERNS".bold())?;
        for pattern in &report.patterns_detected {
            writeln!(
                self.writer,
                "  [{}] {} x{} ({})",
                severity_label(pattern.severity),
                pattern.name,
                pattern.occurrences,
                pattern.category.display_name()
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "RECOMMENDATIONS".bold())?;
        for rec in &report.recommendations {
            writeln!(self.writer, "  {rec}")?;
        }

        if !report.resurrection_routes.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "SUGGESTED ROUTES".bold())?;
            for route in &report.resurrection_routes {
                writeln!(
                    self.writer,
                    "  {}. {:?} ({:?} confidence): {}",
                    route.priority, route.chamber, route.confidence, route.reason
                )?;
            }
        }

        Ok(())
    }
}

fn colorize_score(score: &str, band: Severity) -> ColoredString {
    match band {
        Severity::Low => score.green(),
        Severity::Medium => score.yellow(),
        Severity::High => score.red(),
        Severity::Critical => score.red().bold(),
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Low => "LOW".green(),
        Severity::Medium => "MEDIUM".yellow(),
        Severity::High => "HIGH".red(),
        Severity::Critical => "CRITICAL".red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_artifacts;
    use crate::core::SourceArtifact;

    #[test]
    fn json_writer_round_trips_report() {
        let report = analyze_artifacts(&[SourceArtifact::new("a.js", "var x = 1;", "js")]);
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(&report).unwrap();
        let parsed: RiskReport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn terminal_writer_mentions_score_and_patterns() {
        let report = analyze_artifacts(&[SourceArtifact::new("a.js", "var x = 1;", "js")]);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf).write_report(&report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("LEGACY RISK ANALYSIS"));
        assert!(text.contains("var Declarations"));
    }
}
