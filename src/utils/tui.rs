//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI: the step trace shown with
//! `--visualize` and the `--list` listing.

use std::io::{self, Write};

use terminal_size::{terminal_size, Width};

use crate::datasets::DatasetSuite;
use crate::registry::Algorithm;
use crate::sorting::{Mark, Step, StepKind, StepObserver};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

fn marker(mark: Option<Mark>) -> char {
    match mark {
        Some(Mark::Swapping) => '~',
        Some(Mark::Comparing) => '?',
        Some(Mark::Minimum) => '*',
        Some(Mark::Current) => '>',
        Some(Mark::Sorted) => '=',
        None => ' ',
    }
}

fn kind_label(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Compare => "compare",
        StepKind::Swap => "swap",
        StepKind::Write => "write",
        StepKind::PassComplete => "pass",
        StepKind::Finished => "done",
    }
}

/// Step observer that renders a textual trace.
///
/// Compare, swap and write steps print one line with the marked array;
/// pass boundaries and the final state also print a horizontal bar chart.
///
/// Markers: `?` comparing, `~` swapping, `>` current, `*` minimum, `=` sorted.
pub struct TraceObserver<W: Write> {
    out: W,
    width: usize,
    counts: StepCounts,
    error: Option<io::Error>,
}

/// Running totals for the algorithm currently traced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounts {
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
    pub passes: usize,
}

impl StepCounts {
    fn record(&mut self, kind: StepKind) {
        match kind {
            StepKind::Compare => self.comparisons += 1,
            StepKind::Swap => self.swaps += 1,
            StepKind::Write => self.writes += 1,
            StepKind::PassComplete => self.passes += 1,
            StepKind::Finished => {}
        }
    }

    fn line(&self) -> String {
        let mut line = format!(
            "Comparisons: {}  Swaps: {}  Passes: {}",
            self.comparisons, self.swaps, self.passes
        );
        // Only merge sort writes values back instead of swapping
        if self.writes > 0 {
            line.push_str(&format!("  Writes: {}", self.writes));
        }
        line
    }
}

impl<W: Write> TraceObserver<W> {
    /// Trace into `out`, sizing bars to the terminal
    pub fn new(out: W) -> Self {
        Self::with_width(out, get_term_width())
    }

    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(40),
            counts: StepCounts::default(),
            error: None,
        }
    }

    /// Totals since the last [`StepObserver::begin`]
    pub fn counts(&self) -> StepCounts {
        self.counts
    }

    /// Surface the first write error, if any, and hand back the writer
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }

    fn write_with(&mut self, f: impl FnOnce(&mut W, usize) -> io::Result<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = f(&mut self.out, self.width) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> StepObserver for TraceObserver<W> {
    fn begin(&mut self, algorithm: &str, dataset: &str) {
        self.counts = StepCounts::default();
        self.write_with(|out, width| {
            let rule = "=".repeat(width.min(50));
            writeln!(out)?;
            writeln!(out, "{}", rule)?;
            writeln!(
                out,
                "{}",
                truncate(&format!("Testing {} on {} dataset", algorithm, dataset), width)
            )?;
            writeln!(out, "{}", rule)
        });
    }

    fn on_step(&mut self, step: &Step<'_>) {
        self.counts.record(step.kind);
        let counts = self.counts;
        self.write_with(|out, width| {
            let cells: Vec<String> = step
                .array
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{}{}", marker(step.highlights.classify(i)), v))
                .collect();
            let line = format!(
                "{:>7} {:>5.1}%  [{}]",
                kind_label(step.kind),
                step.progress * 100.0,
                cells.join(" ")
            );
            writeln!(out, "{}", truncate(&line, width))?;

            if matches!(step.kind, StepKind::PassComplete | StepKind::Finished) {
                write_bars(out, step, width)?;
                let label = if step.kind == StepKind::Finished { "Final" } else { "So far" };
                writeln!(out, "  {}: {}", label, counts.line())?;
            }
            Ok(())
        });
    }
}

/// Horizontal bar chart, one row per index, scaled between min and max
fn write_bars<W: Write>(out: &mut W, step: &Step<'_>, width: usize) -> io::Result<()> {
    let (Some(&min), Some(&max)) = (step.array.iter().min(), step.array.iter().max()) else {
        return Ok(());
    };

    // "  > 123 -9223372036854775808 |"
    let label_width = 32;
    let bar_width = width.saturating_sub(label_width).max(8);
    let span = (max as i128 - min as i128).max(1) as f64;

    for (i, &value) in step.array.iter().enumerate() {
        let scaled = ((value as i128 - min as i128) as f64 / span * (bar_width - 1) as f64).round();
        let len = scaled as usize + 1;
        writeln!(
            out,
            "  {} {:>3} {:>20} |{}",
            marker(step.highlights.classify(i)),
            i,
            value,
            "#".repeat(len)
        )?;
    }

    Ok(())
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Sort Check ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the algorithms and datasets available to a run
pub fn print_available(suite: &DatasetSuite) {
    println!("Available algorithms:");
    println!();
    for algorithm in Algorithm::ALL {
        println!("  {:<12} - {}", algorithm.name(), algorithm.description());
    }
    println!("  {:<12} - every algorithm above", "all");
    println!();

    let term_width = get_term_width();
    println!("Datasets ({}):", suite.len());
    println!();
    for dataset in suite.iter() {
        let line = format!("  {:<22} {:?}", dataset.name, dataset.values);
        println!("{}", truncate(&line, term_width));
    }
}
