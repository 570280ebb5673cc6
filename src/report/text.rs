use std::io::{self, Write};

use crate::harness::{AlgorithmReport, Report};

/// Write the line-oriented report.
///
/// ```text
/// ALGO=bubble RESULT=PASS
/// ...
/// SUMMARY ALGO=bubble PASSED=36 TOTAL=36
/// ```
pub fn write_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    for algo in &report.algorithms {
        for record in &algo.results {
            writeln!(
                out,
                "ALGO={} RESULT={}",
                algo.name,
                if record.passed { "PASS" } else { "FAIL" }
            )?;
        }
    }

    for algo in &report.algorithms {
        write_summary(algo, out)?;
    }

    Ok(())
}

fn write_summary<W: Write>(algo: &AlgorithmReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "SUMMARY ALGO={} PASSED={} TOTAL={}",
        algo.name, algo.summary.passed, algo.summary.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{AlgorithmReport, ResultRecord};

    #[test]
    fn test_text_layout() {
        let report = Report::new(
            vec![
                AlgorithmReport::new(
                    "bubble",
                    vec![
                        ResultRecord { dataset: "empty", passed: true },
                        ResultRecord { dataset: "reverse", passed: false },
                    ],
                ),
                AlgorithmReport::new("quick", vec![ResultRecord { dataset: "empty", passed: true }]),
            ],
            false,
        );

        let mut out = Vec::new();
        write_text(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "ALGO=bubble RESULT=PASS\n\
             ALGO=bubble RESULT=FAIL\n\
             ALGO=quick RESULT=PASS\n\
             SUMMARY ALGO=bubble PASSED=1 TOTAL=2\n\
             SUMMARY ALGO=quick PASSED=1 TOTAL=1\n"
        );
    }
}
