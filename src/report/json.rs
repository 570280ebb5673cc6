use std::io::Write;

use crate::error::HarnessError;
use crate::harness::Report;

/// Write the report as one JSON document followed by a newline:
/// `{"algorithms":[{"name","results","summary"}],"status":"OK"|"FAIL"}`
pub fn write_json<W: Write>(report: &Report, out: &mut W) -> Result<(), HarnessError> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{AlgorithmReport, ResultRecord};
    use serde_json::{json, Value};

    #[test]
    fn test_json_document() {
        let report = Report::new(
            vec![AlgorithmReport::new(
                "merge",
                vec![
                    ResultRecord { dataset: "single", passed: true },
                    ResultRecord { dataset: "sawtooth", passed: false },
                ],
            )],
            false,
        );

        let mut out = Vec::new();
        write_json(&report, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            json!({
                "algorithms": [{
                    "name": "merge",
                    "results": [
                        {"dataset": "single", "passed": true},
                        {"dataset": "sawtooth", "passed": false}
                    ],
                    "summary": {"passed": 1, "total": 2}
                }],
                "status": "FAIL"
            })
        );
    }

    #[test]
    fn test_json_status_ok() {
        let report = Report::new(
            vec![AlgorithmReport::new(
                "bubble",
                vec![ResultRecord { dataset: "empty", passed: true }],
            )],
            false,
        );

        let mut out = Vec::new();
        write_json(&report, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "OK");
    }
}
