//! The stdin/stdout line protocol, reproduced bit-exact.
//!
//! Request shape:
//!
//! ```text
//! <classpath entry count>
//! <classpath path>            (count times)
//! <unit name>                 (repeating until an empty line or EOF)
//! <unit line count>
//! <source line>               (line count times, joined with '\n')
//! ```
//!
//! Response shape, mirrored per unit in input order:
//!
//! ```text
//! <unit name>
//! <output line count>
//! <output line>               (line count times)
//! ```
//!
//! Trailing empty lines of a unit's output are dropped before counting.
//! Units that produced no output (fatal per-unit errors) are omitted from
//! the response entirely.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::Result;

use super::UnitResult;

/// One unit as it arrives over the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedUnit {
    /// Relative unit name (a path below the staging root)
    pub name: String,
    /// Source text, input lines joined with `\n`
    pub source: String,
}

/// A full batch request: classpath plus units, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    /// Classpath entries for the front-end
    pub classpath: Vec<PathBuf>,
    /// The units to remap
    pub units: Vec<StagedUnit>,
}

/// Read one batch request from `reader`.
///
/// # Errors
///
/// [`crate::Error::Protocol`] for a missing or non-numeric count line or
/// truncated input; [`crate::Error::FileError`] for underlying I/O failures.
pub fn read_request<R: BufRead>(reader: &mut R) -> Result<BatchRequest> {
    let mut request = BatchRequest::default();

    let count = match read_line(reader)? {
        Some(line) => parse_count(&line, "classpath entry count")?,
        None => return Ok(request),
    };
    for index in 0..count {
        let Some(path) = read_line(reader)? else {
            return Err(protocol_error!(
                "expected {} classpath entries, got {}",
                count,
                index
            ));
        };
        request.classpath.push(PathBuf::from(path));
    }

    loop {
        let name = match read_line(reader)? {
            None => break,
            Some(line) if line.is_empty() => break,
            Some(line) => line,
        };
        let Some(count_line) = read_line(reader)? else {
            return Err(protocol_error!("missing line count for unit {}", name));
        };
        let count = parse_count(&count_line, "unit line count")?;
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(line) = read_line(reader)? else {
                return Err(protocol_error!("truncated source for unit {}", name));
            };
            lines.push(line);
        }
        request.units.push(StagedUnit {
            name,
            source: lines.join("\n"),
        });
    }

    Ok(request)
}

/// Write the response for all units that produced output, in order.
///
/// # Errors
///
/// [`crate::Error::FileError`] for underlying I/O failures.
pub fn write_response<W: Write>(writer: &mut W, units: &[UnitResult]) -> Result<()> {
    for unit in units {
        let Some(text) = &unit.text else {
            continue;
        };
        let mut lines: Vec<&str> = text.split('\n').collect();
        while lines.last() == Some(&"") {
            lines.pop();
        }
        writeln!(writer, "{}", unit.name)?;
        writeln!(writer, "{}", lines.len())?;
        for line in lines {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}

/// Read one line, `None` at EOF, line terminator stripped.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn parse_count(line: &str, what: &str) -> Result<usize> {
    line.trim()
        .parse::<usize>()
        .map_err(|_| protocol_error!("invalid {}: {:?}", what, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn result(name: &str, text: &str) -> UnitResult {
        UnitResult {
            name: name.to_string(),
            text: Some(text.to_string()),
            diagnostics: Vec::new(),
            failed: false,
        }
    }

    #[test]
    fn test_read_request() {
        let input = "2\n/lib/a.jar\n/lib/b.jar\na/A.java\n3\nclass A {\n  int f;\n}\n\n";
        let request = read_request(&mut Cursor::new(input)).unwrap();
        assert_eq!(request.classpath.len(), 2);
        assert_eq!(request.units.len(), 1);
        assert_eq!(request.units[0].name, "a/A.java");
        assert_eq!(request.units[0].source, "class A {\n  int f;\n}");
    }

    #[test]
    fn test_read_request_multiple_units_until_eof() {
        let input = "0\nA.java\n1\nclass A {}\nB.java\n1\nclass B {}\n";
        let request = read_request(&mut Cursor::new(input)).unwrap();
        assert_eq!(request.units.len(), 2);
        assert_eq!(request.units[1].source, "class B {}");
    }

    #[test]
    fn test_read_request_rejects_bad_count() {
        let err = read_request(&mut Cursor::new("zero\n")).unwrap_err();
        assert!(matches!(err, crate::Error::Protocol { .. }));
    }

    #[test]
    fn test_read_request_rejects_truncated_unit() {
        let err = read_request(&mut Cursor::new("0\nA.java\n5\nclass A {}\n")).unwrap_err();
        assert!(matches!(err, crate::Error::Protocol { .. }));
    }

    #[test]
    fn test_write_response_drops_trailing_blank_lines() {
        let mut out = Vec::new();
        write_response(&mut out, &[result("A.java", "class A {}\n\n")]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A.java\n1\nclass A {}\n"
        );
    }

    #[test]
    fn test_write_response_omits_failed_units_without_text() {
        let mut out = Vec::new();
        let failed = UnitResult {
            name: "B.java".to_string(),
            text: None,
            diagnostics: Vec::new(),
            failed: true,
        };
        write_response(&mut out, &[result("A.java", "class A {}"), failed]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("A.java"));
        assert!(!text.contains("B.java"));
    }

    #[test]
    fn test_round_trip() {
        let input = "1\n/cp\nX.java\n2\nline one\nline two\n\n";
        let request = read_request(&mut Cursor::new(input)).unwrap();
        let mut out = Vec::new();
        write_response(&mut out, &[result("X.java", &request.units[0].source)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "X.java\n2\nline one\nline two\n"
        );
    }
}
