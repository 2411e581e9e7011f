use crate::error::{LineError, RequestLoadError};
use fracdraw_types::{PatternKind, Request, bounds};

/// Parses every line of a request file.
///
/// Lines are numbered from 1. A trailing newline does not produce an extra line, and
/// `\r\n` endings are accepted, including a final `\r` with no `\n` after it. An empty
/// input yields no requests.
pub fn parse_requests(contents: &str) -> Result<Vec<Request>, RequestLoadError> {
    let contents = match contents.strip_suffix('\r') {
        Some(rest) if !rest.ends_with('\n') => rest,
        _ => contents,
    };

    contents
        .lines()
        .enumerate()
        .map(|(i, line)| {
            parse_line(line).map_err(|source| RequestLoadError::Line {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Parses one `kind,depth` line.
pub fn parse_line(line: &str) -> Result<Request, LineError> {
    if line.is_empty() {
        return Err(LineError::Empty);
    }

    let fields: Vec<&str> = line.split(',').collect();
    let mut kind = None;
    let mut depth = None;

    for (i, field) in fields.iter().enumerate() {
        let value = single_digit(field)?;
        match i {
            0 => {
                let k =
                    PatternKind::from_index(value).ok_or(LineError::KindOutOfRange { value })?;
                kind = Some(k);
            }
            1 => {
                if !bounds::depth_in_range(value) {
                    return Err(LineError::DepthOutOfRange { value });
                }
                depth = Some(value);
            }
            _ => {
                return Err(LineError::FieldCount {
                    found: fields.len(),
                });
            }
        }
    }

    match (kind, depth) {
        (Some(kind), Some(depth)) => Ok(Request::new(kind, depth)),
        _ => Err(LineError::FieldCount {
            found: fields.len(),
        }),
    }
}

fn single_digit(field: &str) -> Result<u32, LineError> {
    let mut chars = field.chars();
    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
        (Some(d), None) => Ok(d),
        _ => Err(LineError::MalformedField {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_valid_line() {
        assert_eq!(parse_line("1,3"), Ok(Request::new(PatternKind::Carpet, 3)));
        assert_eq!(parse_line("3,6"), Ok(Request::new(PatternKind::Vicsek, 6)));
    }

    #[test]
    fn rejects_empty_line() {
        assert_eq!(parse_line(""), Err(LineError::Empty));
    }

    #[test]
    fn rejects_whitespace_around_fields() {
        assert_eq!(
            parse_line("1, 2"),
            Err(LineError::MalformedField {
                field: " 2".to_string()
            })
        );
        assert!(matches!(parse_line(" 1,2"), Err(LineError::MalformedField { .. })));
        assert!(matches!(parse_line("1,2 "), Err(LineError::MalformedField { .. })));
    }

    #[test]
    fn rejects_multi_digit_and_signed_fields() {
        assert!(matches!(parse_line("01,2"), Err(LineError::MalformedField { .. })));
        assert!(matches!(parse_line("1,-2"), Err(LineError::MalformedField { .. })));
        assert!(matches!(parse_line("a,2"), Err(LineError::MalformedField { .. })));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digit two.
        assert!(matches!(parse_line("1,\u{0662}"), Err(LineError::MalformedField { .. })));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(parse_line("1"), Err(LineError::FieldCount { found: 1 }));
        assert_eq!(parse_line("1,2,3"), Err(LineError::FieldCount { found: 3 }));
    }

    #[test]
    fn trailing_comma_is_an_empty_field() {
        assert_eq!(
            parse_line("1,"),
            Err(LineError::MalformedField {
                field: String::new()
            })
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(parse_line("0,2"), Err(LineError::KindOutOfRange { value: 0 }));
        assert_eq!(parse_line("4,2"), Err(LineError::KindOutOfRange { value: 4 }));
        assert_eq!(parse_line("2,0"), Err(LineError::DepthOutOfRange { value: 0 }));
        assert_eq!(parse_line("2,7"), Err(LineError::DepthOutOfRange { value: 7 }));
    }

    #[test]
    fn kind_is_checked_before_depth() {
        assert_eq!(parse_line("9,9"), Err(LineError::KindOutOfRange { value: 9 }));
    }

    #[test]
    fn parse_requests_keeps_file_order() {
        let reqs = parse_requests("1,1\n2,1\n3,2\n").unwrap();
        assert_eq!(
            reqs,
            vec![
                Request::new(PatternKind::Carpet, 1),
                Request::new(PatternKind::Triangle, 1),
                Request::new(PatternKind::Vicsek, 2),
            ]
        );
    }

    #[test]
    fn parse_requests_accepts_crlf() {
        let reqs = parse_requests("1,1\r\n2,2\r\n").unwrap();
        assert_eq!(reqs.len(), 2);
    }

    #[test]
    fn final_carriage_return_ends_the_last_line() {
        assert_eq!(
            parse_requests("1,2\r"),
            Ok(vec![Request::new(PatternKind::Carpet, 2)])
        );
        assert_eq!(parse_requests("3,1\r\n1,2\r").unwrap().len(), 2);
    }

    #[test]
    fn stray_carriage_return_on_its_own_line_is_rejected() {
        let err = parse_requests("1,2\n\r").unwrap_err();
        assert_eq!(
            err,
            RequestLoadError::Line {
                line: 2,
                source: LineError::MalformedField {
                    field: "\r".to_string()
                }
            }
        );
    }

    #[test]
    fn parse_requests_empty_input() {
        assert_eq!(parse_requests(""), Ok(vec![]));
    }

    #[test]
    fn blank_line_in_the_middle_fails_with_its_number() {
        let err = parse_requests("1,1\n\n2,2\n").unwrap_err();
        assert_eq!(
            err,
            RequestLoadError::Line {
                line: 2,
                source: LineError::Empty
            }
        );
    }
}
