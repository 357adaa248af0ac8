/// Splits a block payload into lines.
///
/// Only the payload as a whole is trimmed; whitespace inside each line is kept.
/// A trailing `\r` is dropped from every line so CRLF payloads read the same as
/// LF ones. An empty or whitespace-only payload has no lines.
pub fn payload_lines(raw: &str) -> Vec<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Joins lines back with `\n` and trims the result.
pub fn join_trimmed(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_has_no_lines() {
        assert!(payload_lines("").is_empty());
        assert!(payload_lines(" \n\t\n ").is_empty());
    }

    #[test]
    fn only_outer_whitespace_is_trimmed() {
        assert_eq!(
            payload_lines("\n\n  first\n    indented  \nlast  \n\n"),
            vec!["first", "    indented  ", "last"]
        );
    }

    #[test]
    fn crlf_is_normalised() {
        assert_eq!(payload_lines("a\r\nb\r\n\r\nc"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn join_trims_outer_blank_lines() {
        assert_eq!(join_trimmed(&["", "body", ""]), "body");
        assert_eq!(join_trimmed(&[]), "");
    }
}
