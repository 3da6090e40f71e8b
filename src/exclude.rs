// Filter: removes debug-only regions before a script is published.
//
// A region starts at `EXCLUDE_START` and ends at the first `EXCLUDE_END`
// after it. Both markers and everything between them are dropped, together
// with the rest of the end marker's line when that rest is blank, so a
// removed block leaves no empty line behind.

/// Opening sentinel, written as a Lua comment line.
pub const EXCLUDE_START: &str = "-- PASTEBIN EXCLUDE";
/// Closing sentinel.
pub const EXCLUDE_END: &str = "-- END PASTEBIN EXCLUDE";

/// Return `text` with every marked region removed.
///
/// Regions do not nest: a start marker inside a region is removed with it
/// and the region still closes on the first end marker. A start marker with
/// no end marker after it is left in place along with the text that follows.
pub fn strip_excluded(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut removed = 0usize;

    while let Some(start) = rest.find(EXCLUDE_START) {
        let body = start + EXCLUDE_START.len();
        let Some(end) = rest[body..].find(EXCLUDE_END) else {
            tracing::debug!("unterminated exclude region left in place");
            break;
        };
        let mut cut = body + end + EXCLUDE_END.len();
        cut += blank_line_tail(&rest[cut..]);

        out.push_str(&rest[..start]);
        rest = &rest[cut..];
        removed += 1;
    }
    out.push_str(rest);

    tracing::debug!(regions = removed, "stripped exclude regions");
    out
}

/// Length of the whitespace-then-newline that ends the marker's line, or 0
/// when the line carries anything else.
fn blank_line_tail(s: &str) -> usize {
    let ws = s.len() - s.trim_start_matches(|c| matches!(c, ' ' | '\t' | '\r')).len();
    if s[ws..].starts_with('\n') {
        ws + 1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_markers_is_unchanged() {
        let input = "local x = 1\nprint(x)\n";
        assert_eq!(strip_excluded(input), input);
        assert_eq!(strip_excluded(""), "");
    }

    #[test]
    fn removes_single_region_without_blank_line() {
        let input = "\
print(\"a\")
-- PASTEBIN EXCLUDE
print(\"debug\")
-- END PASTEBIN EXCLUDE
print(\"b\")
";
        assert_eq!(strip_excluded(input), "print(\"a\")\nprint(\"b\")\n");
    }

    #[test]
    fn removes_every_region_in_order() {
        let input = "\
one
-- PASTEBIN EXCLUDE
debug 1
-- END PASTEBIN EXCLUDE
two
-- PASTEBIN EXCLUDE
debug 2
debug 3
-- END PASTEBIN EXCLUDE
three
-- PASTEBIN EXCLUDE
-- END PASTEBIN EXCLUDE
four
";
        assert_eq!(strip_excluded(input), "one\ntwo\nthree\nfour\n");
    }

    #[test]
    fn only_one_newline_is_eaten() {
        let input = "a\n-- PASTEBIN EXCLUDE\nx\n-- END PASTEBIN EXCLUDE\n\nb\n";
        assert_eq!(strip_excluded(input), "a\n\nb\n");
    }

    #[test]
    fn trailing_whitespace_and_crlf_after_end_marker() {
        let input = "a\r\n-- PASTEBIN EXCLUDE\r\nx\r\n-- END PASTEBIN EXCLUDE  \r\nb\r\n";
        assert_eq!(strip_excluded(input), "a\r\nb\r\n");
    }

    #[test]
    fn code_after_end_marker_is_kept() {
        let input = "a\n-- PASTEBIN EXCLUDE\nx\n-- END PASTEBIN EXCLUDE print(1)\nb\n";
        assert_eq!(strip_excluded(input), "a\n print(1)\nb\n");
    }

    #[test]
    fn end_marker_at_end_of_text() {
        let input = "a\n-- PASTEBIN EXCLUDE\nx\n-- END PASTEBIN EXCLUDE";
        assert_eq!(strip_excluded(input), "a\n");
    }

    #[test]
    fn unterminated_region_is_left_alone() {
        let input = "a\n-- PASTEBIN EXCLUDE\nx\n";
        assert_eq!(strip_excluded(input), input);
    }

    #[test]
    fn nested_start_closes_on_first_end() {
        let input = "\
a
-- PASTEBIN EXCLUDE
x
-- PASTEBIN EXCLUDE
y
-- END PASTEBIN EXCLUDE
z
-- END PASTEBIN EXCLUDE
b
";
        assert_eq!(
            strip_excluded(input),
            "a\nz\n-- END PASTEBIN EXCLUDE\nb\n"
        );
    }

    #[test]
    fn stray_end_marker_is_left_alone() {
        let input = "a\n-- END PASTEBIN EXCLUDE\nb\n";
        assert_eq!(strip_excluded(input), input);
    }

    #[test]
    fn stripping_twice_changes_nothing() {
        let inputs = [
            "plain\n",
            "a\n-- PASTEBIN EXCLUDE\nx\n-- END PASTEBIN EXCLUDE\nb\n",
            "a\n-- PASTEBIN EXCLUDE\n-- PASTEBIN EXCLUDE\n-- END PASTEBIN EXCLUDE\n-- END PASTEBIN EXCLUDE\n",
            "a\n-- PASTEBIN EXCLUDE\nnever closed\n",
        ];
        for input in inputs {
            let once = strip_excluded(input);
            assert_eq!(strip_excluded(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_never_contains_a_region() {
        let input = "-- PASTEBIN EXCLUDE\nsecret()\n-- END PASTEBIN EXCLUDE\nrun()\n";
        let out = strip_excluded(input);
        assert!(!out.contains(EXCLUDE_START));
        assert!(!out.contains("secret"));
        assert_eq!(out, "run()\n");
    }
}
