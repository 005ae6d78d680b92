// Print-sheet layout for a single route slip.
//
// Expands one slip into N side-by-side copies in comma-separated form, so
// a whole sheet of paper yields N identical slips after cutting. Lines
// before the first blank line are title lines and get an empty cue cell;
// lines after it are cue rows, where the first word is the cue and the
// rest of the line is the instruction.

use std::io::{BufRead, Write};

use anyhow::Result;

/// Side-by-side copies per sheet unless overridden.
pub const DEFAULT_COPIES: usize = 3;

/// The cue cell is clipped to this many characters so columns stay narrow.
const CUE_CLIP: usize = 7;

/// Replace characters that would break the comma-separated layout:
/// commas become semicolons, double quotes become single quotes.
fn sanitize(s: &str) -> String {
    s.replace(',', ";").replace('"', "'")
}

/// Lay out the slip on `input` as `copies` side-by-side columns on
/// `output`.
///
/// Every input line is trimmed first. The first blank line switches from
/// title lines to cue rows; blank lines after the switch emit nothing.
pub fn render<R: BufRead, W: Write>(input: R, output: &mut W, copies: usize) -> Result<()> {
    let mut seen_blank_line = false;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if seen_blank_line {
            let mut parts = line.split_whitespace();
            if let Some(first) = parts.next() {
                let cue: String = first.chars().take(CUE_CLIP).collect();
                let instruction = parts.collect::<Vec<_>>().join(" ");
                let cell = format!("{}, {}", sanitize(&cue), sanitize(&instruction));
                writeln!(output, "{}", vec![cell; copies].join(", "))?;
            }
        } else if !line.is_empty() {
            let cell = format!(", {}", sanitize(line));
            writeln!(output, "{}", vec![cell; copies].join(", "))?;
        } else {
            seen_blank_line = true;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(input: &str, copies: usize) -> String {
        let mut out = Vec::new();
        render(input.as_bytes(), &mut out, copies).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_title_lines_get_empty_cue_cells() {
        let out = render_to_string("Quarry Loop\n", 3);
        assert_eq!(out, ", Quarry Loop, , Quarry Loop, , Quarry Loop\n");
    }

    #[test]
    fn test_cue_rows_split_first_word() {
        let out = render_to_string("Title\n\n12.3 Left onto Mill Road\n", 2);
        assert_eq!(
            out,
            ", Title, , Title\n12.3, Left onto Mill Road, 12.3, Left onto Mill Road\n"
        );
    }

    #[test]
    fn test_cue_is_clipped_to_seven_chars() {
        let out = render_to_string("T\n\nlandmarked turn here\n", 1);
        assert_eq!(out, ", T\nlandmar, turn here\n");
    }

    #[test]
    fn test_sanitize_commas_and_quotes() {
        let out = render_to_string("Lake, \"the\" long way\n", 1);
        assert_eq!(out, ", Lake; 'the' long way\n");
    }

    #[test]
    fn test_blank_lines_in_body_emit_nothing() {
        let out = render_to_string("Title\n\nfirst row\n\nsecond row\n", 1);
        assert_eq!(out, ", Title\nfirst, row\nsecond, row\n");
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert_eq!(render_to_string("", 3), "");
    }

    #[test]
    fn test_lines_are_trimmed_before_the_blank_check() {
        // A line of only whitespace counts as the blank separator.
        let out = render_to_string("Title\n   \ncue row\n", 1);
        assert_eq!(out, ", Title\ncue, row\n");
    }
}
