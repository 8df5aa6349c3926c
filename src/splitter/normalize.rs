/// Normalize accumulated section text
///
/// Trims surrounding whitespace, then collapses every run of blank or
/// whitespace-only lines into a single empty line so paragraphs stay
/// separated by exactly one blank line. Non-blank lines are kept verbatim,
/// including their indentation.
pub fn normalize_content(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut pending_blank = false;

    for line in trimmed.split('\n') {
        if line.trim().is_empty() {
            pending_blank = true;
            continue;
        }

        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        pending_blank = false;
        out.push_str(line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_run_collapses() {
        assert_eq!(normalize_content("p1\n\n\n\n   \np2"), "p1\n\np2");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(normalize_content("\n\n  body  \n\n\n"), "body");
        assert_eq!(normalize_content("   \n\t\n"), "");
        assert_eq!(normalize_content(""), "");
    }

    #[test]
    fn test_single_newlines_untouched() {
        assert_eq!(normalize_content("a\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn test_paragraph_break_preserved() {
        assert_eq!(normalize_content("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_indentation_after_blank_kept() {
        assert_eq!(
            normalize_content("intro\n  \n    let x = 1;\n    let y = 2;"),
            "intro\n\n    let x = 1;\n    let y = 2;"
        );
    }

    #[test]
    fn test_trailing_spaces_on_text_line_kept() {
        assert_eq!(normalize_content("hard break  \nnext"), "hard break  \nnext");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "   ",
            "p1\n\n\n\n   \np2",
            "\n\n- item\n- item\n\n\n\n> quote\n\t\n",
            "  indented first\n\n\n  indented second  ",
            "a\r\n\r\n\r\nb",
        ];

        for sample in samples {
            let once = normalize_content(sample);
            assert_eq!(normalize_content(&once), once, "Failed for {:?}", sample);
        }
    }

    /// Every string up to `max_len` characters over `alphabet`
    fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut all = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..max_len {
            frontier = frontier
                .iter()
                .flat_map(|prefix| {
                    alphabet.iter().map(move |c| {
                        let mut next = prefix.clone();
                        next.push(*c);
                        next
                    })
                })
                .collect();
            all.extend(frontier.iter().cloned());
        }
        all
    }

    #[test]
    fn test_idempotent_exhaustive() {
        let inputs = all_strings(&['a', ' ', '\t', '\n'], 7);
        assert_eq!(inputs.len(), (0..=7).map(|n| 4usize.pow(n)).sum::<usize>());

        for input in &inputs {
            let once = normalize_content(input);
            assert_eq!(normalize_content(&once), once, "Failed for {:?}", input);
            assert_eq!(once, once.trim(), "Untrimmed output for {:?}", input);
            assert!(!once.contains("\n\n\n"), "Blank run kept for {:?}", input);
        }
    }
}
