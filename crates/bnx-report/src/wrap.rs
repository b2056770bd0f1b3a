//! Greedy word wrap against measured glyph widths.
//!
//! The paginator measures blocks with [`wrap_text`] and draws exactly the
//! lines it returns, so a block's height is always `lines × line_height`.

use crate::metrics::{FontStyle, text_width_mm};

/// Split `text` into lines no wider than `max_width` millimetres.
///
/// Explicit newlines start a new line. Words wider than the whole line are
/// split between characters. Always returns at least one line.
#[must_use]
pub fn wrap_text(text: &str, max_width: f32, size_pt: f32, style: FontStyle) -> Vec<String> {
    let fits = |candidate: &str| text_width_mm(candidate, size_pt, style) <= max_width;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
            } else {
                current = split_long_word(word, &fits, &mut lines);
            }
        }
        lines.push(current);
    }

    lines
}

/// Shorten `text` with a trailing `..` until it is at most `max_width` wide.
///
/// Returns an empty string when not even `..` fits.
#[must_use]
pub fn fit_label(text: &str, max_width: f32, size_pt: f32, style: FontStyle) -> String {
    if text_width_mm(text, size_pt, style) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}..", chars.iter().collect::<String>().trim_end());
        if text_width_mm(&candidate, size_pt, style) <= max_width {
            return candidate;
        }
    }
    String::new()
}

/// Push full-width chunks of `word` and return the remainder.
fn split_long_word(word: &str, fits: &impl Fn(&str) -> bool, lines: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if !fits(&chunk) && chunk.chars().count() > 1 {
            chunk.pop();
            lines.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        }
    }
    chunk
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap_text("Résultats clés", 170.0, 10.0, FontStyle::Regular);
        assert_eq!(lines, vec!["Résultats clés".to_string()]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 100.0, 10.0, FontStyle::Regular), vec![String::new()]);
    }

    #[test]
    fn every_line_fits_and_no_word_is_lost() {
        let text = "L'analyse génétique de la cohorte A a révélé des mutations significatives \
                    sur les gènes BRCA1 et BRCA2 chez une large part des patients étudiés.";
        let lines = wrap_text(text, 60.0, 10.0, FontStyle::Regular);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, FontStyle::Regular) <= 60.0, "{line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn newlines_are_hard_breaks() {
        let lines = wrap_text("un\ndeux\n\ntrois", 170.0, 10.0, FontStyle::Regular);
        assert_eq!(lines, vec!["un", "deux", "", "trois"]);
    }

    #[test]
    fn fit_label_keeps_short_text() {
        assert_eq!(fit_label("Jane Doe", 50.0, 8.0, FontStyle::Regular), "Jane Doe");
    }

    #[test]
    fn fit_label_shortens_long_text() {
        let label = fit_label("Hypoxie Modérée (5% O2)", 15.0, 6.0, FontStyle::Bold);
        assert!(label.ends_with(".."));
        assert!(text_width_mm(&label, 6.0, FontStyle::Bold) <= 15.0);
        assert_eq!(fit_label("abc", 0.1, 6.0, FontStyle::Regular), "");
    }

    #[test]
    fn long_word_is_split_by_character() {
        let word = "a".repeat(200);
        let lines = wrap_text(&word, 20.0, 10.0, FontStyle::Bold);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width_mm(line, 10.0, FontStyle::Bold) <= 20.0);
        }
    }
}
