use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_w = 0;

        for word in paragraph.split_whitespace() {
            let word_w = UnicodeWidthStr::width(word);
            let gap = usize::from(line_w > 0);

            if line_w + gap + word_w <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += gap + word_w;
                continue;
            }

            if line_w > 0 {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }

            if word_w <= width {
                line.push_str(word);
                line_w = word_w;
                continue;
            }

            for ch in word.chars() {
                let ch_w = ch.width().unwrap_or(0);
                if line_w + ch_w > width && line_w > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push(ch);
                line_w += ch_w;
            }
        }

        lines.push(line);
    }

    lines
}

/// Hard-breaks editable text by display width, keeping every space and
/// newline. Always yields at least one row, and a trailing newline opens an
/// empty one.
pub fn break_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for segment in text.split('\n') {
        let mut row = String::new();
        let mut row_w = 0;
        for ch in segment.chars() {
            let ch_w = ch.width().unwrap_or(0);
            if row_w + ch_w > width && row_w > 0 {
                rows.push(std::mem::take(&mut row));
                row_w = 0;
            }
            row.push(ch);
            row_w += ch_w;
        }
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("here comes the sun and I say", 10),
            ["here comes", "the sun", "and I say"]
        );
    }

    #[test]
    fn keeps_explicit_line_breaks() {
        assert_eq!(wrap("la la\n\nla", 20), ["la la", "", "la"]);
    }

    #[test]
    fn splits_words_wider_than_the_line() {
        assert_eq!(wrap("abcdefgh ij", 3), ["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn measures_wide_characters() {
        assert_eq!(wrap("夜に駆ける", 4), ["夜に", "駆け", "る"]);
    }

    #[test]
    fn breaks_rows_without_touching_spaces() {
        assert_eq!(break_rows("ab  cdef", 4), ["ab  ", "cdef"]);
        assert_eq!(break_rows("one\n\ntwo\n", 10), ["one", "", "two", ""]);
        assert_eq!(break_rows("", 5), [""]);
    }
}
