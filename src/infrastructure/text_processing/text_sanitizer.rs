use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").expect("valid regex")
});

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const SOFT_HYPHEN: char = '\u{00AD}';

/// Cleans text pulled out of a layout format such as PDF: ligatures are
/// decomposed, words split across lines are rejoined, runs of blank lines
/// become one paragraph break and internal whitespace collapses to a space.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| *c != SOFT_HYPHEN && (!c.is_control() || *c == '\n' || *c == '\t'))
        .collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut result = String::with_capacity(de_hyphenated.len());
    let mut prev_was_blank = false;
    let mut first_content = true;

    for line in de_hyphenated.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            prev_was_blank = true;
            continue;
        }

        if !first_content {
            result.push_str(if prev_was_blank { "\n\n" } else { "\n" });
        }
        collapse_internal_whitespace(trimmed, &mut result);
        prev_was_blank = false;
        first_content = false;
    }

    result
}

/// Light cleanup for plain text uploads. Content is kept as written apart from
/// a leading byte-order mark, NUL bytes, line-ending style and outer whitespace.
pub fn normalize_plain_text(raw: &str) -> String {
    let without_bom = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    without_bom
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\0', "")
        .trim()
        .to_string()
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
