/*!
 * Inline-markup tokenizer.
 *
 * Rewritten slide content arrives with a small inline dialect: `**` toggles
 * bold, `*` toggles italic. This module splits a single line into styled
 * spans with the delimiters removed. Parsing is deliberately tolerant:
 * unbalanced delimiters leave the flag toggled for the rest of the line
 * instead of failing, so malformed model output still renders as plausible
 * text.
 */

/// A run of literal text with its resolved styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// Literal text with all delimiters removed
    pub text: String,
    /// Whether the span falls inside a bold region
    pub bold: bool,
    /// Whether the span falls inside an italic region
    pub italic: bool,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }
}

/// Split a line into styled spans.
///
/// The line is first split on the two-character bold delimiter; a bold flag
/// toggles at each delimiter. Each bold segment is then split on the single
/// italic delimiter with an independent italic flag that starts fresh per
/// segment. Empty pieces (adjacent delimiters, delimiters at the line
/// boundary) produce no span.
///
/// Concatenating the `text` of the returned spans reproduces the input with
/// every delimiter character removed.
pub fn tokenize(line: &str) -> Vec<StyledSpan> {
    let mut spans = Vec::new();
    let mut bold = false;

    for (i, segment) in line.split("**").enumerate() {
        if i > 0 {
            bold = !bold;
        }

        // Italic scope is local to the current bold segment.
        let mut italic = false;
        for (j, piece) in segment.split('*').enumerate() {
            if j > 0 {
                italic = !italic;
            }
            if !piece.is_empty() {
                spans.push(StyledSpan::new(piece, bold, italic));
            }
        }
    }

    spans
}

/// Concatenate the text of a span sequence.
///
/// Used by callers and tests to check the delimiter-removal invariant.
pub fn plain_text(spans: &[StyledSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
