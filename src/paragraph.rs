/*!
 * Paragraph classification and building.
 *
 * Each non-blank line of rewritten slide content gets a structural role
 * (heading, bullet, or body) and is expanded into a paragraph description
 * that the reconstructor appends to the fresh text container.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::DesignSettings;
use crate::markup::{self, StyledSpan};

// Leading markdown-style heading hashes, stripped before any role check.
static HEADING_HASH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s*").unwrap());

// Fixed heading-signal phrases. Known gap: an unmarked heading outside this
// list classifies as Body. Kept as-is for parity with established output;
// hash-prefixed lines are recognized as headings regardless.
static HEADING_SIGNAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(What is|Understanding|What's|Drive Theory|Incentive Theory)").unwrap()
});

/// Bullet markers recognized at the start of a line, each followed by a space.
const BULLET_MARKERS: [char; 3] = ['•', '-', '*'];

/// Structural role of one line of slide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRole {
    Heading,
    Bullet,
    Body,
}

/// Transient description of one built paragraph.
///
/// Created per line during reconstruction and consumed immediately when its
/// spans are appended as runs; never stored across slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphSpec {
    pub role: ParagraphRole,
    pub spans: Vec<StyledSpan>,
    pub font_size_pt: u32,
    pub space_after_pt: Option<u32>,
    pub indent_level: u8,
    /// Paragraph-level bold, forced on for headings
    pub bold: bool,
}

/// Assign a role to a raw line and return the cleaned text the builder uses.
///
/// Leading heading hashes are stripped first; the stripped text is what all
/// subsequent checks (and the returned cleaned text) operate on. For bullet
/// lines the marker and its following space are trimmed off as well.
pub fn classify(raw_line: &str) -> (ParagraphRole, String) {
    let had_hashes = raw_line.starts_with('#');
    let cleaned = HEADING_HASH_REGEX.replace(raw_line, "").trim().to_string();

    if had_hashes || HEADING_SIGNAL_REGEX.is_match(&cleaned) {
        return (ParagraphRole::Heading, cleaned);
    }

    if let Some(rest) = strip_bullet_marker(&cleaned) {
        return (ParagraphRole::Bullet, rest.trim().to_string());
    }

    (ParagraphRole::Body, cleaned)
}

// Returns the text after a leading bullet marker plus space, or None.
fn strip_bullet_marker(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let first = chars.next()?;
    if BULLET_MARKERS.contains(&first) && chars.next() == Some(' ') {
        Some(chars.as_str())
    } else {
        None
    }
}

/// Expand a classified line into a paragraph description.
///
/// This is a fixed mapping table, not a rule engine: a new role means a new
/// match arm. Headings are not run through the tokenizer; they render as a
/// single plain span made bold at the heading size.
pub fn build(role: ParagraphRole, cleaned_text: &str, settings: &DesignSettings) -> ParagraphSpec {
    match role {
        ParagraphRole::Heading => ParagraphSpec {
            role,
            spans: vec![StyledSpan::new(cleaned_text, false, false)],
            font_size_pt: settings.heading_size_pt,
            space_after_pt: Some(12),
            indent_level: 0,
            bold: true,
        },
        ParagraphRole::Bullet => ParagraphSpec {
            role,
            spans: markup::tokenize(cleaned_text),
            font_size_pt: settings.body_size_pt,
            space_after_pt: None,
            indent_level: 0,
            bold: false,
        },
        ParagraphRole::Body => ParagraphSpec {
            role,
            spans: markup::tokenize(cleaned_text),
            font_size_pt: settings.body_size_pt,
            space_after_pt: Some(6),
            indent_level: 0,
            bold: false,
        },
    }
}
