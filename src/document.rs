use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;

// @module: Presentation document object model
//
// The pipeline treats the on-disk container as opaque: decks are parsed from
// and serialized back to the document's byte form, and everything in between
// operates on this in-memory shape/paragraph/run tree. The model carries
// exactly the capabilities the pipeline needs: enumerate slides and shapes,
// detect the title placeholder, remove shapes, add a text box at a position,
// and set background fill.

/// English Metric Units per inch, the native unit for shape geometry.
pub const EMU_PER_INCH: i64 = 914_400;

/// Convert inches to EMU.
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// An RGB color, serialized in its `#RRGGBB` hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color: {}", hex));
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|e| e.to_string())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|e| e.to_string())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|e| e.to_string())?;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// A single styled text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Run {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

/// A paragraph inside a text frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after_pt: Option<u32>,
    #[serde(default)]
    pub indent_level: u8,
    /// Paragraph-level bold, applied to every run when rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

impl Paragraph {
    /// Append an empty run and return a handle to it.
    pub fn add_run(&mut self) -> &mut Run {
        self.runs.push(Run::default());
        self.runs.last_mut().unwrap()
    }

    /// Plain text of the paragraph (all run texts concatenated).
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Text container of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextFrame {
    #[serde(default)]
    pub word_wrap: bool,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Append an empty paragraph and return a handle to it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        self.paragraphs.last_mut().unwrap()
    }
}

/// Kind of shape on a slide.
///
/// Only text boxes and placeholders carry a text frame; everything else is
/// opaque content that reconstruction discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    TextBox,
    Placeholder,
    Picture,
    Chart,
    Table,
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Shape {
    #[serde(default)]
    pub kind: ShapeKind,
    /// Whether this shape is the slide's title placeholder
    #[serde(default)]
    pub is_title: bool,
    // Geometry in EMU
    #[serde(default)]
    pub left: i64,
    #[serde(default)]
    pub top: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_frame: Option<TextFrame>,
}

impl Shape {
    /// Plain text of the shape, paragraphs joined by newlines.
    pub fn text(&self) -> String {
        match &self.text_frame {
            Some(frame) => frame
                .paragraphs
                .iter()
                .map(|p| p.text())
                .collect::<Vec<_>>()
                .join("\n"),
            None => String::new(),
        }
    }
}

/// One slide: an ordered list of shapes plus an optional background fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Slide {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
}

impl Slide {
    /// The title placeholder shape, if the slide has one.
    pub fn title(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.is_title)
    }

    /// Add a new empty text box at the given position and return a handle.
    pub fn add_text_box(&mut self, left: i64, top: i64, width: i64, height: i64) -> &mut Shape {
        self.shapes.push(Shape {
            kind: ShapeKind::TextBox,
            is_title: false,
            left,
            top,
            width,
            height,
            text_frame: Some(TextFrame::default()),
        });
        self.shapes.last_mut().unwrap()
    }
}

/// A presentation document: an ordered collection of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Presentation {
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Parse a presentation from its serialized byte container.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        serde_json::from_slice(bytes).map_err(|e| DocumentError::Load(e.to_string()))
    }

    /// Serialize the presentation to its byte container.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        serde_json::to_vec_pretty(self).map_err(|e| DocumentError::Save(e.to_string()))
    }

    /// Load a presentation from a file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path).map_err(|e| DocumentError::Load(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Save the presentation to a file.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(|e| DocumentError::Save(e.to_string()))
    }
}
