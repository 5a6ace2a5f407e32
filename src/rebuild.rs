/*!
 * Slide reconstruction.
 *
 * Updating a slide is a destructive replace, not an in-place edit: every
 * non-title shape is removed and one fresh text container receives the
 * rewritten content. This avoids any drift between old and new formatting
 * state at the cost of discarding images, charts, and other non-text
 * content, which is intentional since the rewritten content is text-only.
 */

use log::{debug, warn};

use crate::app_config::DesignSettings;
use crate::document::{inches, Slide};
use crate::paragraph::{self, ParagraphSpec};
use crate::providers::Rewriter;

// Fixed insets for the fresh text container, in EMU. Policy constants,
// not computed from title geometry.
const BODY_LEFT_WITH_TITLE: f64 = 1.0;
const BODY_TOP_WITH_TITLE: f64 = 1.5;
const BODY_LEFT_NO_TITLE: f64 = 0.5;
const BODY_TOP_NO_TITLE: f64 = 0.5;
const BODY_WIDTH: f64 = 8.0;
const BODY_HEIGHT: f64 = 5.0;

/// Concatenate the text of every paragraph in every text-bearing shape,
/// in shape/paragraph order, joined by newlines.
pub fn extract_slide_text(slide: &Slide) -> String {
    slide
        .shapes
        .iter()
        .filter_map(|shape| shape.text_frame.as_ref())
        .flat_map(|frame| frame.paragraphs.iter())
        .map(|paragraph| paragraph.text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rebuild one slide around rewritten content, mutating it in place.
///
/// Slides with no extractable text are left untouched and never reach the
/// rewrite step. A failed rewrite degrades the slide to an explanatory
/// message; it never aborts the run.
pub async fn reconstruct(
    slide: &mut Slide,
    rewriter: &dyn Rewriter,
    instructions: &str,
    settings: &DesignSettings,
) {
    let original_text = extract_slide_text(slide);
    if original_text.trim().is_empty() {
        debug!("Slide has no extractable text, leaving untouched");
        return;
    }

    let content = match rewriter.rewrite(&original_text, instructions).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Rewrite failed, degrading slide to diagnostic text: {}", e);
            format!("Error: {}", e)
        }
    };

    let has_title = slide.title().is_some();
    slide.shapes.retain(|shape| shape.is_title);

    let (left, top) = if has_title {
        (inches(BODY_LEFT_WITH_TITLE), inches(BODY_TOP_WITH_TITLE))
    } else {
        (inches(BODY_LEFT_NO_TITLE), inches(BODY_TOP_NO_TITLE))
    };

    let text_box = slide.add_text_box(left, top, inches(BODY_WIDTH), inches(BODY_HEIGHT));
    let Some(frame) = text_box.text_frame.as_mut() else {
        return;
    };
    frame.word_wrap = true;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (role, cleaned) = paragraph::classify(line);
        let spec = paragraph::build(role, &cleaned, settings);
        append_paragraph(frame, &spec);
    }
}

// Materialize a paragraph spec as runs on a new paragraph in the frame.
fn append_paragraph(frame: &mut crate::document::TextFrame, spec: &ParagraphSpec) {
    let p = frame.add_paragraph();
    // Run flags stay unset unless the span styles them, so paragraph-level
    // bold on headings is not contradicted by an explicit run override.
    for span in &spec.spans {
        let run = p.add_run();
        run.text = span.text.clone();
        run.bold = span.bold.then_some(true);
        run.italic = span.italic.then_some(true);
    }
    p.font_size_pt = Some(spec.font_size_pt);
    p.space_after_pt = spec.space_after_pt;
    p.indent_level = spec.indent_level;
    if spec.bold {
        p.bold = Some(true);
    }
}
