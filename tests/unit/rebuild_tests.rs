/*!
 * Tests for slide reconstruction
 */

use slideforge::app_config::DesignSettings;
use slideforge::document::{inches, ShapeKind, Slide};
use slideforge::providers::mock::MockRewriter;
use slideforge::rebuild::{extract_slide_text, reconstruct};

use crate::common;

#[test]
fn test_extractSlideText_shouldJoinAllShapesInOrder() {
    let deck = common::one_slide_deck("Intro", "Old content");
    assert_eq!(extract_slide_text(&deck.slides[0]), "Intro\nOld content");
}

#[test]
fn test_extractSlideText_shouldSkipNonTextShapes() {
    let mut slide = Slide::default();
    slide.shapes.push(common::picture_shape());
    slide.shapes.push(common::text_shape("words", false));
    assert_eq!(extract_slide_text(&slide), "words");
}

#[test]
fn test_reconstruct_emptySlide_shouldBeNoOp() {
    let settings = DesignSettings::default();
    let rewriter = MockRewriter::failing();

    // A slide with only a picture has no extractable text.
    let mut slide = Slide::default();
    slide.shapes.push(common::picture_shape());
    let before = slide.clone();

    tokio_test::block_on(reconstruct(&mut slide, &rewriter, "", &settings));

    assert_eq!(slide, before, "no shape removals, no additions");
    assert_eq!(rewriter.request_count(), 0, "no rewrite calls");
}

#[test]
fn test_reconstruct_whitespaceOnlyText_shouldBeNoOp() {
    let settings = DesignSettings::default();
    let rewriter = MockRewriter::working();

    let mut slide = Slide::default();
    slide.shapes.push(common::text_shape("   \n  ", false));
    let before = slide.clone();

    tokio_test::block_on(reconstruct(&mut slide, &rewriter, "", &settings));

    assert_eq!(slide, before);
    assert_eq!(rewriter.request_count(), 0);
}

#[tokio::test]
async fn test_reconstruct_shouldRemoveNonTitleShapesAndAddOneTextBox() {
    let settings = DesignSettings::default();
    let rewriter =
        MockRewriter::working().with_custom_response(|_, _| "New body text".to_string());

    let mut deck = common::one_slide_deck("Intro", "Old content");
    deck.slides[0].shapes.push(common::picture_shape());
    let slide = &mut deck.slides[0];

    reconstruct(slide, &rewriter, "", &settings).await;

    // Title survives, picture and old body are gone, one fresh text box.
    assert_eq!(slide.shapes.len(), 2);
    assert!(slide.shapes[0].is_title);
    assert_eq!(slide.shapes[1].kind, ShapeKind::TextBox);
    assert_eq!(rewriter.request_count(), 1);

    let text_box = &slide.shapes[1];
    let frame = text_box.text_frame.as_ref().unwrap();
    assert!(frame.word_wrap);
    assert_eq!(frame.paragraphs.len(), 1);
    assert_eq!(frame.paragraphs[0].text(), "New body text");
}

#[tokio::test]
async fn test_reconstruct_withTitle_shouldUseIndentedInset() {
    let settings = DesignSettings::default();
    let rewriter = MockRewriter::working().with_custom_response(|_, _| "text".to_string());

    let mut deck = common::one_slide_deck("Intro", "Old content");
    reconstruct(&mut deck.slides[0], &rewriter, "", &settings).await;

    let text_box = deck.slides[0].shapes.last().unwrap();
    assert_eq!(text_box.left, inches(1.0));
    assert_eq!(text_box.top, inches(1.5));
    assert_eq!(text_box.width, inches(8.0));
    assert_eq!(text_box.height, inches(5.0));
}

#[tokio::test]
async fn test_reconstruct_withoutTitle_shouldUseTopLeftInset() {
    let settings = DesignSettings::default();
    let rewriter = MockRewriter::working().with_custom_response(|_, _| "text".to_string());

    let mut slide = Slide::default();
    slide.shapes.push(common::text_shape("Old content", false));
    reconstruct(&mut slide, &rewriter, "", &settings).await;

    let text_box = slide.shapes.last().unwrap();
    assert_eq!(text_box.left, inches(0.5));
    assert_eq!(text_box.top, inches(0.5));
}

#[tokio::test]
async fn test_reconstruct_failedRewrite_shouldDegradeToDiagnosticText() {
    let settings = DesignSettings::default();
    let rewriter = MockRewriter::failing();

    let mut deck = common::one_slide_deck("Intro", "Old content");
    reconstruct(&mut deck.slides[0], &rewriter, "", &settings).await;

    // The run continues; the slide carries an explanatory message.
    let text_box = deck.slides[0].shapes.last().unwrap();
    let content = text_box.text_frame.as_ref().unwrap().paragraphs[0].text();
    assert!(content.starts_with("Error:"), "content: {:?}", content);
}

#[tokio::test]
async fn test_reconstruct_heading_shouldCarryBoldOnParagraphNotRuns() {
    let settings = DesignSettings::default();
    let rewriter =
        MockRewriter::working().with_custom_response(|_, _| "# Heading One".to_string());

    let mut deck = common::one_slide_deck("Intro", "Old content");
    reconstruct(&mut deck.slides[0], &rewriter, "", &settings).await;

    // Bold lives on the paragraph; the run keeps its flags unset so it
    // cannot override the paragraph-level bold in a renderer.
    let frame = deck.slides[0].shapes.last().unwrap().text_frame.as_ref().unwrap();
    let heading = &frame.paragraphs[0];
    assert_eq!(heading.bold, Some(true));
    assert_eq!(heading.runs[0].bold, None);
    assert_eq!(heading.runs[0].italic, None);
}

#[tokio::test]
async fn test_reconstruct_styledSpans_shouldOnlySetFlagsWhenStyled() {
    let settings = DesignSettings::default();
    let rewriter =
        MockRewriter::working().with_custom_response(|_, _| "**key** and *aside*".to_string());

    let mut deck = common::one_slide_deck("Intro", "Old content");
    reconstruct(&mut deck.slides[0], &rewriter, "", &settings).await;

    let frame = deck.slides[0].shapes.last().unwrap().text_frame.as_ref().unwrap();
    let runs = &frame.paragraphs[0].runs;
    assert_eq!(runs[0].bold, Some(true));
    assert_eq!(runs[0].italic, None);
    assert_eq!(runs[1].bold, None, "unstyled text carries no overrides");
    assert_eq!(runs[1].italic, None);
    assert_eq!(runs[2].italic, Some(true));
    assert_eq!(runs[2].bold, None);
}

#[tokio::test]
async fn test_reconstruct_blankLines_shouldProduceNoParagraphs() {
    let settings = DesignSettings::default();
    let rewriter =
        MockRewriter::working().with_custom_response(|_, _| "first\n\n   \nsecond".to_string());

    let mut deck = common::one_slide_deck("Intro", "Old content");
    reconstruct(&mut deck.slides[0], &rewriter, "", &settings).await;

    let frame = deck.slides[0].shapes.last().unwrap().text_frame.as_ref().unwrap();
    assert_eq!(frame.paragraphs.len(), 2);
    assert_eq!(frame.paragraphs[0].text(), "first");
    assert_eq!(frame.paragraphs[1].text(), "second");
}

#[tokio::test]
async fn test_reconstruct_shouldPassExtractedTextToRewriter() {
    let settings = DesignSettings::default();
    let rewriter = MockRewriter::echo();

    let mut deck = common::one_slide_deck("Intro", "Old content");
    reconstruct(&mut deck.slides[0], &rewriter, "ignored", &settings).await;

    // Echo returns the extracted text; both lines classify as Body.
    let frame = deck.slides[0].shapes.last().unwrap().text_frame.as_ref().unwrap();
    assert_eq!(frame.paragraphs.len(), 2);
    assert_eq!(frame.paragraphs[0].text(), "Intro");
    assert_eq!(frame.paragraphs[1].text(), "Old content");
}
