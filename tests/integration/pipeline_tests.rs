/*!
 * End-to-end pipeline tests running reconstruction and theming over whole
 * decks with a deterministic rewriter.
 */

use std::sync::Arc;

use slideforge::app_config::Config;
use slideforge::app_controller::Controller;
use slideforge::document::{Presentation, Rgb, ShapeKind, Slide};
use slideforge::paragraph::ParagraphRole;
use slideforge::providers::mock::MockRewriter;

use crate::common;

fn controller_with(rewriter: MockRewriter) -> Controller {
    Controller::with_rewriter(Config::default(), Arc::new(rewriter)).unwrap()
}

#[tokio::test]
async fn test_process_oneSlideDeck_shouldRebuildAndRestyle() {
    let rewriter = MockRewriter::working().with_custom_response(|_, _| {
        "# Heading One\n- point one\n- point two\n*emphasis*".to_string()
    });
    let controller = controller_with(rewriter);
    let settings = controller.settings().clone();

    let mut deck = common::one_slide_deck("Intro", "Old content");
    controller.process(&mut deck, "").await;

    let slide = &deck.slides[0];
    assert_eq!(slide.shapes.len(), 2);

    // Title text unchanged but restyled: primary color, title size, bold.
    let title = slide.title().unwrap();
    assert_eq!(title.text(), "Intro");
    let title_run = &title.text_frame.as_ref().unwrap().paragraphs[0].runs[0];
    assert_eq!(title_run.color, Some(Rgb::from_hex("#2B579A").unwrap()));
    assert_eq!(title_run.size_pt, Some(settings.title_size_pt));
    assert_eq!(title_run.bold, Some(true));
    assert_eq!(
        title_run.font_name.as_deref(),
        Some(settings.font_family.as_str())
    );

    // One fresh text box with heading, two bullets, one body paragraph.
    let body = slide.shapes.iter().find(|s| !s.is_title).unwrap();
    assert_eq!(body.kind, ShapeKind::TextBox);
    let frame = body.text_frame.as_ref().unwrap();
    assert!(frame.word_wrap);
    assert_eq!(frame.paragraphs.len(), 4);

    let heading = &frame.paragraphs[0];
    assert_eq!(heading.text(), "Heading One");
    assert_eq!(heading.bold, Some(true));
    assert_eq!(heading.font_size_pt, Some(settings.heading_size_pt));
    assert_eq!(heading.space_after_pt, Some(12));

    for bullet in &frame.paragraphs[1..3] {
        assert_eq!(bullet.font_size_pt, Some(settings.body_size_pt));
        assert_eq!(bullet.space_after_pt, None);
        assert_eq!(bullet.indent_level, 0);
    }
    assert_eq!(frame.paragraphs[1].text(), "point one");
    assert_eq!(frame.paragraphs[2].text(), "point two");

    let body_paragraph = &frame.paragraphs[3];
    assert_eq!(body_paragraph.runs.len(), 1);
    assert_eq!(body_paragraph.runs[0].text, "emphasis");
    assert_eq!(body_paragraph.runs[0].italic, Some(true));
    assert_eq!(body_paragraph.space_after_pt, Some(6));

    // Every run on the slide carries the theme font and a color.
    for shape in &slide.shapes {
        for paragraph in &shape.text_frame.as_ref().unwrap().paragraphs {
            for run in &paragraph.runs {
                assert!(run.font_name.is_some());
                assert!(run.color.is_some());
            }
        }
    }
}

#[tokio::test]
async fn test_process_failingRewriter_shouldDegradePerSlideOnly() {
    let controller = controller_with(MockRewriter::failing());

    let mut deck = Presentation {
        slides: vec![
            common::one_slide_deck("One", "text").slides.remove(0),
            // Second slide has no text, stays untouched by reconstruction.
            Slide {
                shapes: vec![common::picture_shape()],
                background: None,
            },
        ],
    };

    controller.process(&mut deck, "").await;

    let first_body = deck.slides[0].shapes.last().unwrap();
    let content = first_body.text_frame.as_ref().unwrap().paragraphs[0].text();
    assert!(content.starts_with("Error:"));

    // The run finished; the empty slide kept its picture.
    assert_eq!(deck.slides[1].shapes.len(), 1);
    assert!(deck.slides[1].shapes[0].text_frame.is_none());
}

#[tokio::test]
async fn test_process_multiSlideDeck_shouldCallRewriterOncePerTextSlide() {
    let rewriter = MockRewriter::echo();
    let counter = rewriter.clone();
    let controller = controller_with(rewriter);

    let mut deck = Presentation {
        slides: vec![
            common::one_slide_deck("A", "first").slides.remove(0),
            common::one_slide_deck("B", "second").slides.remove(0),
            Slide::default(),
        ],
    };

    controller.process(&mut deck, "").await;
    assert_eq!(counter.request_count(), 2);
}

#[tokio::test]
async fn test_roleClassificationSurvivesPipeline() {
    // A deck whose rewrite mixes every role must come out with the
    // corresponding paragraph shapes.
    let rewriter = MockRewriter::working().with_custom_response(|_, _| {
        "## What is motivation?\n- **drive** and reward\nUnderstanding incentives\nPlain closing."
            .to_string()
    });
    let controller = controller_with(rewriter);

    let mut deck = common::one_slide_deck("Intro", "Old content");
    controller.process(&mut deck, "").await;

    let frame = deck.slides[0]
        .shapes
        .last()
        .unwrap()
        .text_frame
        .as_ref()
        .unwrap();

    let roles: Vec<ParagraphRole> = frame
        .paragraphs
        .iter()
        .map(|p| slideforge::paragraph::classify(&p.text()).0)
        .collect();
    // Reclassifying the produced plain text reproduces the same roles.
    assert_eq!(
        roles,
        vec![
            ParagraphRole::Heading,
            ParagraphRole::Body, // marker was consumed during the build
            ParagraphRole::Heading,
            ParagraphRole::Body,
        ]
    );

    // Bold markup in the bullet became a styled run, not literal asterisks.
    let bullet = &frame.paragraphs[1];
    assert_eq!(bullet.text(), "drive and reward");
    assert_eq!(bullet.runs[0].text, "drive");
    assert_eq!(bullet.runs[0].bold, Some(true));
}

#[tokio::test]
async fn test_run_fileToFile_shouldWriteEnhancedDeck() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("talk.deck.json");
    let output = dir.path().join("talk.enhanced.deck.json");

    common::one_slide_deck("Intro", "Old content")
        .save(&input)
        .unwrap();

    let rewriter = MockRewriter::working().with_custom_response(|_, _| "New text".to_string());
    let controller = controller_with(rewriter);
    controller
        .run(input.clone(), None, "", false)
        .await
        .unwrap();

    let enhanced = Presentation::load(&output).unwrap();
    assert_eq!(enhanced.slides.len(), 1);
    let body = enhanced.slides[0].shapes.last().unwrap();
    assert_eq!(
        body.text_frame.as_ref().unwrap().paragraphs[0].text(),
        "New text"
    );
}

#[tokio::test]
async fn test_run_existingOutput_shouldSkipWithoutForce() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("talk.deck.json");
    let output = dir.path().join("talk.enhanced.deck.json");

    common::one_slide_deck("Intro", "Old content")
        .save(&input)
        .unwrap();
    std::fs::write(&output, b"existing").unwrap();

    let rewriter = MockRewriter::echo();
    let counter = rewriter.clone();
    let controller = controller_with(rewriter);

    controller.run(input, None, "", false).await.unwrap();

    assert_eq!(counter.request_count(), 0);
    assert_eq!(std::fs::read(&output).unwrap(), b"existing");
}

#[tokio::test]
async fn test_run_corruptDeck_shouldBeFatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.deck.json");
    std::fs::write(&input, b"{ not a deck").unwrap();

    let controller = controller_with(MockRewriter::working());
    let result = controller.run(input, None, "", false).await;
    assert!(result.is_err(), "document load errors abort the run");
}
