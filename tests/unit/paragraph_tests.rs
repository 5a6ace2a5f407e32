/*!
 * Tests for paragraph classification and building
 */

use slideforge::app_config::DesignSettings;
use slideforge::markup::StyledSpan;
use slideforge::paragraph::{build, classify, ParagraphRole};

#[test]
fn test_classify_bulletLine_shouldReturnBulletAndTrimmedText() {
    let (role, text) = classify("- Apples");
    assert_eq!(role, ParagraphRole::Bullet);
    assert_eq!(text, "Apples");
}

#[test]
fn test_classify_hashSignalHeading_shouldReturnHeading() {
    let (role, text) = classify("## What is motivation?");
    assert_eq!(role, ParagraphRole::Heading);
    assert_eq!(text, "What is motivation?");
}

#[test]
fn test_classify_bodyLine_shouldReturnBody() {
    let (role, text) = classify("Just a sentence.");
    assert_eq!(role, ParagraphRole::Body);
    assert_eq!(text, "Just a sentence.");
}

#[test]
fn test_classify_allBulletMarkers_shouldBeRecognized() {
    for line in ["• point", "- point", "* point"] {
        let (role, text) = classify(line);
        assert_eq!(role, ParagraphRole::Bullet, "line: {:?}", line);
        assert_eq!(text, "point");
    }
}

#[test]
fn test_classify_signalPhraseWithoutHashes_shouldBeHeading() {
    let (role, text) = classify("Drive Theory in practice");
    assert_eq!(role, ParagraphRole::Heading);
    assert_eq!(text, "Drive Theory in practice");
}

#[test]
fn test_build_heading_shouldBeSinglePlainSpanBoldAtHeadingSize() {
    let settings = DesignSettings::default();
    let spec = build(ParagraphRole::Heading, "What is motivation?", &settings);

    assert_eq!(spec.spans, vec![StyledSpan::new("What is motivation?", false, false)]);
    assert!(spec.bold);
    assert_eq!(spec.font_size_pt, settings.heading_size_pt);
    assert_eq!(spec.space_after_pt, Some(12));
    assert_eq!(spec.indent_level, 0);
}

#[test]
fn test_build_heading_shouldNotTokenizeMarkup() {
    // Heading text keeps its delimiter characters verbatim.
    let settings = DesignSettings::default();
    let spec = build(ParagraphRole::Heading, "What is **bold**?", &settings);
    assert_eq!(spec.spans, vec![StyledSpan::new("What is **bold**?", false, false)]);
}

#[test]
fn test_build_bullet_shouldTokenizeAtBodySizeWithoutSpacing() {
    let settings = DesignSettings::default();
    let spec = build(ParagraphRole::Bullet, "a **key** point", &settings);

    assert_eq!(
        spec.spans,
        vec![
            StyledSpan::new("a ", false, false),
            StyledSpan::new("key", true, false),
            StyledSpan::new(" point", false, false),
        ]
    );
    assert!(!spec.bold);
    assert_eq!(spec.font_size_pt, settings.body_size_pt);
    assert_eq!(spec.space_after_pt, None);
    assert_eq!(spec.indent_level, 0);
}

#[test]
fn test_build_body_shouldTokenizeWithSixPointSpacing() {
    let settings = DesignSettings::default();
    let spec = build(ParagraphRole::Body, "*emphasis*", &settings);

    assert_eq!(spec.spans, vec![StyledSpan::new("emphasis", false, true)]);
    assert_eq!(spec.font_size_pt, settings.body_size_pt);
    assert_eq!(spec.space_after_pt, Some(6));
}
