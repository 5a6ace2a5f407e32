/*!
 * Theme application.
 *
 * After reconstruction every run on the slide, title included, receives the
 * uniform visual theme. The pass only assigns absolute values, so running
 * it twice with the same settings yields identical styling, and it is
 * independent of how the runs were produced.
 */

use crate::app_config::DesignSettings;
use crate::document::Slide;

/// Apply font family, color roles, and optional background to one slide.
///
/// Title runs are overridden with the primary color, the title size, and
/// forced bold; every other run gets the text color at its existing size.
pub fn apply_theme(slide: &mut Slide, settings: &DesignSettings) {
    for shape in &mut slide.shapes {
        let is_title = shape.is_title;
        let Some(frame) = shape.text_frame.as_mut() else {
            continue;
        };
        for paragraph in &mut frame.paragraphs {
            for run in &mut paragraph.runs {
                run.font_name = Some(settings.font_family.clone());
                run.color = Some(settings.colors.text);

                if is_title {
                    run.color = Some(settings.colors.primary);
                    run.size_pt = Some(settings.title_size_pt);
                    run.bold = Some(true);
                }
            }
        }
    }

    if settings.set_background {
        slide.background = Some(settings.colors.background);
    }
}
