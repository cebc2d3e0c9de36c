//! Image prompt builder for the thumbnail feature.

use kreasi_models::{ThumbnailRequest, ThumbnailVariation};

/// Build the image-generation prompt for one compositional variation.
pub fn build_image_prompt(request: &ThumbnailRequest, variation: ThumbnailVariation) -> String {
    let text_rule = if request.include_text {
        format!(
            "Include text (Language: {}) that matches the vibe.",
            request.language
        )
    } else {
        "No text.".to_string()
    };

    let mut prompt = format!(
        r#"Create a high-quality YouTube thumbnail.
Format: {orientation}.
Aspect Ratio: {aspect_ratio}.
Target Resolution: {resolution}.
Style: {style}.
Description: {description}.
{text_rule}
Variation: {variation}.
Make it high contrast, click-worthy, and professional."#,
        orientation = request.orientation,
        aspect_ratio = request.orientation.aspect_ratio(),
        resolution = request.orientation.resolution(),
        style = request.style_text(),
        description = request.description,
        text_rule = text_rule,
        variation = variation.directive(),
    );

    if request.reference_image.is_some() {
        prompt.push_str(
            " IMPORTANT: Use the person/character in the attached image as the main subject of the thumbnail. Maintain their likeness.",
        );
    }

    prompt
}
