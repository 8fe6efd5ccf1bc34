//! Instruction templates for the two request kinds.
//!
//! Rendering is pure string construction: identical inputs yield
//! byte-identical instructions. Whether the remote model honors the
//! structure it is given is its own responsibility.

use crate::settings::Settings;

/// Fixed clause prepended to every generated prompt.
pub const QUALITY_MODIFIERS: &str =
    "Masterpiece, hyperdetailed, 8k, editorial photography, highly polished,";

/// Note appended to the strict parameters when a reference image accompanies
/// the text-optimization request.
pub const IMAGE_REFERENCE_NOTE: &str =
    "- An image was provided for style, color, and composition reference.";

/// Instruction pair for a text-optimization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInstructions {
    pub system: String,
    pub user: String,
}

/// Render the system and user instructions for optimizing a base prompt.
pub fn render_optimization(
    base_prompt: &str,
    settings: &Settings,
    has_image: bool,
) -> RenderedInstructions {
    let system = format!(
        "You are an expert prompt engineer for a high-fidelity, photorealistic AI image \
         generator. Your signature style emphasizes {focus}, cinematic lighting, and \
         controlled composition. Your output MUST be a single block of text, which is the \
         final, optimized prompt, ready to be copied. Do not add any conversational text, \
         explanations, or markdown formatting like ```.",
        focus = settings.cultural_focus.as_str(),
    );

    let image_note = if has_image {
        format!("\n{IMAGE_REFERENCE_NOTE}")
    } else {
        String::new()
    };

    let user = format!(
        "Base idea: \"{base_prompt}\"\n\
         \n\
         Strict parameters to incorporate:\n\
         - Output Style: {style}\n\
         - Perspective: {perspective}\n\
         - Lighting: {lighting}\n\
         - Cultural Focus: {focus}{image_note}\n\
         \n\
         Follow this exact structure for the final prompt:\n\
         1. **Quality Modifiers (PREPENDED):** Start with \"{QUALITY_MODIFIERS}\".\n\
         2. **Subject & Environment:** Refine the base idea. Be specific about the \
         subject's ethnicity/culture ({focus}), their attire (e.g., \"sleek senator wear \
         in rich kente cloth\"), and place them in a clean, minimalist environment (e.g., \
         \"on a matte black surface\", \"with royal blue reflections\", \"no text or logos \
         in the background\").\n\
         3. **Composition:** Inject technical terms for perspective like \
         \"{perspective}\". If the base prompt is vague, default to \"Centered, \
         Symmetrical composition\". Always include \"Shallow Depth of Field\".\n\
         4. **Lighting & Mood:** Use terms that match \"{lighting}\". Be specific, like \
         \"Cinematic side lighting\", \"Volumetric light\", and \"soft, diffused \
         shadows\". Enforce mood terms like \"Luxurious\", \"Refined\", \"Dramatic\".\n\
         5. **Image Reference (if applicable):** If a reference image was provided, add \
         tags like \"--style_ref --color_ref\" at the very end.\n\
         \n\
         Now, generate the single, complete, optimized prompt for the base idea provided.",
        style = settings.output_style.as_str(),
        perspective = settings.perspective.as_str(),
        lighting = settings.lighting.as_str(),
        focus = settings.cultural_focus.as_str(),
    );

    RenderedInstructions { system, user }
}

/// Fixed instruction for analyzing a reference image into a prompt.
///
/// Takes no per-call parameters; the image itself travels as a separate
/// multimodal part alongside this text.
pub fn render_image_analysis() -> &'static str {
    "Analyze the provided image in detail. As an expert prompt engineer, generate a \
         rich, descriptive text prompt suitable for an AI image generator. The prompt \
         must be a single block of text without any other explanations or markdown.\n\
         \n\
         Follow these style conventions:\n\
         - Style: Photorealistic, cinematic, luxurious, and refined.\n\
         - Core Elements: Focus on subject, environment, perspective, lighting, and color.\n\
         \n\
         Your analysis should include:\n\
         - Subject: Describe the person(s) or main focus, including perceived ethnicity, \
         high-fashion or culturally specific clothing, pose, and expression.\n\
         - Environment: Detail the background, props, textures. Emphasize clean, \
         minimalist, or atmospheric surfaces. Note if there should be 'no text or logos'.\n\
         - Perspective & Composition: Identify the camera angle (e.g., low angle, \
         eye-level, centered symmetrical), framing, and depth of field.\n\
         - Lighting & Mood: Describe the lighting setup (e.g., cinematic side lighting, \
         volumetric light, studio softbox, dramatic low key), shadow quality (soft, \
         diffused), highlights, and the overall mood.\n\
         - Color Palette: Note the dominant colors and any significant accent colors.\n\
         \n\
         Structure the final prompt:\n\
         1. Prepend with quality modifiers: \
         \"Masterpiece, hyperdetailed, 8k, editorial photography, highly polished,\".\n\
         2. Weave the analyzed details into a cohesive and compelling description.\n\
         \n\
         Generate the final prompt now."
}
