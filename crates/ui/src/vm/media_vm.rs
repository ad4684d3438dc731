use academy_core::model::GeneratedImage;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Inline `src` for a generated image.
#[must_use]
pub fn image_data_url(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type(),
        STANDARD.encode(image.bytes())
    )
}

#[must_use]
pub fn swatch_style(color: &str) -> String {
    format!("background-color: {color};")
}
