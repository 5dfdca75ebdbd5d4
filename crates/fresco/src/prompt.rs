//! Prompt construction for the image fan-out.

/// The shared image prompt, derived deterministically from the idea.
///
/// All three platforms use the same prompt; only the aspect ratio differs
/// per platform.
///
/// # Examples
///
/// ```
/// use fresco::prompt::image_prompt;
///
/// let prompt = image_prompt("launch of a productivity app");
/// assert!(prompt.contains("\"launch of a productivity app\""));
/// ```
pub fn image_prompt(idea: &str) -> String {
    format!(
        "A visually appealing, high-quality image representing the concept of: \"{idea}\". \
         Style should be modern and engaging."
    )
}
