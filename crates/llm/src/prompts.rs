//! Prompt composition for enhancements

/// Line placed around the transcript label
pub const SEPARATOR: &str = "---";

/// Label introducing the transcript
pub const TRANSCRIPT_LABEL: &str = "TRANSCRIPT:";

/// Prompt for one template: the template text followed by the transcript
///
/// The transcript is appended verbatim and always ends the prompt.
pub fn enhancement_prompt(template_prompt: &str, transcript: &str) -> String {
    format!(
        "{}\n\n{}\n{}\n{}\n{}",
        template_prompt, SEPARATOR, TRANSCRIPT_LABEL, SEPARATOR, transcript
    )
}
