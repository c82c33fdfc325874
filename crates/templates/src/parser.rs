/// Marker that opens a new template (a level-one heading)
pub const HEADING_MARKER: &str = "# ";

/// Named prompt taken from the template document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Heading text without the marker
    pub title: String,

    /// Body lines under the heading
    pub prompt: String,
}

impl Template {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
        }
    }
}

/// Split a template document into templates, in document order
///
/// Every line starting with `"# "` opens a template; the lines below it, up
/// to the next heading, form its prompt. Headings without a body and text
/// above the first heading are dropped.
pub fn parse_templates(content: &str) -> Vec<Template> {
    let mut templates = Vec::new();
    let mut title: Option<&str> = None;
    let mut prompt = String::new();

    for line in content.lines() {
        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            flush(&mut templates, title, &prompt);
            title = Some(heading);
            prompt.clear();
        } else {
            prompt.push_str(line);
            prompt.push('\n');
        }
    }

    flush(&mut templates, title, &prompt);

    templates
}

fn flush(templates: &mut Vec<Template>, title: Option<&str>, prompt: &str) {
    let Some(title) = title.map(str::trim) else {
        return;
    };
    let prompt = prompt.trim();

    if !title.is_empty() && !prompt.is_empty() {
        templates.push(Template::new(title, prompt));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(templates: &[Template]) -> String {
        templates
            .iter()
            .map(|t| format!("{}{}\n{}", HEADING_MARKER, t.title, t.prompt))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_no_headings() {
        assert!(parse_templates("").is_empty());
        assert!(parse_templates("Just some text.\nAnother line.\n").is_empty());
        assert!(parse_templates("## Subheading\nbody\n#NoSpace\nbody").is_empty());
    }

    #[test]
    fn test_two_templates_in_order() {
        let doc = "# Summary\nWrite a summary.\n# Action Items\nList action items.\n";
        let templates = parse_templates(doc);

        assert_eq!(
            templates,
            vec![
                Template::new("Summary", "Write a summary."),
                Template::new("Action Items", "List action items."),
            ]
        );
    }

    #[test]
    fn test_heading_without_body_is_dropped() {
        assert!(parse_templates("# OnlyTitle\n").is_empty());
        assert!(parse_templates("# OnlyTitle").is_empty());

        let doc = "# Empty\n\n   \n# Filled\nDo the thing.\n# Trailing\n";
        let templates = parse_templates(doc);
        assert_eq!(templates, vec![Template::new("Filled", "Do the thing.")]);
    }

    #[test]
    fn test_blank_title_is_dropped() {
        let templates = parse_templates("#   \nOrphan body\n# Real\nBody\n");
        assert_eq!(templates, vec![Template::new("Real", "Body")]);
    }

    #[test]
    fn test_leading_content_is_dropped() {
        let doc = "Template library v2\nIntro text.\n\n# Notes\nTake notes.\n";
        let templates = parse_templates(doc);
        assert_eq!(templates, vec![Template::new("Notes", "Take notes.")]);
    }

    #[test]
    fn test_prompt_keeps_inner_line_breaks() {
        let doc = "#  Meeting Minutes  \n\nLine one.\n\n- bullet a\n- bullet b\n\n";
        let templates = parse_templates(doc);

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].title, "Meeting Minutes");
        assert_eq!(templates[0].prompt, "Line one.\n\n- bullet a\n- bullet b");
    }

    #[test]
    fn test_crlf_document() {
        let doc = "# Summary\r\nWrite a summary.\r\nKeep it short.\r\n";
        let templates = parse_templates(doc);
        assert_eq!(
            templates,
            vec![Template::new("Summary", "Write a summary.\nKeep it short.")]
        );
    }

    #[test]
    fn test_duplicate_titles_are_kept() {
        let doc = "# Recap\nFirst.\n# Recap\nSecond.\n";
        let templates = parse_templates(doc);
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].prompt, "First.");
        assert_eq!(templates[1].prompt, "Second.");
    }

    #[test]
    fn test_heading_marker_inside_body_splits() {
        let doc = "# Outline\nUse this format:\n# Heading\nText\n";
        let titles: Vec<_> = parse_templates(doc).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Outline", "Heading"]);
    }

    #[test]
    fn test_count_matches_headings_with_body() {
        let doc = "intro\n# A\nbody a\n# B\n\n# C\n  \n  c  \n# D\n# E\nbody e";
        // A, C and E have a non-blank line before the next heading
        assert_eq!(parse_templates(doc).len(), 3);
    }

    #[test]
    fn test_reparse_is_stable() {
        let doc = "preamble\n# First\n\nAlpha\n\nBeta\n# Empty\n# Second\n  Gamma  \n";
        let templates = parse_templates(doc);
        assert_eq!(templates.len(), 2);

        let reparsed = parse_templates(&render(&templates));
        assert_eq!(reparsed, templates);
    }
}
