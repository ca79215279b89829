//! Prompt assembly: extracted article texts + image description → one prompt.
//!
//! Pure string work, deliberately dumb: articles are joined with a single
//! newline in submission order (no reordering, no deduplication, no
//! truncation) and dropped into the fixed template from [`crate::prompts`].
//! If the combined text is huge, that risk rides through to the model call —
//! length policy belongs to the caller, not to this stage.

use crate::prompts::render_prompt;

/// Join article texts and render the user prompt.
///
/// The order of `article_texts` equals the order of document submission and
/// is preserved verbatim. An empty slice yields an empty background section;
/// the template headers are still present.
pub fn assemble_prompt(article_texts: &[String], image_description: &str) -> String {
    let background_knowledge = article_texts.join("\n");
    render_prompt(&background_knowledge, image_description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::{BACKGROUND_HEADER, DESCRIPTION_HEADER};

    #[test]
    fn empty_documents_keep_template_headers() {
        let prompt = assemble_prompt(&[], "a telescope");
        assert!(prompt.contains(BACKGROUND_HEADER));
        assert!(prompt.contains(DESCRIPTION_HEADER));
        assert!(prompt.contains("a telescope"));
    }

    #[test]
    fn articles_joined_in_submission_order() {
        let texts = vec![
            "<article>first</article>".to_string(),
            "<article>second</article>".to_string(),
            "<article>third</article>".to_string(),
        ];
        let prompt = assemble_prompt(&texts, "");
        let joined = "<article>first</article>\n<article>second</article>\n<article>third</article>";
        assert!(prompt.contains(joined), "got: {prompt}");
    }

    #[test]
    fn duplicate_articles_are_not_deduplicated() {
        let texts = vec!["<article>same</article>".to_string(); 2];
        let prompt = assemble_prompt(&texts, "");
        assert!(prompt.contains("<article>same</article>\n<article>same</article>"));
    }
}
