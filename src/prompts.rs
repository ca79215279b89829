//! Prompt text for promotional-post generation.
//!
//! Centralising every prompt here serves two purposes:
//!
//! 1. **Single source of truth** — changing the post style (tone, hashtag
//!    count, length limit) requires editing exactly one place.
//!
//! 2. **Testability** — unit tests can render and inspect prompts directly
//!    without calling a real model, making template regressions easy to catch.
//!
//! Callers can override the system prompt per request; the template that
//! carries the background knowledge and image description is fixed.

/// Default system prompt: a science/engineering marketing persona writing
/// Instagram copy in Korean.
///
/// Used when [`crate::service::PostRequest::system_instruction`] is empty.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
당신은 과학/공학 분야의 전문가이자 소셜 미디어 마케팅 전문가입니다.
제공된 배경 지식과 이미지를 바탕으로 인스타그램에 적합한 홍보글을 작성해야 합니다.

다음 지침을 따라주세요:
1. 전문적이면서도 대중이 이해하기 쉬운 언어를 사용하세요
2. 핵심 내용을 먼저 전달하고, 세부 내용을 부연 설명하세요
3. 적절한 이모지를 활용하여 가독성을 높이세요
4. 관련 해시태그를 5-10개 포함하세요
5. 전체 글자 수는 500자 이내로 작성하세요
6. Plain text로 작성하고, Markdown 형식을 사용하지 마세요";

/// Header introducing the background-knowledge section of the user prompt.
pub const BACKGROUND_HEADER: &str = "배경 지식:";

/// Header introducing the image-description section of the user prompt.
pub const DESCRIPTION_HEADER: &str = "이미지 설명:";

/// Fixed call-to-action closing the user prompt.
pub const CALL_TO_ACTION: &str = "위 내용을 바탕으로 인스타그램 홍보 포스트를 작성해주세요.";

/// Render the user prompt from background knowledge and an image description.
///
/// Both sections are always present, headers included, even when their
/// content is empty — the model relies on the section markers to tell
/// background material apart from the description.
pub fn render_prompt(background_knowledge: &str, image_description: &str) -> String {
    format!(
        "{BACKGROUND_HEADER}\n{background_knowledge}\n\n\
         {DESCRIPTION_HEADER}\n{image_description}\n\n\
         {CALL_TO_ACTION}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_present_when_fields_empty() {
        let prompt = render_prompt("", "");
        assert!(prompt.contains(BACKGROUND_HEADER));
        assert!(prompt.contains(DESCRIPTION_HEADER));
        assert!(prompt.ends_with(CALL_TO_ACTION));
    }

    #[test]
    fn fields_land_under_their_headers() {
        let prompt = render_prompt("article text", "a red rocket");
        let bg_pos = prompt.find("article text").unwrap();
        let desc_pos = prompt.find("a red rocket").unwrap();
        assert!(bg_pos < desc_pos, "background must precede description");
        assert!(prompt.find(BACKGROUND_HEADER).unwrap() < bg_pos);
        assert!(prompt.find(DESCRIPTION_HEADER).unwrap() < desc_pos);
    }
}
