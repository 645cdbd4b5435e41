use super::Language;

pub const PROMPT_TEMPLATE: &str = "Generate {language} code for: {request}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(language: Language, request: &str) -> String {
    // {language} and {request} are placeholders for string replacement, not format arguments
    PROMPT_TEMPLATE
        .replace("{language}", language.name())
        .replace("{request}", request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt(Language::Python, "reverse a list");
        assert_eq!(prompt, "Generate Python code for: reverse a list");
    }

    #[test]
    fn test_build_prompt_keeps_request_verbatim() {
        let prompt = build_prompt(Language::Cpp, "  sort\nnumbers  ");
        assert_eq!(prompt, "Generate C++ code for:   sort\nnumbers  ");
    }

    #[test]
    fn test_request_containing_placeholder_text() {
        let prompt = build_prompt(Language::Java, "print {language}");
        assert_eq!(prompt, "Generate Java code for: print {language}");
    }
}
