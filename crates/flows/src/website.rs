use promptforge_core::{ValidationError, WebsiteCode, WebsiteRequest};
use serde_json::{json, Value};

use crate::executor::Flow;

/// Generates a complete single-component React/Tailwind website from a
/// prompt.
pub struct GenerateWebsite;

impl Flow for GenerateWebsite {
    type Input = WebsiteRequest;
    type Output = WebsiteCode;

    const NAME: &'static str = "website_code";

    fn validate(input: &Self::Input) -> Result<(), ValidationError> {
        input.validate()
    }

    fn render(input: &Self::Input) -> String {
        format!(
            r#"You are an expert web developer who creates beautiful, modern, and responsive single-page websites using React and Tailwind CSS.
Your task is to generate the complete code for a single React component that represents the entire website based on the user's prompt.

**User's Prompt:**
"{prompt}"

**Instructions & Best Practices:**

1.  **Single Component:** The entire website must be contained within a single exported React functional component. Do not create multiple components or files.
2.  **React & JSX:** Use React with JSX syntax. All elements must be standard HTML tags (div, h1, p, etc.) or SVG for icons. Do not import any external components.
3.  **Styling:** Use Tailwind CSS classes for all styling. Do not use CSS-in-JS, style objects, or `<style>` tags. Ensure the design is modern, clean, and visually appealing.
4.  **Responsiveness:** The layout must be fully responsive and look great on all screen sizes (mobile, tablet, desktop). Use Tailwind's responsive prefixes (e.g., `md:`, `lg:`).
5.  **Icons:** Use inline SVG for all icons. Do not use an icon library.
6.  **Images:** Use placeholder images from `https://picsum.photos/`. For example: `https://picsum.photos/seed/1/800/600`.
7.  **Structure:** The generated code should be well-structured and easy to read. Include sections like a hero, features, call-to-action, and a footer.
8.  **No Imports/Exports:** The generated code should not contain any `import` or `export` statements other than the main component export. It should be a self-contained block of JSX.
9.  **Dependencies:** Assume the project has React and Tailwind CSS installed. Do not add any other dependencies.
10. **Code Only:** The code field must contain only the raw JSX for the component. Do not wrap it in markdown code blocks or add any explanations.

Now, generate the complete, self-contained React component code for the user's prompt."#,
            prompt = input.prompt
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "code": {
                    "type": "STRING",
                    "description": "The generated React component code for the single-page website."
                }
            },
            "required": ["code"]
        })
    }

    fn check_output(output: &Self::Output) -> Result<(), ValidationError> {
        output.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_prompt() {
        let input = WebsiteRequest {
            prompt: "A landing page for a local coffee roastery".to_string(),
        };
        let prompt = GenerateWebsite::render(&input);

        assert!(prompt.contains("\"A landing page for a local coffee roastery\""));
        assert!(prompt.contains("Tailwind CSS"));
    }

    #[test]
    fn test_schema_requires_code() {
        let schema = GenerateWebsite::response_schema();
        assert_eq!(schema["required"][0], "code");
    }
}
