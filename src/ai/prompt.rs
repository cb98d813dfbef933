//! Prompt text for the report generator.

use crate::plan::{get_plan_limits, Plan};

use super::types::ChatMessage;

const SYSTEM_PROMPT: &str = "You are a professional web auditor. Reply with JSON only, exactly in the \
shape you are given. Do not inflate or deflate anything: report only real problems and scores. \
Judge the site strictly by its content and technical state. Check SEO, speed, security, content \
quality, user experience and how current the technical choices are.";

/// JSON shape the model must reproduce.
const REPORT_SHAPE: &str = r#"{
  "url": "<string>",
  "timestamp": "<ISO>",
  "performance": { "score": number, "metrics": { "loadTime": number, "firstContentfulPaint": number }, "recommendations": [string] },
  "seo": { "score": number, "issues": number, "recommendations": [string] },
  "security": { "headers": [string], "advanced": boolean },
  "content": { "score": number, "summary": string },
  "ux": { "tips": [string] },
  "techSeo": { "crawlLimit": number, "checks": [string] },
  "monitoring": { "uptime": boolean, "speed": boolean, "autoAuditWeekly": boolean },
  "competitiveAnalysis": boolean,
  "whiteLabel": boolean,
  "teamAccess": boolean,
  "autoAudit": boolean,
  "pdfExport": boolean
}"#;

/// Builds the system and user messages for one site.
pub fn build_messages(url: &str, plan: Plan) -> Vec<ChatMessage> {
    let policy = get_plan_limits(plan);
    let user = format!(
        "Analyze the site {url} for a customer on the {} plan. \
         Scores are integers from 0 to 100, times are integers in milliseconds. \
         The answer must be strictly in this format:\n{REPORT_SHAPE}",
        policy.display_name
    );
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_url_and_shape() {
        let messages = build_messages("https://example.com", Plan::Pro);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("https://example.com"));
        assert!(messages[1].content.contains("\"firstContentfulPaint\""));
        assert!(messages[1].content.contains("Pro plan"));
    }
}
