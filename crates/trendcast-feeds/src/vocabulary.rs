//! AI trend vocabulary used to tag raw signals with canonical keywords.

/// Surface word → canonical keyword.
///
/// Keys are lowercase single tokens as they appear in titles. Several surface
/// forms collapse onto one canonical keyword so tag sets merge cleanly across
/// feeds.
pub(crate) const VOCABULARY: &[(&str, &str)] = &[
    // Agents & automation
    ("agent", "agents"),
    ("agents", "agents"),
    ("agentic", "agents"),
    ("automation", "automation"),
    ("automate", "automation"),
    ("automated", "automation"),
    ("automating", "automation"),
    ("workflow", "workflows"),
    ("workflows", "workflows"),
    ("copilot", "copilots"),
    ("copilots", "copilots"),
    ("chatbot", "chatbots"),
    ("chatbots", "chatbots"),
    // Models & labs
    ("ai", "ai"),
    ("gpt", "gpt"),
    ("chatgpt", "chatgpt"),
    ("openai", "openai"),
    ("anthropic", "anthropic"),
    ("claude", "claude"),
    ("gemini", "gemini"),
    ("llama", "llama"),
    ("mistral", "mistral"),
    ("deepseek", "deepseek"),
    ("llm", "llm"),
    ("llms", "llm"),
    ("model", "models"),
    ("models", "models"),
    ("rag", "rag"),
    ("api", "api"),
    ("apis", "api"),
    ("open-source", "open-source"),
    ("opensource", "open-source"),
    ("benchmark", "benchmarks"),
    ("benchmarks", "benchmarks"),
    // Market
    ("funding", "funding"),
    ("raises", "funding"),
    ("raised", "funding"),
    ("investment", "funding"),
    ("valuation", "funding"),
    ("regulation", "regulation"),
    ("regulators", "regulation"),
    ("regulate", "regulation"),
    ("policy", "policy"),
    ("lawsuit", "lawsuit"),
    ("sues", "lawsuit"),
    ("sued", "lawsuit"),
    ("acquisition", "acquisition"),
    ("acquires", "acquisition"),
    ("chip", "chips"),
    ("chips", "chips"),
    ("gpu", "chips"),
    ("gpus", "chips"),
    ("nvidia", "nvidia"),
    ("startup", "startups"),
    ("startups", "startups"),
    // Modalities & use cases
    ("robot", "robotics"),
    ("robots", "robotics"),
    ("robotics", "robotics"),
    ("vision", "vision"),
    ("video", "video"),
    ("image", "images"),
    ("images", "images"),
    ("voice", "voice"),
    ("coding", "coding"),
    ("developer", "developers"),
    ("developers", "developers"),
    ("safety", "safety"),
    ("alignment", "safety"),
];

/// Extract canonical keywords from free text.
///
/// Splits on whitespace and `/`, trims surrounding punctuation, lowercases,
/// and looks each token up in [`VOCABULARY`]. Hyphenated tokens that miss
/// (`gpt-5`) retry with their leading segment (`gpt`). Returns keywords in
/// first-seen order without duplicates.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for raw in text.split(|c: char| c.is_whitespace() || c == '/') {
        let token = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if token.is_empty() {
            continue;
        }

        let canonical = lookup(&token).or_else(|| {
            token
                .split_once('-')
                .and_then(|(head, _)| lookup(head))
        });

        if let Some(keyword) = canonical {
            if !keywords.iter().any(|k| k == keyword) {
                keywords.push(keyword.to_string());
            }
        }
    }

    keywords
}

fn lookup(token: &str) -> Option<&'static str> {
    VOCABULARY
        .iter()
        .find(|&&(word, _)| word == token)
        .map(|&(_, canonical)| canonical)
}
