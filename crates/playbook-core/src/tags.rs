// ---------------------------------------------------------------------------
// Tag suggestion
//
// A fixed keyword-containment table, not a model: if the lowercased text
// contains the keyword, the paired tag is suggested. Several keywords can
// map to the same tag; suggestions come back deduplicated, in table order.
// ---------------------------------------------------------------------------

const KEYWORD_TAGS: &[(&str, &str)] = &[
    ("security", "compliance"),
    ("compliance", "compliance"),
    ("audit", "compliance"),
    ("gdpr", "compliance"),
    ("price", "pricing"),
    ("pricing", "pricing"),
    ("cost", "pricing"),
    ("budget", "pricing"),
    ("discount", "pricing"),
    ("demo", "demo"),
    ("walkthrough", "demo"),
    ("integration", "integration"),
    ("api", "integration"),
    ("sso", "integration"),
    ("onboard", "onboarding"),
    ("training", "onboarding"),
    ("case study", "case-study"),
    ("customer story", "case-study"),
    ("roi", "roi"),
    ("return on investment", "roi"),
    ("contract", "legal"),
    ("legal", "legal"),
    ("procurement", "legal"),
];

/// Suggest tags for a piece of content. Pure table lookup; unknown text
/// yields no suggestions.
pub fn suggest(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for (keyword, tag) in KEYWORD_TAGS {
        if text.contains(keyword) && !out.iter().any(|t| t == tag) {
            out.push((*tag).to_string());
        }
    }
    out
}

/// As `suggest`, minus tags the record already carries.
pub fn suggest_new(text: &str, existing: &[String]) -> Vec<String> {
    suggest(text)
        .into_iter()
        .filter(|tag| !existing.contains(tag))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
