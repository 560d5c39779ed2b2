use crate::error::Result;
use crate::guide::GuideState;
use crate::resource::ResourceLibrary;
use serde_json::Value;
use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Default cutoff below which an item is dropped from results.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Relevance of `pattern` against `text`, in [0, 1]. Case-insensitive; an
/// empty pattern or text scores 0.
///
/// A contiguous substring match scores `0.8 + coverage * 0.2` (capped at
/// 1.0), where coverage is the fraction of `text` the pattern spans. With
/// no contiguous match, a left-to-right subsequence scan earns 1.0 per
/// matched character (1.5 when the previous text character also matched),
/// and the final score is `completeness * efficiency * 0.7` with
/// efficiency capped at 1.0. A fuzzy match therefore tops out at 0.7 and
/// never outranks a substring match.
///
/// Pure function: no state, identical inputs always produce identical
/// output. Lengths are counted in chars, not bytes.
pub fn score(pattern: &str, text: &str) -> f64 {
    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();
    if pattern.is_empty() || text.is_empty() {
        return 0.0;
    }

    let pattern_len = pattern.chars().count() as f64;
    let text_len = text.chars().count() as f64;

    if text.contains(&pattern) {
        return (0.8 + (pattern_len / text_len) * 0.2).min(1.0);
    }

    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut matched = 0usize;
    let mut running = 0.0f64;
    let mut prev_matched = false;
    for ch in text.chars() {
        if matched < pattern_chars.len() && ch == pattern_chars[matched] {
            running += if prev_matched { 1.5 } else { 1.0 };
            matched += 1;
            prev_matched = true;
        } else {
            prev_matched = false;
        }
    }

    if matched == 0 {
        return 0.0;
    }
    let completeness = matched as f64 / pattern_len;
    // The consecutive bonus can push `running` past the text length, which
    // would let a dense fuzzy match clear the 0.8 substring floor or even
    // exceed 1.0. Cap efficiency so the fuzzy branch stays at or below 0.7.
    let efficiency = (running / text_len).min(1.0);
    completeness * efficiency * 0.7
}

// ---------------------------------------------------------------------------
// Multi-field search
// ---------------------------------------------------------------------------

/// A ranked item: the item's JSON representation plus its best field score.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub score: f64,
    pub item: Value,
}

/// Resolve a dotted path (`"persona.title"`) inside a JSON value to a
/// string field. Missing segments and non-string leaves yield `None`.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    current.as_str()
}

/// Max score of `query` over the named fields of `item`. Missing fields
/// contribute 0 rather than erroring.
pub fn item_score(query: &str, item: &Value, fields: &[&str]) -> f64 {
    fields
        .iter()
        .map(|f| lookup_path(item, f).map_or(0.0, |text| score(query, text)))
        .fold(0.0, f64::max)
}

/// Rank `items` against `query`, keeping those whose best field score
/// clears `threshold`, sorted descending by score.
///
/// An empty query (or empty input) returns everything unfiltered in input
/// order. Equal scores keep input order: the sort is stable and compares
/// on score alone.
pub fn search_many_scored(
    query: &str,
    items: Vec<Value>,
    fields: &[&str],
    threshold: f64,
) -> Vec<SearchHit> {
    if query.is_empty() || items.is_empty() {
        return items
            .into_iter()
            .map(|item| SearchHit { score: 0.0, item })
            .collect();
    }

    let mut hits: Vec<SearchHit> = items
        .into_iter()
        .map(|item| SearchHit {
            score: item_score(query, &item, fields),
            item,
        })
        .filter(|hit| hit.score >= threshold)
        .collect();
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}

// ---------------------------------------------------------------------------
// Guide-wide search
// ---------------------------------------------------------------------------

/// Fields scored when searching across the whole guide. Candidates missing
/// a field contribute 0 for it.
pub const GUIDE_FIELDS: &[&str] = &["title", "role_summary", "summary", "url", "industry"];

/// Flatten personas, stages, and resources into search candidates, each
/// tagged with its kind so results can say what they are.
pub fn guide_candidates(state: &GuideState, library: &ResourceLibrary) -> Result<Vec<Value>> {
    let mut items = Vec::new();
    for p in &state.personas {
        let mut v = serde_json::to_value(p)?;
        v["kind"] = "persona".into();
        items.push(v);
    }
    for s in &state.stages {
        let mut v = serde_json::to_value(s)?;
        v["kind"] = "stage".into();
        items.push(v);
    }
    for r in &library.items {
        let mut v = serde_json::to_value(r)?;
        v["kind"] = "resource".into();
        items.push(v);
    }
    Ok(items)
}

/// As `search_many_scored`, returning just the items.
pub fn search_many(query: &str, items: Vec<Value>, fields: &[&str], threshold: f64) -> Vec<Value> {
    search_many_scored(query, items, fields, threshold)
        .into_iter()
        .map(|hit| hit.item)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(score("", "anything"), 0.0);
        assert_eq!(score("x", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
    }

    #[test]
    fn substring_uses_coverage_formula() {
        // "concatenate" is 11 chars, pattern covers 3 of them
        let expected = 0.8 + (3.0 / 11.0) * 0.2;
        assert!((score("cat", "concatenate") - expected).abs() < EPS);
    }

    #[test]
    fn exact_full_match_scores_one() {
        assert!((score("cat", "cat") - 1.0).abs() < EPS);
    }

    #[test]
    fn subsequence_below_exact() {
        // "ct" in "cat": both chars match, non-consecutive
        let fuzzy = score("ct", "cat");
        let exact = score("cat", "cat");
        assert!(fuzzy > 0.0);
        assert!(fuzzy < exact);
    }

    #[test]
    fn subsequence_formula() {
        // "ct" vs "cat": running = 1.0 + 1.0, completeness = 1, efficiency = 2/3
        let expected = 1.0 * (2.0 / 3.0) * 0.7;
        assert!((score("ct", "cat") - expected).abs() < EPS);
    }

    #[test]
    fn consecutive_bonus_rewards_runs() {
        // Same chars matched, but "abc" runs together in "abcx" and is
        // broken up in "axbxcx" — the contiguous-substring branch takes
        // the first, so compare two genuinely fuzzy cases instead.
        let tight = score("abc", "abxc"); // "ab" consecutive: 1.0 + 1.5 + 1.0
        let loose = score("abc", "axbc"); // "bc" consecutive too; same total
        assert!((tight - loose).abs() < EPS);
        let scattered = score("abc", "axbxcx");
        assert!(tight > scattered);
    }

    #[test]
    fn substring_never_below_subsequence() {
        let substring = score("compli", "Chief Compliance Officer");
        let subsequence = score("cpl", "Chief Compliance Officer");
        assert!(substring >= subsequence);
        assert!(substring >= 0.8);
    }

    #[test]
    fn dense_fuzzy_match_stays_below_substring() {
        // One gap, seven matched chars: the consecutive bonus makes the raw
        // running score exceed the text length, so without the efficiency
        // cap this fuzzy match would beat a substring match in a long field.
        let fuzzy = score("abcdefg", "abcxdefg");
        let exact = score(
            "abcdefg",
            "abcdefg appears once in this fairly long descriptive field",
        );
        assert!(fuzzy <= 0.7 + EPS);
        assert!(exact >= 0.8);
        assert!(fuzzy < exact);
    }

    #[test]
    fn fuzzy_score_never_exceeds_one() {
        // A long pattern split by a single non-matching char earns enough
        // consecutive bonus to push the uncapped product past 1.0.
        let pattern = "a".repeat(40);
        let text = format!("{}!{}", "a".repeat(20), "a".repeat(20));
        let s = score(&pattern, &text);
        assert!(s <= 1.0);
        assert!(s <= 0.7 + EPS);
        assert!(s > 0.0);
    }

    #[test]
    fn case_insensitive() {
        assert!((score("CAT", "cat food") - score("cat", "cat food")).abs() < EPS);
        assert!((score("cat", "CAT FOOD") - score("cat", "cat food")).abs() < EPS);
    }

    #[test]
    fn no_shared_chars_scores_zero() {
        assert_eq!(score("xyz", "compliance"), 0.0);
    }

    #[test]
    fn score_is_pure() {
        let a = score("qual", "qualification checklist");
        let b = score("qual", "qualification checklist");
        assert_eq!(a, b);
    }

    // -----------------------------------------------------------------------
    // lookup_path / search_many
    // -----------------------------------------------------------------------

    #[test]
    fn lookup_path_resolves_nested_fields() {
        let item = json!({"persona": {"title": "CFO"}, "tags": ["x"]});
        assert_eq!(lookup_path(&item, "persona.title"), Some("CFO"));
        assert_eq!(lookup_path(&item, "persona.missing"), None);
        assert_eq!(lookup_path(&item, "tags"), None); // not a string leaf
    }

    #[test]
    fn missing_field_scores_zero() {
        let item = json!({"title": "Security review"});
        assert_eq!(item_score("security", &item, &["description"]), 0.0);
        assert!(item_score("security", &item, &["description", "title"]) > 0.0);
    }

    fn sample_items() -> Vec<Value> {
        vec![
            json!({"title": "Chief Compliance Officer"}),
            json!({"title": "Head of Billing"}),
        ]
    }

    #[test]
    fn empty_query_returns_items_unchanged() {
        let results = search_many("", sample_items(), &["title"], DEFAULT_THRESHOLD);
        assert_eq!(results, sample_items());
    }

    #[test]
    fn empty_items_stay_empty() {
        let results = search_many("anything", vec![], &["title"], DEFAULT_THRESHOLD);
        assert!(results.is_empty());
    }

    #[test]
    fn no_match_above_threshold_returns_empty() {
        let results = search_many("zzz-no-match", sample_items(), &["title"], 0.5);
        assert!(results.is_empty());
    }

    #[test]
    fn substring_match_wins_end_to_end() {
        // "Head of Billing" has no 'c', so "compli" matches zero chars
        let hits = search_many_scored("compli", sample_items(), &["title"], DEFAULT_THRESHOLD);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item["title"], "Chief Compliance Officer");
        assert!(hits[0].score >= 0.8);
    }

    #[test]
    fn results_sorted_descending() {
        let items = vec![
            json!({"title": "pricing notes"}),
            json!({"title": "pricing"}),
        ];
        let hits = search_many_scored("pricing", items, &["title"], DEFAULT_THRESHOLD);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].score >= hits[1].score);
        assert_eq!(hits[0].item["title"], "pricing");
    }

    #[test]
    fn guide_candidates_tag_their_kind() {
        let state = crate::guide::GuideState::seeded();
        let mut library = crate::resource::ResourceLibrary::default();
        library.add(crate::resource::Resource::new(
            "Pricing one-pager",
            "https://example.com/pricing.pdf",
            crate::types::ResourceType::Doc,
        ));

        let items = guide_candidates(&state, &library).unwrap();
        assert_eq!(items.len(), state.personas.len() + state.stages.len() + 1);
        assert!(items.iter().any(|v| v["kind"] == "persona"));
        assert!(items.iter().any(|v| v["kind"] == "stage"));
        assert!(items.iter().any(|v| v["kind"] == "resource"));
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec![
            json!({"title": "demo deck", "id": 1}),
            json!({"title": "demo deck", "id": 2}),
        ];
        let hits = search_many_scored("demo", items, &["title"], DEFAULT_THRESHOLD);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].item["id"], 1);
        assert_eq!(hits[1].item["id"], 2);
    }
}
