//! Skill name normalization and set matching.
//!
//! Free-text skill tokens ("Node", "NodeJS", "node.js", "node js") are
//! reconciled onto canonical keys before any comparison. Normalization never
//! fails: an unknown skill degrades to its cleaned literal form, which
//! simply will not match anything else, which is the correct semantic.

mod aliases;

/// Result of matching a required skill list against a candidate's skills.
/// `matched` and `missing` carry the required skills in their original
/// spelling and order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillSetMatch {
    pub score: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Cleans a raw token: lower-case, punctuation other than `.` `+` `#`
/// replaced by spaces, whitespace runs collapsed.
pub(crate) fn normalize_token(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '+' | '#') {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes a trailing `.js` / `js` suffix for a second alias lookup, so
/// "expressjs" still resolves when only "express" is known. Returns `None`
/// when there is nothing meaningful left after stripping.
fn strip_js_suffix(cleaned: &str) -> Option<String> {
    let stripped = cleaned
        .strip_suffix(".js")
        .or_else(|| cleaned.strip_suffix("js"))?;
    let stripped = stripped.trim_end();
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_string())
}

/// Canonicalizes a skill string: clean, look up the alias table, retry
/// without a `js` suffix, fall back to the cleaned token itself.
pub fn normalize(skill: &str) -> String {
    let cleaned = normalize_token(skill);
    if let Some(canonical) = aliases::lookup(&cleaned) {
        return canonical.to_string();
    }
    if let Some(stripped) = strip_js_suffix(&cleaned) {
        if let Some(canonical) = aliases::lookup(&stripped) {
            return canonical.to_string();
        }
    }
    cleaned
}

/// Whether two free-text skills refer to the same thing: equal canonical
/// forms, or one normalized form containing the other.
pub fn matches(a: &str, b: &str) -> bool {
    let na = normalize(a);
    let nb = normalize(b);
    if na.is_empty() || nb.is_empty() {
        return false;
    }
    na == nb || na.contains(&nb) || nb.contains(&na)
}

/// Matches every required skill against the candidate list.
///
/// Score is the rounded percentage of required skills covered. An empty
/// requirement list scores 100 (nothing to miss); an empty candidate list
/// against a non-empty requirement scores 0 with everything missing.
pub fn match_set(required: &[String], candidate: &[String]) -> SkillSetMatch {
    if required.is_empty() {
        return SkillSetMatch {
            score: 100,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for req in required {
        if candidate.iter().any(|c| matches(req, c)) {
            matched.push(req.clone());
        } else {
            missing.push(req.clone());
        }
    }

    let score = (matched.len() as f64 * 100.0 / required.len() as f64).round() as u8;
    SkillSetMatch {
        score,
        matched,
        missing,
    }
}
