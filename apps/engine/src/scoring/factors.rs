//! Per-factor sub-scores. Every function here is pure, total, and returns a
//! value already inside 0-100.

use crate::models::{CandidateProfile, Education, ExperienceLevel, Project};
use crate::skills;

/// Postgraduate degree markers, matched case-insensitively against the
/// degree string.
const POSTGRADUATE_PATTERNS: &[&str] = &["master", "msc", "mca", "phd"];
const BACHELOR_PATTERNS: &[&str] = &["bachelor", "bsc", "btech", "b.tech", "bca"];

/// Re-buckets a raw 0-100 signal into coarse tiers, damping noise from
/// near-miss percentages.
pub(crate) fn bucket_signal(raw: u8) -> u8 {
    match raw {
        80..=u8::MAX => 100,
        60..=79 => 85,
        40..=59 => 70,
        20..=39 => 50,
        _ => 30,
    }
}

/// External signal factor (code activity / algorithmic). Zero-weight
/// categories force 0; an absent signal scores 0 and surfaces as a risk;
/// a present signal, even a poor one, goes through the tier bucketing.
pub(crate) fn signal_factor(raw: Option<u8>, weight: u8) -> u8 {
    if weight == 0 {
        return 0;
    }
    match raw {
        Some(value) => bucket_signal(value.min(100)),
        None => 0,
    }
}

/// Fit between the candidate's years of experience and the level's band.
pub(crate) fn experience_factor(level: ExperienceLevel, years: f64) -> u8 {
    let (lo, hi) = level.year_range();
    let within = years >= lo && hi.map_or(true, |h| years <= h);
    if within {
        return 100;
    }
    if let Some(h) = hi {
        if years > h {
            // Overqualified: mild penalty up to 3 years over, then steeper.
            return if years <= h + 3.0 { 90 } else { 70 };
        }
    }
    if years < lo {
        return if years >= lo - 1.0 { 75 } else { 40 };
    }
    50
}

/// Education strength from degrees and certifications.
pub(crate) fn education_factor(education: &[Education], certifications: &[String]) -> u8 {
    let mut score: u32 = if education.is_empty() && certifications.is_empty() {
        20
    } else {
        40
    };

    let has_postgraduate = education
        .iter()
        .any(|e| degree_matches(&e.degree, POSTGRADUATE_PATTERNS));
    if has_postgraduate {
        score += 30;
    } else if education
        .iter()
        .any(|e| degree_matches(&e.degree, BACHELOR_PATTERNS))
    {
        score += 20;
    }

    score += (education.len().saturating_sub(1) as u32 * 10).min(20);
    score += (certifications.len() as u32 * 5).min(20);

    score.min(100) as u8
}

fn degree_matches(degree: &str, patterns: &[&str]) -> bool {
    let lowered = degree.to_lowercase();
    patterns.iter().any(|p| lowered.contains(p))
}

/// Weighted checklist of profile fields. Sums to at most 100 by construction.
pub(crate) fn completeness_factor(profile: &CandidateProfile) -> u8 {
    let mut score = 0u8;
    if !profile.skills.is_empty() {
        score += 20;
    }
    if profile.resume_text_len() > 0 {
        score += 20;
    }
    if !profile.experience.is_empty() {
        score += 15;
    }
    if !profile.education.is_empty() {
        score += 15;
    }
    if non_empty(&profile.github_username) {
        score += 10;
    }
    if non_empty(&profile.linkedin_url) {
        score += 5;
    }
    if non_empty(&profile.portfolio_url) {
        score += 5;
    }
    if !profile.projects.is_empty() {
        score += 10;
    }
    score
}

fn non_empty(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// How well the candidate's projects line up with the job's skills. A
/// project counts as relevant when at least one required skill appears in
/// its tech stack; relevant projects earn a small per-project bonus.
pub(crate) fn project_relevance_factor(job_skills: &[String], projects: &[Project]) -> u8 {
    let mut relevant_scores: Vec<f64> = Vec::new();
    for project in projects {
        let matched = skills::match_set(job_skills, &project.tech_stack);
        if !matched.matched.is_empty() {
            relevant_scores.push(matched.score as f64);
        }
    }

    if relevant_scores.is_empty() {
        return 0;
    }

    let average = relevant_scores.iter().sum::<f64>() / relevant_scores.len() as f64;
    let bonus = (relevant_scores.len() as f64 * 5.0).min(20.0);
    (average + bonus).round().min(100.0) as u8
}

/// Externally supplied readiness score, neutral 50 when no assessment exists.
pub(crate) fn readiness_factor(score: Option<u8>) -> u8 {
    score.unwrap_or(50).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edu(degree: &str) -> Education {
        Education {
            degree: degree.to_string(),
            institution: "State University".to_string(),
            year: Some(2020),
        }
    }

    fn project(name: &str, stack: &[&str]) -> Project {
        Project {
            name: name.to_string(),
            tech_stack: stack.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_bucket_signal_tiers() {
        assert_eq!(bucket_signal(100), 100);
        assert_eq!(bucket_signal(80), 100);
        assert_eq!(bucket_signal(79), 85);
        assert_eq!(bucket_signal(60), 85);
        assert_eq!(bucket_signal(59), 70);
        assert_eq!(bucket_signal(40), 70);
        assert_eq!(bucket_signal(39), 50);
        assert_eq!(bucket_signal(20), 50);
        assert_eq!(bucket_signal(19), 30);
        assert_eq!(bucket_signal(0), 30);
    }

    #[test]
    fn test_signal_factor_zero_weight_forces_zero() {
        assert_eq!(signal_factor(Some(95), 0), 0);
        assert_eq!(signal_factor(None, 0), 0);
    }

    #[test]
    fn test_signal_factor_absent_vs_present_zero() {
        // No signal at all scores 0; a measured score of 0 is still a
        // present signal and lands in the lowest bucket.
        assert_eq!(signal_factor(None, 15), 0);
        assert_eq!(signal_factor(Some(0), 15), 30);
        assert_eq!(signal_factor(Some(85), 15), 100);
    }

    #[test]
    fn test_experience_factor_within_band() {
        assert_eq!(experience_factor(ExperienceLevel::Mid, 4.0), 100);
        assert_eq!(experience_factor(ExperienceLevel::Mid, 3.0), 100);
        assert_eq!(experience_factor(ExperienceLevel::Mid, 6.0), 100);
        assert_eq!(experience_factor(ExperienceLevel::Senior, 20.0), 100);
    }

    #[test]
    fn test_experience_factor_over_and_under() {
        // Up to 3 years over the band: 90. Beyond that: 70.
        assert_eq!(experience_factor(ExperienceLevel::Junior, 5.0), 90);
        assert_eq!(experience_factor(ExperienceLevel::Junior, 7.0), 70);
        // Up to 1 year under: 75. Beyond that: 40.
        assert_eq!(experience_factor(ExperienceLevel::Mid, 2.5), 75);
        assert_eq!(experience_factor(ExperienceLevel::Senior, 5.0), 75);
        assert_eq!(experience_factor(ExperienceLevel::Senior, 2.0), 40);
    }

    #[test]
    fn test_education_factor_baselines() {
        assert_eq!(education_factor(&[], &[]), 20);
        assert_eq!(education_factor(&[edu("Diploma in Design")], &[]), 40);
        assert_eq!(education_factor(&[], &["AWS SAA".to_string()]), 45);
    }

    #[test]
    fn test_education_factor_postgraduate_beats_bachelor() {
        assert_eq!(education_factor(&[edu("BSc Computer Science")], &[]), 60);
        assert_eq!(education_factor(&[edu("Master of Science")], &[]), 70);
        // Postgraduate found: the bachelor bonus must not stack on top.
        assert_eq!(
            education_factor(&[edu("BSc Computer Science"), edu("MSc Data Science")], &[]),
            80
        );
    }

    #[test]
    fn test_education_factor_caps() {
        let degrees = vec![
            edu("PhD Physics"),
            edu("MSc Physics"),
            edu("BSc Physics"),
            edu("Minor in Math"),
            edu("Certificate Program"),
        ];
        let certs: Vec<String> = (0..10).map(|i| format!("Cert {i}")).collect();
        // 40 base + 30 postgrad + 20 extra-degree cap + 20 cert cap = 110 -> 100
        assert_eq!(education_factor(&degrees, &certs), 100);
    }

    #[test]
    fn test_completeness_factor_full_checklist() {
        let profile = CandidateProfile {
            skills: vec!["rust".to_string()],
            resume_text: Some("resume body".to_string()),
            experience: vec![],
            education: vec![edu("BSc")],
            github_username: Some("octocat".to_string()),
            linkedin_url: Some("https://linkedin.com/in/octocat".to_string()),
            portfolio_url: Some("https://octo.cat".to_string()),
            projects: vec![project("demo", &["rust"])],
            ..Default::default()
        };
        // 20 + 20 + 0 + 15 + 10 + 5 + 5 + 10
        assert_eq!(completeness_factor(&profile), 85);
        assert_eq!(completeness_factor(&CandidateProfile::default()), 0);
    }

    #[test]
    fn test_completeness_ignores_blank_handles() {
        let profile = CandidateProfile {
            github_username: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(completeness_factor(&profile), 0);
    }

    #[test]
    fn test_project_relevance_no_projects_is_zero() {
        assert_eq!(project_relevance_factor(&["rust".to_string()], &[]), 0);
    }

    #[test]
    fn test_project_relevance_irrelevant_projects_score_zero() {
        let projects = vec![project("paint app", &["photoshop"])];
        assert_eq!(
            project_relevance_factor(&["rust".to_string()], &projects),
            0
        );
    }

    #[test]
    fn test_project_relevance_averages_and_bonuses() {
        let job_skills = vec!["React".to_string(), "Node.js".to_string()];
        let projects = vec![
            project("dashboard", &["react", "nodejs"]), // 100
            project("cli tool", &["node"]),             // 50
            project("paint app", &["photoshop"]),       // irrelevant
        ];
        // avg(100, 50) = 75, + 2 relevant * 5 bonus = 85
        assert_eq!(project_relevance_factor(&job_skills, &projects), 85);
    }

    #[test]
    fn test_project_relevance_bonus_caps_at_20() {
        let job_skills = vec!["python".to_string()];
        let projects: Vec<Project> = (0..6)
            .map(|i| project(&format!("p{i}"), &["python"]))
            .collect();
        // avg 100 + capped bonus 20 = 120 -> clamped 100
        assert_eq!(project_relevance_factor(&job_skills, &projects), 100);
    }

    #[test]
    fn test_readiness_factor_defaults_neutral() {
        assert_eq!(readiness_factor(None), 50);
        assert_eq!(readiness_factor(Some(82)), 82);
        assert_eq!(readiness_factor(Some(200)), 100);
    }
}
