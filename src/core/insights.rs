use crate::models::{Category, CompatibilityTier};
use std::collections::BTreeMap;

/// Category scores above this are reported as strengths
pub const STRENGTH_THRESHOLD: u8 = 70;

/// Category scores below this are reported as growth areas
pub const GROWTH_THRESHOLD: u8 = 60;

/// Fixed notes attached to a date-only estimate
pub const QUICK_STRENGTHS: [&str; 2] = ["Emotional connection", "Communication potential"];
pub const QUICK_GROWTH_AREAS: [&str; 2] = ["Different life experience", "Different perspectives"];
const QUICK_PREMIUM_INSIGHTS: [&str; 2] = [
    "Deep psychological compatibility",
    "Long-term relationship forecast",
];

/// Human-readable category name
pub fn label(category: Category) -> &'static str {
    match category {
        Category::Attachment => "Attachment",
        Category::LoveLanguages => "Love languages",
        Category::Trust => "Trust",
        Category::Values => "Shared values",
        Category::Communication => "Communication",
        Category::Emotional => "Emotional intimacy",
        Category::Independence => "Independence",
        Category::Future => "Future plans",
    }
}

pub fn emoji(category: Category) -> &'static str {
    match category {
        Category::Attachment => "🤝",
        Category::LoveLanguages => "💝",
        Category::Trust => "🔒",
        Category::Values => "⚖️",
        Category::Communication => "💬",
        Category::Emotional => "💗",
        Category::Independence => "🦋",
        Category::Future => "🌅",
    }
}

pub fn strength_note(category: Category) -> &'static str {
    match category {
        Category::Attachment => "Secure and steady bond",
        Category::LoveLanguages => "You speak each other's love language",
        Category::Trust => "Strong mutual trust",
        Category::Values => "Shared life values",
        Category::Communication => "Open, effective communication",
        Category::Emotional => "Deep emotional understanding",
        Category::Independence => "Healthy balance of togetherness and space",
        Category::Future => "Aligned vision of the future",
    }
}

pub fn growth_note(category: Category) -> &'static str {
    match category {
        Category::Attachment => "Building a sense of security together",
        Category::LoveLanguages => "Learning how each of you receives affection",
        Category::Trust => "Strengthening trust through consistency",
        Category::Values => "Discussing priorities and values",
        Category::Communication => "Working through conflicts openly",
        Category::Emotional => "Developing your emotional connection",
        Category::Independence => "Respecting each other's personal space",
        Category::Future => "Working on shared plans",
    }
}

/// One-line summary shown with the score
pub fn describe(tier: CompatibilityTier) -> &'static str {
    match tier {
        CompatibilityTier::Excellent => "Amazing match! Your stars are perfectly aligned!",
        CompatibilityTier::Good => "Great potential! Your connection is promising!",
        CompatibilityTier::Moderate => "A solid foundation with plenty of room to grow together.",
        CompatibilityTier::Challenging => "There's room for growth in your relationship!",
    }
}

fn long_term_outlook(tier: CompatibilityTier) -> &'static str {
    match tier {
        CompatibilityTier::Excellent => "Long-term outlook: a stable, deeply fulfilling partnership",
        CompatibilityTier::Good => "Long-term outlook: strong prospects with steady attention",
        CompatibilityTier::Moderate => "Long-term outlook: promising if you invest in your weak spots",
        CompatibilityTier::Challenging => "Long-term outlook: success depends on deliberate joint effort",
    }
}

/// Strength notes for categories scoring above the threshold, in category order
pub fn strengths(scores: &BTreeMap<Category, u8>) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, score)| **score > STRENGTH_THRESHOLD)
        .map(|(category, _)| strength_note(*category).to_string())
        .collect()
}

/// Growth notes for categories scoring below the threshold, in category order
pub fn growth_areas(scores: &BTreeMap<Category, u8>) -> Vec<String> {
    scores
        .iter()
        .filter(|(_, score)| **score < GROWTH_THRESHOLD)
        .map(|(category, _)| growth_note(*category).to_string())
        .collect()
}

/// Premium-only commentary
///
/// With category scores, names the strongest and weakest dimension;
/// a date-only estimate gets the generic notes instead.
pub fn premium_insights(compatibility: u8, scores: Option<&BTreeMap<Category, u8>>) -> Vec<String> {
    let mut insights = Vec::new();

    match scores {
        Some(scores) if !scores.is_empty() => {
            if let Some((category, score)) = scores.iter().max_by_key(|(_, s)| **s) {
                insights.push(format!(
                    "{} Strongest dimension: {} ({}%)",
                    emoji(*category),
                    label(*category),
                    score
                ));
            }
            if let Some((category, score)) = scores.iter().min_by_key(|(_, s)| **s) {
                insights.push(format!(
                    "{} Dimension to nurture: {} ({}%)",
                    emoji(*category),
                    label(*category),
                    score
                ));
            }
        }
        _ => insights.extend(QUICK_PREMIUM_INSIGHTS.iter().map(|s| s.to_string())),
    }

    insights.push(long_term_outlook(CompatibilityTier::from_score(compatibility)).to_string());
    insights
}
