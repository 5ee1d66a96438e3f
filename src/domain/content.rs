//! Content pools - the fixed "tip of the day" string lists.
//!
//! Three pools (daily thoughts, meals, wellness practices) are sampled
//! uniformly per request; the phrasing templates wrap fallback replies.

/// Ambient daily thoughts shown at the top of the page.
pub const DAILY_THOUGHTS: [&str; 3] = [
    "Health is the real wealth — invest in it every day.",
    "Small steps every day lead to lifelong wellbeing.",
    "Breathe. Move. Nourish.",
];

/// Meal suggestions.
pub const MEAL_SUGGESTIONS: [&str; 3] = [
    "Quinoa & chickpea salad — fiber and plant protein.",
    "Grilled salmon bowl — omega-3s and greens.",
    "Vegetable dal with brown rice — balanced and comforting.",
];

/// Wellness practice suggestions.
pub const WELLNESS_SUGGESTIONS: [&str; 3] = [
    "Sun Salutation (Surya Namaskar) — 5–10 rounds to energize.",
    "Box breathing — inhale 4s, hold 4s, exhale 4s, hold 4s, repeat.",
    "Guided body scan — 10 minutes to release tension.",
];

/// Phrasing templates for fallback replies. `{tip}` is replaced with the
/// chosen suggestion.
pub const REPLY_TEMPLATES: [&str; 3] = [
    "Thanks for asking — here's a general health tip: {tip}",
    "Here's a helpful note: {tip}",
    "Quick wellness suggestion: {tip}",
];

/// One tip from each pool, freshly picked for a page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTips {
    pub daily_thought: &'static str,
    pub meal_suggestion: &'static str,
    pub wellness_suggestion: &'static str,
}

/// Access to the fixed content pools.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary;

impl ContentLibrary {
    pub fn new() -> Self {
        Self
    }

    pub fn daily_thoughts(&self) -> &'static [&'static str] {
        &DAILY_THOUGHTS
    }

    pub fn meal_suggestions(&self) -> &'static [&'static str] {
        &MEAL_SUGGESTIONS
    }

    pub fn wellness_suggestions(&self) -> &'static [&'static str] {
        &WELLNESS_SUGGESTIONS
    }

    /// Meals followed by wellness practices, the combined pool the fallback
    /// reply draws from when it skips the knowledge table.
    pub fn combined_suggestions(&self) -> Vec<&'static str> {
        MEAL_SUGGESTIONS
            .iter()
            .chain(WELLNESS_SUGGESTIONS.iter())
            .copied()
            .collect()
    }
}
