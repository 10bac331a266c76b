use crate::domain::model::{Condition, DisabilityCategory, JobSuggestion};

type TableEntry = ((DisabilityCategory, Condition), &'static [JobSuggestion]);

/// Static suggestion table. Pairs that are not listed have no suggestions.
pub static SUGGESTION_TABLE: &[TableEntry] = &[
    (
        (DisabilityCategory::Physical, Condition::Mobility),
        &[
            JobSuggestion::new("Remote Software Developer", "$60k-$120k"),
            JobSuggestion::new("Data Entry Specialist", "$30k-$50k"),
            JobSuggestion::new("Technical Writer", "$50k-$80k"),
            JobSuggestion::new("Customer Support Specialist", "$35k-$55k"),
            JobSuggestion::new("Accessibility Tester", "$45k-$85k"),
        ],
    ),
    (
        (DisabilityCategory::Physical, Condition::HandAmputation),
        &[
            JobSuggestion::new("Voice Acting", "$40k-$150k"),
            JobSuggestion::new("Audio Editing", "$35k-$75k"),
            JobSuggestion::new("Podcast Producer", "$50k-$100k"),
            JobSuggestion::new("Accessibility Consultant", "$60k-$110k"),
        ],
    ),
    (
        (DisabilityCategory::Physical, Condition::FeetAmputation),
        &[
            JobSuggestion::new("Remote Software Developer", "$60k-$120k"),
            JobSuggestion::new("Data Entry Specialist", "$30k-$50k"),
            JobSuggestion::new("Technical Writer", "$50k-$80k"),
            JobSuggestion::new("Customer Support Specialist", "$35k-$55k"),
        ],
    ),
    (
        (DisabilityCategory::Physical, Condition::VisualImpairment),
        &[
            JobSuggestion::new("Braille Transcriber", "$30k-$60k"),
            JobSuggestion::new("Accessibility Consultant", "$60k-$110k"),
            JobSuggestion::new("Voice Acting", "$40k-$150k"),
        ],
    ),
    (
        (DisabilityCategory::Mental, Condition::Anxiety),
        &[
            JobSuggestion::new("Freelance Writing", "$30k-$70k"),
            JobSuggestion::new("Data Analysis", "$50k-$90k"),
            JobSuggestion::new("Research Assistant", "$40k-$70k"),
            JobSuggestion::new("Content Moderator", "$35k-$60k"),
            JobSuggestion::new("Online Counseling", "$50k-$100k"),
        ],
    ),
    (
        (DisabilityCategory::Mental, Condition::Depression),
        &[
            JobSuggestion::new("Virtual Assistant", "$30k-$50k"),
            JobSuggestion::new("Online Tutoring", "$35k-$60k"),
            JobSuggestion::new("Graphic Design", "$40k-$80k"),
            JobSuggestion::new("Social Media Management", "$40k-$70k"),
            JobSuggestion::new("Mental Health Advocate", "$35k-$65k"),
        ],
    ),
];

/// Suggestions for the exact (category, condition) pair, in table order.
/// A pair with no entry, including a condition paired with the wrong
/// category, yields an empty slice.
pub fn lookup(category: DisabilityCategory, condition: Condition) -> &'static [JobSuggestion] {
    let suggestions = SUGGESTION_TABLE
        .iter()
        .find(|(key, _)| *key == (category, condition))
        .map(|(_, jobs)| *jobs)
        .unwrap_or(&[]);

    tracing::debug!(
        "Lookup for ({}, {}) returned {} suggestions",
        category,
        condition,
        suggestions.len()
    );
    suggestions
}
