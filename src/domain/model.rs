use crate::utils::error::{JobFinderError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DisabilityCategory {
    Physical,
    Mental,
}

impl DisabilityCategory {
    pub const ALL: [DisabilityCategory; 2] = [DisabilityCategory::Physical, DisabilityCategory::Mental];

    pub fn label(&self) -> &'static str {
        match self {
            DisabilityCategory::Physical => "Physical",
            DisabilityCategory::Mental => "Mental",
        }
    }

    /// Conditions offered once this category is selected, in menu order.
    pub fn conditions(&self) -> &'static [Condition] {
        match self {
            DisabilityCategory::Physical => &[
                Condition::Mobility,
                Condition::HandAmputation,
                Condition::FeetAmputation,
                Condition::VisualImpairment,
            ],
            DisabilityCategory::Mental => {
                &[Condition::Anxiety, Condition::Depression, Condition::Adhd]
            }
        }
    }

    /// Heading for the dependent condition menu.
    pub fn condition_prompt(&self) -> &'static str {
        match self {
            DisabilityCategory::Physical => "Specific Physical Issue",
            DisabilityCategory::Mental => "Specific Mental Health Condition",
        }
    }
}

impl fmt::Display for DisabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisabilityCategory {
    type Err = JobFinderError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        DisabilityCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JobFinderError::SelectionError {
                kind: "disability type".to_string(),
                value: wanted.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Condition {
    Mobility,
    HandAmputation,
    FeetAmputation,
    VisualImpairment,
    Anxiety,
    Depression,
    Adhd,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::Mobility,
        Condition::HandAmputation,
        Condition::FeetAmputation,
        Condition::VisualImpairment,
        Condition::Anxiety,
        Condition::Depression,
        Condition::Adhd,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Mobility => "Mobility Issues",
            Condition::HandAmputation => "Hand Amputation",
            Condition::FeetAmputation => "Feet Amputation",
            Condition::VisualImpairment => "Visual Impairment",
            Condition::Anxiety => "Anxiety",
            Condition::Depression => "Depression",
            Condition::Adhd => "ADHD",
        }
    }

    /// Kebab-case name accepted on the command line.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Condition::Mobility => "mobility",
            Condition::HandAmputation => "hand-amputation",
            Condition::FeetAmputation => "feet-amputation",
            Condition::VisualImpairment => "visual-impairment",
            Condition::Anxiety => "anxiety",
            Condition::Depression => "depression",
            Condition::Adhd => "adhd",
        }
    }

    pub fn category(&self) -> DisabilityCategory {
        match self {
            Condition::Mobility
            | Condition::HandAmputation
            | Condition::FeetAmputation
            | Condition::VisualImpairment => DisabilityCategory::Physical,
            Condition::Anxiety | Condition::Depression | Condition::Adhd => {
                DisabilityCategory::Mental
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the display label ("Mobility Issues") or the CLI name
/// ("mobility"), ignoring ASCII case.
impl FromStr for Condition {
    type Err = JobFinderError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.cli_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| JobFinderError::SelectionError {
                kind: "condition".to_string(),
                value: wanted.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobSuggestion {
    pub title: &'static str,
    pub salary_range: &'static str,
}

impl JobSuggestion {
    pub const fn new(title: &'static str, salary_range: &'static str) -> Self {
        Self {
            title,
            salary_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_condition_belongs_to_its_category_menu() {
        for category in DisabilityCategory::ALL {
            for condition in category.conditions() {
                assert_eq!(condition.category(), category);
            }
        }
        let listed: usize = DisabilityCategory::ALL
            .iter()
            .map(|c| c.conditions().len())
            .sum();
        assert_eq!(listed, Condition::ALL.len());
    }

    #[test]
    fn test_condition_parses_label_and_cli_name() {
        assert_eq!("Mobility Issues".parse::<Condition>().unwrap(), Condition::Mobility);
        assert_eq!("hand-amputation".parse::<Condition>().unwrap(), Condition::HandAmputation);
        assert_eq!(" adhd ".parse::<Condition>().unwrap(), Condition::Adhd);
        assert!("Insomnia".parse::<Condition>().is_err());
    }

    #[test]
    fn test_category_parses_label() {
        assert_eq!("mental".parse::<DisabilityCategory>().unwrap(), DisabilityCategory::Mental);
        assert!("Other".parse::<DisabilityCategory>().is_err());
    }
}
