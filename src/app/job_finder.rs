use crate::core::links::JobSearchLinks;
use crate::core::suggestions;
use crate::core::{Condition, DisabilityCategory};
use crate::utils::error::{JobFinderError, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const SUGGESTIONS_HEADING: &str = "Job Suggestions with Salary Ranges and LinkedIn Search Links";
pub const NO_SUGGESTIONS_INFO: &str = "No job suggestions available for the selected criteria.";
pub const MISSING_SELECTION_WARNING: &str =
    "Please select both a type of disability and a specific condition.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedJob {
    pub title: String,
    pub salary_range: String,
    pub search_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobFinderOutcome {
    Suggestions { jobs: Vec<SuggestedJob> },
    NoSuggestions { message: &'static str },
    MissingSelection { message: &'static str },
}

impl JobFinderOutcome {
    pub fn render_text(&self) -> String {
        match self {
            JobFinderOutcome::Suggestions { jobs } => {
                let mut out = format!("{}\n", SUGGESTIONS_HEADING);
                for job in jobs {
                    out.push_str(&format!(
                        "\n- {}\n  Salary Range: {}\n  Search LinkedIn Jobs: {}\n",
                        job.title, job.salary_range, job.search_url
                    ));
                }
                out
            }
            JobFinderOutcome::NoSuggestions { message } => format!("Info: {}\n", message),
            JobFinderOutcome::MissingSelection { message } => format!("Warning: {}\n", message),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the lookup for a (possibly incomplete) selection and attaches a
/// search link to every suggestion.
pub fn find_jobs(
    category: Option<DisabilityCategory>,
    condition: Option<Condition>,
    links: &JobSearchLinks,
) -> JobFinderOutcome {
    let (Some(category), Some(condition)) = (category, condition) else {
        tracing::info!("Job search requested without a complete selection");
        return JobFinderOutcome::MissingSelection {
            message: MISSING_SELECTION_WARNING,
        };
    };

    let jobs: Vec<SuggestedJob> = suggestions::lookup(category, condition)
        .iter()
        .map(|job| SuggestedJob {
            title: job.title.to_string(),
            salary_range: job.salary_range.to_string(),
            search_url: links.link_for(job.title).to_string(),
        })
        .collect();

    if jobs.is_empty() {
        JobFinderOutcome::NoSuggestions {
            message: NO_SUGGESTIONS_INFO,
        }
    } else {
        JobFinderOutcome::Suggestions { jobs }
    }
}

/// Interactive selection: a category menu followed by the condition menu
/// for that category. A blank or unrecognised answer leaves that part of the
/// selection empty.
pub fn browse<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    links: &JobSearchLinks,
) -> Result<JobFinderOutcome> {
    writeln!(output, "Type of Disability")?;
    let category = choose(input, output, &DisabilityCategory::ALL, |c| c.label())?;

    let condition = match category {
        Some(category) => {
            writeln!(output, "{}", category.condition_prompt())?;
            choose(input, output, category.conditions(), |c| c.label())?
        }
        None => None,
    };

    let outcome = find_jobs(category, condition, links);
    write!(output, "{}", outcome.render_text())?;
    Ok(outcome)
}

/// Accepts a menu number, or anything `T::from_str` accepts as long as it is
/// one of the listed options.
fn choose<T, R, W>(
    input: &mut R,
    output: &mut W,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Result<Option<T>>
where
    T: Copy + PartialEq + FromStr<Err = JobFinderError>,
    R: BufRead,
    W: Write,
{
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, label(option))?;
    }
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    if answer.is_empty() {
        return Ok(None);
    }

    let picked = match answer.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1]),
        Ok(_) => {
            tracing::debug!("Menu choice {} is out of range", answer);
            None
        }
        Err(_) => match answer.parse::<T>() {
            Ok(parsed) if options.contains(&parsed) => Some(parsed),
            Ok(parsed) => {
                tracing::debug!("'{}' is not offered in this menu", label(&parsed));
                None
            }
            Err(e) => {
                tracing::debug!("Ignoring menu answer: {}", e);
                None
            }
        },
    };
    Ok(picked)
}
