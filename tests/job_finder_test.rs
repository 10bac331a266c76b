use job_finder::app::job_finder::{find_jobs, JobFinderOutcome, NO_SUGGESTIONS_INFO};
use job_finder::{lookup, Condition, DisabilityCategory, JobSearchLinks, JobSuggestion};

#[test]
fn test_physical_mobility_suggestions() {
    let jobs = lookup(DisabilityCategory::Physical, Condition::Mobility);

    let titles: Vec<&str> = jobs.iter().map(|j| j.title).collect();
    assert_eq!(
        titles,
        vec![
            "Remote Software Developer",
            "Data Entry Specialist",
            "Technical Writer",
            "Customer Support Specialist",
            "Accessibility Tester",
        ]
    );
    assert_eq!(
        jobs.first(),
        Some(&JobSuggestion::new("Remote Software Developer", "$60k-$120k"))
    );
}

#[test]
fn test_mental_conditions() {
    assert_eq!(
        lookup(DisabilityCategory::Mental, Condition::Anxiety),
        &[
            JobSuggestion::new("Freelance Writing", "$30k-$70k"),
            JobSuggestion::new("Data Analysis", "$50k-$90k"),
            JobSuggestion::new("Research Assistant", "$40k-$70k"),
            JobSuggestion::new("Content Moderator", "$35k-$60k"),
            JobSuggestion::new("Online Counseling", "$50k-$100k"),
        ]
    );
    assert_eq!(
        lookup(DisabilityCategory::Mental, Condition::Depression).last(),
        Some(&JobSuggestion::new("Mental Health Advocate", "$35k-$65k"))
    );
    assert!(lookup(DisabilityCategory::Mental, Condition::Adhd).is_empty());
}

#[test]
fn test_physical_conditions_sizes() {
    assert_eq!(lookup(DisabilityCategory::Physical, Condition::HandAmputation).len(), 4);
    assert_eq!(lookup(DisabilityCategory::Physical, Condition::FeetAmputation).len(), 4);
    assert_eq!(
        lookup(DisabilityCategory::Physical, Condition::VisualImpairment),
        &[
            JobSuggestion::new("Braille Transcriber", "$30k-$60k"),
            JobSuggestion::new("Accessibility Consultant", "$60k-$110k"),
            JobSuggestion::new("Voice Acting", "$40k-$150k"),
        ]
    );
}

#[test]
fn test_mismatched_pair_reports_no_suggestions() {
    let outcome = find_jobs(
        Some(DisabilityCategory::Mental),
        Some(Condition::VisualImpairment),
        &JobSearchLinks::default(),
    );
    assert_eq!(
        outcome,
        JobFinderOutcome::NoSuggestions {
            message: NO_SUGGESTIONS_INFO
        }
    );
}

#[test]
fn test_links_use_configured_base() {
    let links = JobSearchLinks::new("https://careers.example.org/find").unwrap();
    let outcome = find_jobs(
        Some(DisabilityCategory::Physical),
        Some(Condition::HandAmputation),
        &links,
    );

    let JobFinderOutcome::Suggestions { jobs } = outcome else {
        panic!("expected suggestions");
    };
    assert_eq!(
        jobs[2].search_url,
        "https://careers.example.org/find?keywords=Podcast%20Producer"
    );
}

#[test]
fn test_data_entry_link() {
    let url = JobSearchLinks::default().link_for("Data Entry Specialist");
    assert!(url.as_str().contains("keywords=Data%20Entry%20Specialist"));
}
