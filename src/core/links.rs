use crate::utils::error::{JobFinderError, Result};
use url::{form_urlencoded, Url};

pub const DEFAULT_JOB_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/";

/// Builds job-search links by putting a job title into the `keywords`
/// query parameter of a base search URL.
#[derive(Debug, Clone)]
pub struct JobSearchLinks {
    base: Url,
}

impl JobSearchLinks {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| JobFinderError::InvalidConfigValueError {
            field: "job_search.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self { base })
    }

    /// Any query or fragment already on the base URL is replaced.
    pub fn link_for(&self, job_title: &str) -> Url {
        let mut url = self.base.clone();
        url.set_fragment(None);
        url.set_query(Some(&format!("keywords={}", encode_keywords(job_title))));
        url
    }
}

impl Default for JobSearchLinks {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_JOB_SEARCH_URL).expect("default search URL is valid"),
        }
    }
}

/// Percent-encodes everything outside `A-Z a-z 0-9 - . _`, with spaces as
/// `%20` rather than `+`.
pub fn encode_keywords(text: &str) -> String {
    // A literal '+' in the input is already %2B here, so every '+' left is a space.
    // The form serializer keeps '*' as-is; it is a reserved sub-delimiter.
    form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A")
}
