use serde::{Deserialize, Deserializer, Serialize};

use super::common::{Area, HttpUrl, IdName, InsiderInterview};
use crate::mapper::deserialize_layered;

/// Company logos; the API keys the resized variants by pixel width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoUrls {
    pub original: HttpUrl,
    #[serde(rename = "240")]
    pub image_240: HttpUrl,
    #[serde(rename = "90")]
    pub image_90: HttpUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortEmployer {
    pub id: String,
    pub name: String,
    /// API endpoint with the full employer description.
    pub url: Option<HttpUrl>,
    /// Employer page on the website.
    pub alternate_url: HttpUrl,
    /// Search results with this employer's vacancies.
    pub vacancies_url: HttpUrl,
    pub open_vacancies: Option<i64>,
    pub logo_urls: Option<LogoUrls>,
}

/// Fields `GET /employers/{id}` adds to [`ShortEmployer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerDetails {
    /// Direct employer, agency, etc. `None` when the company hides it.
    #[serde(rename = "type")]
    pub employer_type: Option<String>,
    pub site_url: HttpUrl,
    /// HTML without `<script/>` and `<style/>`.
    pub description: Option<String>,
    pub branded_description: Option<String>,
    pub trusted: bool,
    pub insider_interviews: Vec<InsiderInterview>,
    pub area: Area,
    /// `["blacklisted"]` when the current user hid the employer.
    pub relations: Vec<String>,
    pub industries: Vec<IdName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employer {
    #[serde(flatten)]
    pub summary: ShortEmployer,
    #[serde(flatten)]
    pub details: EmployerDetails,
}

impl<'de> Deserialize<'de> for Employer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (summary, details) = deserialize_layered(deserializer)?;
        Ok(Self { summary, details })
    }
}

impl Employer {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn logo_urls_map_numeric_keys() {
        let logos: LogoUrls = serde_json::from_value(json!({
            "original": "https://hhcdn.ru/employer-logo/1.png",
            "240": "https://hhcdn.ru/employer-logo/240.png",
            "90": "https://hhcdn.ru/employer-logo/90.png"
        }))
        .unwrap();
        assert_eq!(logos.image_240.as_str(), "https://hhcdn.ru/employer-logo/240.png");
        assert_eq!(logos.image_90.as_str(), "https://hhcdn.ru/employer-logo/90.png");

        let back = serde_json::to_value(&logos).unwrap();
        assert!(back.get("240").is_some());
        assert!(back.get("image_240").is_none());
    }

    #[test]
    fn logo_urls_reject_malformed_url() {
        let result = serde_json::from_value::<LogoUrls>(json!({
            "original": "not a url",
            "240": "https://hhcdn.ru/240.png",
            "90": "https://hhcdn.ru/90.png"
        }));
        assert!(result.is_err());
    }
}
