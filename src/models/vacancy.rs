use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use super::common::{timestamp, Address, Area, HttpUrl, IdName, InsiderInterview, Salary};
use super::employer::ShortEmployer;
use crate::mapper::deserialize_layered;
use crate::text::html_to_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySkill {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyTest {
    /// The test must be completed before responding.
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: String,
    pub name: String,
    pub profarea_id: String,
    pub profarea_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub country: String,
    pub city: String,
    pub number: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phones: Vec<Phone>,
}

/// Search-result excerpts; matches of `text` are wrapped in `<highlighttext>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub requirement: Option<String>,
    pub responsibility: Option<String>,
}

/// Only present when the search asked for `responses_count_enabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyCounters {
    pub responses: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverLicenseType {
    pub id: String,
}

/// Vacancy as it appears in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortVacancy {
    pub id: String,
    pub premium: bool,
    pub has_test: bool,
    /// External response form for `direct` vacancies.
    pub response_url: Option<String>,
    pub address: Option<Address>,
    pub alternate_url: String,
    pub apply_alternate_url: String,
    pub department: Option<IdName>,
    pub salary: Option<Salary>,
    pub name: String,
    pub insider_interview: Option<InsiderInterview>,
    pub area: Area,
    pub url: Option<HttpUrl>,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<FixedOffset>,
    pub relations: Option<Vec<serde_json::Value>>,
    /// Missing for anonymous vacancies.
    pub employer: Option<ShortEmployer>,
    pub response_letter_required: bool,
    #[serde(rename = "type")]
    pub vacancy_type: IdName,
    pub archived: bool,
    pub working_days: Vec<IdName>,
    pub working_time_intervals: Vec<IdName>,
    pub working_time_modes: Vec<IdName>,
    pub accept_temporary: Option<bool>,
    /// Metres from the sort point; only with `order_by=distance`.
    pub sort_point_distance: Option<f64>,
    pub counters: Option<VacancyCounters>,
    pub snippet: Option<Snippet>,
}

/// Fields a full vacancy carries on top of [`ShortVacancy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyDetails {
    /// HTML.
    pub description: String,
    pub branded_description: Option<String>,
    pub key_skills: Vec<KeySkill>,
    pub schedule: IdName,
    pub accept_handicapped: bool,
    pub accept_kids: bool,
    pub experience: IdName,
    /// Employer's internal code.
    pub code: Option<String>,
    pub employment: Option<IdName>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<FixedOffset>,
    pub test: Option<VacancyTest>,
    pub specializations: Vec<Specialization>,
    pub contacts: Option<Contacts>,
    pub billing_type: IdName,
    pub allow_messages: bool,
    pub driver_license_types: Vec<DriverLicenseType>,
    pub accept_incomplete_resumes: bool,
    pub professional_roles: Vec<IdName>,
    pub suitable_resumes_url: Option<HttpUrl>,
    pub negotiations_url: Option<HttpUrl>,
    pub quick_responses_allowed: bool,
    pub hidden: bool,
    pub vacancy_constructor_template: Option<serde_json::Value>,
}

/// Full vacancy from `GET /vacancies/{id}`: the search record plus details,
/// both read from the same flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vacancy {
    #[serde(flatten)]
    pub summary: ShortVacancy,
    #[serde(flatten)]
    pub details: VacancyDetails,
}

impl<'de> Deserialize<'de> for Vacancy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (summary, details) = deserialize_layered(deserializer)?;
        Ok(Self { summary, details })
    }
}

impl Vacancy {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }

    /// `description` with markup stripped.
    pub fn description_text(&self) -> String {
        html_to_text(&self.details.description)
    }
}
