//! Typed records for hh.ru API payloads.
//!
//! Required fields are plain values, optional ones are `Option`. Unknown keys
//! are ignored so that API additions do not break parsing.

mod common;
mod employer;
mod vacancy;

use serde::{Deserialize, Serialize};

pub use self::common::{Address, Area, HttpUrl, IdName, InsiderInterview, MetroStation, Salary};
pub use self::employer::{Employer, EmployerDetails, LogoUrls, ShortEmployer};
pub use self::vacancy::{
    Contacts, DriverLicenseType, KeySkill, Phone, ShortVacancy, Snippet, Specialization, Vacancy,
    VacancyCounters, VacancyDetails, VacancyTest,
};

/// Current session from `GET /me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub auth_type: String,
    pub is_applicant: bool,
    pub is_employer: bool,
    pub is_admin: bool,
    pub is_application: bool,
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub email: Option<String>,
}

/// One page of `GET /vacancies`. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortVacancyList {
    pub items: Vec<ShortVacancy>,
    pub found: u64,
    pub pages: u32,
    pub per_page: u32,
    pub page: u32,
    pub clusters: Option<serde_json::Value>,
    pub arguments: Option<serde_json::Value>,
    pub alternate_url: HttpUrl,
}

impl ShortVacancyList {
    pub fn has_more_pages(&self) -> bool {
        self.page.saturating_add(1) < self.pages
    }
}

/// One page of `GET /employers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortEmployerList {
    pub items: Vec<ShortEmployer>,
    pub found: u64,
    pub pages: u32,
    pub per_page: u32,
    pub page: u32,
}
