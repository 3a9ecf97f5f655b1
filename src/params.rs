//! Search filters for `GET /vacancies` and `GET /employers`.
//!
//! Records are built through their builders, which check value ranges and
//! combinations the API would otherwise reject. Field order below is the
//! order fields appear in the serialized query string.

use chrono::NaiveDate;

use crate::consts::{DEFAULT_PER_PAGE, MAX_PERIOD_DAYS, MAX_PER_PAGE, MAX_SEARCH_DEPTH};
use crate::error::SchemaValidationError;
use crate::query::OneOrMany;

type Multi = OneOrMany<String>;

query_params! {
    /// Vacancy search filters. Multi-valued fields accept one id or several.
    pub struct SearchParams / SearchParamsBuilder {
        /// Query language as on the website; matched against `search_field`.
        text: String => impl Into<String>,
        search_field: Multi => impl Into<Multi>,
        experience: String => impl Into<String>,
        employment: Multi => impl Into<Multi>,
        schedule: Multi => impl Into<Multi>,
        area: Multi => impl Into<Multi>,
        metro: Multi => impl Into<Multi>,
        /// Superseded by `professional_role`, still honoured by the API.
        specialization: Multi => impl Into<Multi>,
        industry: Multi => impl Into<Multi>,
        employer_id: Multi => impl Into<Multi>,
        /// Only meaningful together with `salary`.
        currency: String => impl Into<String>,
        salary: i64 => i64,
        label: Multi => impl Into<Multi>,
        only_with_salary: bool => bool,
        /// Days back from today, at most 30.
        period: u32 => u32,
        date_from: NaiveDate => NaiveDate,
        date_to: NaiveDate => NaiveDate,
        top_lat: f64 => f64,
        bottom_lat: f64 => f64,
        left_lng: f64 => f64,
        right_lng: f64 => f64,
        order_by: String => impl Into<String>,
        sort_point_lat: f64 => f64,
        sort_point_lng: f64 => f64,
        clusters: bool => bool,
        describe_arguments: bool => bool,
        /// At most 100.
        per_page: u32 => u32,
        /// Zero-based.
        page: u32 => u32,
        no_magic: bool => bool,
        premium: bool => bool,
        responses_count_enabled: bool => bool,
        part_time: Multi => impl Into<Multi>,
        professional_role: Multi => impl Into<Multi>,
    }
}

impl SearchParams {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        const RECORD: &str = "SearchParams";

        check_pagination(RECORD, self.per_page, self.page)?;

        if let Some(period) = self.period {
            if period > MAX_PERIOD_DAYS {
                return Err(SchemaValidationError::new(
                    RECORD,
                    "period",
                    period.to_string(),
                    format!("must be at most {MAX_PERIOD_DAYS}"),
                ));
            }
            if self.date_from.is_some() || self.date_to.is_some() {
                return Err(SchemaValidationError::new(
                    RECORD,
                    "period",
                    period.to_string(),
                    "cannot be combined with date_from/date_to",
                ));
            }
        }

        if let (Some(date_to), None) = (self.date_to, self.date_from) {
            return Err(SchemaValidationError::new(
                RECORD,
                "date_to",
                date_to.to_string(),
                "requires date_from",
            ));
        }

        let geo_box = [
            ("top_lat", self.top_lat),
            ("bottom_lat", self.bottom_lat),
            ("left_lng", self.left_lng),
            ("right_lng", self.right_lng),
        ];
        let set = geo_box.iter().filter(|(_, value)| value.is_some()).count();
        if set != 0 && set != geo_box.len() {
            let (missing, _) = geo_box
                .iter()
                .find(|(_, value)| value.is_none())
                .copied()
                .unwrap_or(("top_lat", None));
            return Err(SchemaValidationError::new(
                RECORD,
                missing,
                "<missing>",
                "top_lat, bottom_lat, left_lng and right_lng must be set together",
            ));
        }

        Ok(())
    }
}

query_params! {
    /// Employer search filters.
    pub struct EmployerSearchParams / EmployerSearchParamsBuilder {
        text: String => impl Into<String>,
        area: Multi => impl Into<Multi>,
        /// Values from the `employer_type` dictionary.
        employer_type as "type": Multi => impl Into<Multi>,
        only_with_vacancies: bool => bool,
        sort_by: String => impl Into<String>,
        per_page: u32 => u32,
        page: u32 => u32,
    }
}

impl EmployerSearchParams {
    fn validate(&self) -> Result<(), SchemaValidationError> {
        check_pagination("EmployerSearchParams", self.per_page, self.page)
    }
}

fn check_pagination(
    record: &'static str,
    per_page: Option<u32>,
    page: Option<u32>,
) -> Result<(), SchemaValidationError> {
    if let Some(per_page) = per_page {
        if per_page > MAX_PER_PAGE {
            return Err(SchemaValidationError::new(
                record,
                "per_page",
                per_page.to_string(),
                format!("must be at most {MAX_PER_PAGE}"),
            ));
        }
    }
    if let Some(page) = page {
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);
        let depth = (u64::from(page) + 1) * u64::from(per_page);
        if depth > u64::from(MAX_SEARCH_DEPTH) {
            return Err(SchemaValidationError::new(
                record,
                "page",
                page.to_string(),
                format!("results beyond {MAX_SEARCH_DEPTH} are not served (per_page={per_page})"),
            ));
        }
    }
    Ok(())
}
