//! hh.ru API operations.
//!
//! Each operation serializes its input, performs one GET through the
//! [`HttpExecutor`], and maps a `200` body into the target record. Any other
//! status becomes an [`ApiRequestError`]. Nothing is retried or cached.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn, Span};

use crate::config::ClientConfig;
use crate::consts::{EMPLOYERS_PATH, ME_PATH, VACANCIES_PATH};
use crate::error::{ApiRequestError, HhError};
use crate::executor::{HttpExecutor, HttpRequest, ReqwestExecutor};
use crate::mapper::map_response;
use crate::models::{Employer, Me, ShortEmployerList, ShortVacancy, ShortVacancyList, Vacancy};
use crate::params::{EmployerSearchParams, SearchParams};
use crate::query::QueryParams;

/// Characters that may not appear raw inside one path segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

pub struct HhClient<E = ReqwestExecutor> {
    config: ClientConfig,
    executor: E,
}

impl HhClient<ReqwestExecutor> {
    /// Client backed by a default `reqwest` executor.
    pub fn with_reqwest(config: ClientConfig) -> Result<Self, HhError> {
        Ok(Self::new(config, ReqwestExecutor::new()?))
    }
}

impl<E: HttpExecutor> HhClient<E> {
    pub fn new(config: ClientConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /me`: who the token belongs to.
    #[instrument(skip(self), fields(http.status_code = tracing::field::Empty))]
    pub async fn fetch_identity(&self) -> Result<Me, HhError> {
        self.get(ME_PATH, String::new()).await
    }

    /// `GET /vacancies`: a single page of search results.
    #[instrument(skip(self, params), fields(query = tracing::field::Empty, http.status_code = tracing::field::Empty))]
    pub async fn search_vacancies(&self, params: &SearchParams) -> Result<ShortVacancyList, HhError> {
        let query = params.to_query_string();
        Span::current().record("query", query.as_str());
        let list: ShortVacancyList = self.get(VACANCIES_PATH, query).await?;
        debug!(found = list.found, returned = list.items.len(), "vacancy search done");
        Ok(list)
    }

    /// Items of one search page, at most `limit` of them.
    ///
    /// Only the page selected by `params` is requested; a `limit` larger than
    /// that page is not topped up from later pages.
    pub async fn search_vacancy_items(
        &self,
        params: &SearchParams,
        limit: usize,
    ) -> Result<Vec<ShortVacancy>, HhError> {
        let list = self.search_vacancies(params).await?;
        if limit > list.items.len() && list.has_more_pages() {
            warn!(
                limit,
                returned = list.items.len(),
                found = list.found,
                "limit exceeds one page; later pages are not fetched"
            );
        }
        let mut items = list.items;
        items.truncate(limit);
        Ok(items)
    }

    /// `GET /vacancies/{id}`: the full vacancy.
    #[instrument(skip(self), fields(http.status_code = tracing::field::Empty))]
    pub async fn fetch_vacancy(&self, vacancy_id: &str) -> Result<Vacancy, HhError> {
        let path = concat_str!(VACANCIES_PATH, "/", encode_segment(vacancy_id));
        self.get(&path, String::new()).await
    }

    /// `GET /employers/{id}`.
    #[instrument(skip(self), fields(http.status_code = tracing::field::Empty))]
    pub async fn fetch_employer(&self, employer_id: &str) -> Result<Employer, HhError> {
        let path = concat_str!(EMPLOYERS_PATH, "/", encode_segment(employer_id));
        self.get(&path, String::new()).await
    }

    /// `GET /employers`: a single page of employers.
    #[instrument(skip(self, params), fields(query = tracing::field::Empty, http.status_code = tracing::field::Empty))]
    pub async fn search_employers(
        &self,
        params: &EmployerSearchParams,
    ) -> Result<ShortEmployerList, HhError> {
        let query = params.to_query_string();
        Span::current().record("query", query.as_str());
        self.get(EMPLOYERS_PATH, query).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: String) -> Result<T, HhError> {
        let request = HttpRequest::get(self.config.base_url(), path, query, self.config.headers()?);
        let response = self.executor.execute(request).await?;
        Span::current().record("http.status_code", response.status);

        if response.status != 200 {
            let description = response
                .body
                .get("description")
                .and_then(|d| d.as_str())
                .map(str::to_owned);
            warn!(status = response.status, reason = %response.reason, path, "hh.ru rejected request");
            return Err(ApiRequestError {
                status: response.status,
                reason: response.reason,
                description,
            }
            .into());
        }

        Ok(map_response(&response.body)?)
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
