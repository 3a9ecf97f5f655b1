pub const DEFAULT_LOG_FILTERS: &[&str] = &[
    #[cfg(not(debug_assertions))]
    "mio=info",
    "hyper_util=info",
    "reqwest=info",
    "rustls=info",
    "hickory_resolver=info",
    "hickory_proto=info",
    "html5ever=info",
    "selectors=info",
];

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_USER_AGENT: &str = "hh-api/0.1 (hh-api@localhost)";

/// Header hh.ru requires in addition to the regular `User-Agent`.
pub const HH_USER_AGENT_HEADER: &str = "hh-user-agent";

pub const ME_PATH: &str = "/me";
pub const VACANCIES_PATH: &str = "/vacancies";
pub const EMPLOYERS_PATH: &str = "/employers";

/// hh.ru refuses to page past this many results.
pub const MAX_SEARCH_DEPTH: u32 = 2000;
pub const MAX_PER_PAGE: u32 = 100;
/// Page size the API applies when `per_page` is omitted.
pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PERIOD_DAYS: u32 = 30;
