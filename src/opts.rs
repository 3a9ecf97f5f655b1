use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use hh_api::consts::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Log level of application; `LOG` takes full filter directives
    #[arg(global = true, short, long, env = "LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// Concurrent vacancy fetches for `search --details`
    #[arg(global = true, short, long, env, default_value_t = 4)]
    pub threads: usize,

    #[arg(global = true, short, long, env = "HH_BASE_URL", default_value_t = String::from(DEFAULT_BASE_URL))]
    pub url: String,

    /// OAuth access token
    #[arg(long, env = "HH_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Sent as both `User-Agent` and `HH-User-Agent`
    #[arg(global = true, long, env = "HH_USER_AGENT", default_value_t = String::from(DEFAULT_USER_AGENT))]
    pub user_agent: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the account behind the token
    Me,
    /// Search vacancies (one page)
    Search {
        #[arg(long)]
        text: Option<String>,
        /// Region id, repeatable
        #[arg(long)]
        area: Vec<String>,
        #[arg(long)]
        professional_role: Vec<String>,
        #[arg(long)]
        only_with_salary: bool,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        page: Option<u32>,
        /// Print at most this many vacancies
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Fetch the full record for every result
        #[arg(long)]
        details: bool,
    },
    /// Fetch one vacancy
    Vacancy {
        id: String,
        /// Print the description as plain text instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Fetch one employer
    Employer { id: String },
}
