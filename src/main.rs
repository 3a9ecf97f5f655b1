pub mod opts;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use futures::{stream, StreamExt, TryStreamExt};
use serde::Serialize;
use serde_jsonlines::JsonLinesWriter;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter,
};

use hh_api::consts::DEFAULT_LOG_FILTERS;
use hh_api::models::Vacancy;
use hh_api::{ClientConfig, HhClient, SearchParams};

use crate::opts::{Command, Opts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let opts = Opts::parse();

    let mut filter = EnvFilter::builder()
        .with_default_directive(opts.log.into())
        .with_env_var("LOG")
        .from_env_lossy();

    for rule in DEFAULT_LOG_FILTERS {
        filter = filter.add_directive(rule.parse().expect("DEFAULT_LOG_FILTERS misconfiguration"));
    }
    registry()
        .with(filter)
        .with(layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::new(opts.token.clone())
        .with_base_url(&opts.url)?
        .with_user_agent(opts.user_agent.clone());
    debug!(?config);
    let client = HhClient::with_reqwest(config).context("failed to build HTTP client")?;

    tokio::select! {
        result = run(&client, &opts) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted");
            Ok(())
        }
    }
}

async fn run(client: &HhClient, opts: &Opts) -> anyhow::Result<()> {
    match &opts.command {
        Command::Me => emit([client.fetch_identity().await?]),
        Command::Search {
            text,
            area,
            professional_role,
            only_with_salary,
            per_page,
            page,
            limit,
            details,
        } => {
            let mut builder = SearchParams::builder();
            if let Some(text) = text {
                builder = builder.text(text.as_str());
            }
            if !area.is_empty() {
                builder = builder.area(area.clone());
            }
            if !professional_role.is_empty() {
                builder = builder.professional_role(professional_role.clone());
            }
            if *only_with_salary {
                builder = builder.only_with_salary(true);
            }
            if let Some(per_page) = per_page {
                builder = builder.per_page(*per_page);
            }
            if let Some(page) = page {
                builder = builder.page(*page);
            }
            let params = builder.build()?;

            let items = client.search_vacancy_items(&params, *limit).await?;
            info!(count = items.len(), "vacancies received");

            if !*details {
                return emit(&items);
            }

            let vacancies: Vec<Vacancy> = stream::iter(&items)
                .map(|item| client.fetch_vacancy(&item.id))
                .buffered(opts.threads.max(1))
                .try_collect()
                .await?;
            emit(&vacancies)
        }
        Command::Vacancy { id, plain } => {
            let vacancy = client
                .fetch_vacancy(id)
                .await
                .with_context(|| format!("failed to fetch vacancy {id}"))?;
            if *plain {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}\n\n{}", vacancy.name(), vacancy.description_text())?;
                return Ok(());
            }
            emit([vacancy])
        }
        Command::Employer { id } => emit([client
            .fetch_employer(id)
            .await
            .with_context(|| format!("failed to fetch employer {id}"))?]),
    }
}

/// Writes records to stdout, one JSON document per line.
fn emit<T: Serialize>(records: impl IntoIterator<Item = T>) -> anyhow::Result<()> {
    let mut writer = JsonLinesWriter::new(std::io::stdout().lock());
    writer.write_all(records)?;
    writer.flush()?;
    Ok(())
}
