//! Notion database adapter for the task source port.
//!
//! Queries the configured database page by page and flattens each page's
//! typed properties into a [`Task`]. Absent properties, empty rich-text
//! arrays and null values all fall back to the task defaults.

use crate::config::NotionConfig;
use crate::task::{
    domain::Task,
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Page size requested from the query endpoint (the provider maximum).
const PAGE_SIZE: u32 = 100;

/// Task source backed by a Notion database query.
#[derive(Debug, Clone)]
pub struct NotionTaskSource {
    client: reqwest::Client,
    config: NotionConfig,
}

impl NotionTaskSource {
    /// Creates an adapter sharing `client` for all requests.
    #[must_use]
    pub const fn new(client: reqwest::Client, config: NotionConfig) -> Self {
        Self { client, config }
    }

    fn query_url(&self) -> String {
        format!(
            "{}/databases/{}/query",
            self.config.api_base.trim_end_matches('/'),
            self.config.database_id
        )
    }

    async fn query_page(&self, start_cursor: Option<&str>) -> TaskSourceResult<QueryResponse> {
        let response = self
            .client
            .post(self.query_url())
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", &self.config.version)
            .json(&QueryRequest {
                page_size: PAGE_SIZE,
                start_cursor,
            })
            .send()
            .await
            .map_err(TaskSourceError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaskSourceError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(TaskSourceError::decode)
    }
}

#[async_trait]
impl TaskSource for NotionTaskSource {
    async fn fetch_tasks(&self) -> TaskSourceResult<Vec<Task>> {
        let mut tasks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.query_page(cursor.as_deref()).await?;
            tasks.extend(page.results.into_iter().map(Task::from));
            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        debug!(count = tasks.len(), "fetched tasks from notion");
        Ok(tasks)
    }
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<PageRecord>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PageRecord {
    #[serde(default)]
    properties: PageProperties,
}

#[derive(Debug, Default, Deserialize)]
struct PageProperties {
    #[serde(rename = "Task")]
    task: Option<TitleProperty>,
    #[serde(rename = "Status")]
    status: Option<StatusProperty>,
    #[serde(rename = "Deadline")]
    deadline: Option<DateProperty>,
    #[serde(rename = "Hours estimate")]
    hours_estimate: Option<NumberProperty>,
    #[serde(rename = "Category")]
    category: Option<SelectProperty>,
    #[serde(rename = "Completion")]
    completion: Option<NumberProperty>,
}

#[derive(Debug, Deserialize)]
struct TitleProperty {
    #[serde(default)]
    title: Vec<RichText>,
}

#[derive(Debug, Deserialize)]
struct RichText {
    #[serde(default)]
    plain_text: String,
}

#[derive(Debug, Deserialize)]
struct StatusProperty {
    status: Option<NamedOption>,
}

#[derive(Debug, Deserialize)]
struct SelectProperty {
    select: Option<NamedOption>,
}

#[derive(Debug, Deserialize)]
struct NamedOption {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct DateProperty {
    date: Option<DateValue>,
}

#[derive(Debug, Deserialize)]
struct DateValue {
    start: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NumberProperty {
    number: Option<f64>,
}

impl From<PageRecord> for Task {
    fn from(page: PageRecord) -> Self {
        let PageProperties {
            task,
            status,
            deadline,
            hours_estimate,
            category,
            completion,
        } = page.properties;

        let name = task
            .and_then(|title| title.title.into_iter().next())
            .map(|text| text.plain_text)
            .unwrap_or_default();
        let mut normalised = Self::new(name)
            .with_status(
                status
                    .and_then(|property| property.status)
                    .map(|option| option.name)
                    .unwrap_or_default(),
            )
            .with_category(
                category
                    .and_then(|property| property.select)
                    .map(|option| option.name)
                    .unwrap_or_default(),
            )
            .with_hours_estimate(number_or_zero(hours_estimate))
            .with_completion(number_or_zero(completion));

        if let Some(start) = deadline
            .and_then(|property| property.date)
            .and_then(|date| date.start)
        {
            normalised = normalised.with_deadline(start);
        }
        normalised
    }
}

fn number_or_zero(property: Option<NumberProperty>) -> f64 {
    property.and_then(|value| value.number).unwrap_or(0.0)
}
