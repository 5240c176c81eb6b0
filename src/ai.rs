// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Prompt-template wrappers around an external generative model. The
//! model is an opaque collaborator: structured input in, structured
//! output approximately matching a schema out, or an error. Nothing in
//! the aggregation core depends on this module.

use serde_json::Value;
use thiserror::Error;

use crate::models::Task;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("LIFEHUB_AI_KEY is not set")]
    MissingKey,
    #[error("assist request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model returned malformed {what}: {detail}")]
    Schema { what: &'static str, detail: String },
}

pub trait Assistant {
    fn complete(&self, prompt: &str) -> Result<String, AssistError>;
}

pub struct HttpAssistant {
    client: reqwest::blocking::Client,
    key: String,
    model: String,
}

impl HttpAssistant {
    pub fn from_env(model: &str) -> anyhow::Result<Self> {
        let key = std::env::var("LIFEHUB_AI_KEY").map_err(|_| AssistError::MissingKey)?;
        Ok(Self {
            client: crate::utils::http_client()?,
            key,
            model: model.to_string(),
        })
    }
}

impl Assistant for HttpAssistant {
    fn complete(&self, prompt: &str) -> Result<String, AssistError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()?
            .error_for_status()?;
        let v: Value = resp.json()?;
        v["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or(AssistError::Schema {
                what: "completion",
                detail: "no candidate text in response".to_string(),
            })
    }
}

/// Models habitually wrap JSON in markdown fences; strip them.
pub fn strip_code_fence(raw: &str) -> &str {
    let s = raw.trim();
    let s = s
        .strip_prefix("```json")
        .or_else(|| s.strip_prefix("```"))
        .unwrap_or(s);
    s.strip_suffix("```").unwrap_or(s).trim()
}

pub fn breakdown_prompt(title: &str, note: Option<&str>) -> String {
    let mut p = format!(
        "Break the following task into 3-7 concrete, actionable subtasks.\n\
         Task: {}\n",
        title
    );
    if let Some(n) = note {
        p.push_str(&format!("Context: {}\n", n));
    }
    p.push_str("Respond with only a JSON array of subtask title strings.");
    p
}

pub fn prioritize_prompt(tasks: &[Task]) -> String {
    let mut p = String::from(
        "Order the following tasks from most to least urgent, weighing due \
         dates and stated priority.\nTasks:\n",
    );
    for t in tasks {
        p.push_str(&format!(
            "- id={} priority={} due={} title={}\n",
            t.id,
            t.priority.as_str(),
            t.due.map(|d| d.to_string()).unwrap_or_else(|| "none".into()),
            t.title
        ));
    }
    p.push_str("Respond with only a JSON array of task ids, most urgent first.");
    p
}

pub fn weekly_review_prompt(summary: &str) -> String {
    format!(
        "You are a personal productivity coach. Write a short weekly review \
         (3 paragraphs: wins, misses, focus for next week) based on this \
         activity summary:\n{}\n",
        summary
    )
}

/// Parses the breakdown response: a JSON array of non-empty strings.
pub fn parse_breakdown(raw: &str) -> Result<Vec<String>, AssistError> {
    let v: Value =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| AssistError::Schema {
            what: "breakdown",
            detail: e.to_string(),
        })?;
    let arr = v.as_array().ok_or(AssistError::Schema {
        what: "breakdown",
        detail: "expected a JSON array".to_string(),
    })?;
    let mut out = Vec::new();
    for item in arr {
        match item.as_str() {
            Some(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
            _ => {
                return Err(AssistError::Schema {
                    what: "breakdown",
                    detail: format!("expected non-empty string, got {}", item),
                })
            }
        }
    }
    if out.is_empty() {
        return Err(AssistError::Schema {
            what: "breakdown",
            detail: "empty subtask list".to_string(),
        });
    }
    Ok(out)
}

/// Parses the prioritization response: a JSON array of task ids. Unknown
/// ids are rejected; known ids the model dropped keep their input order
/// at the tail.
pub fn parse_ranking(raw: &str, known: &[i64]) -> Result<Vec<i64>, AssistError> {
    let v: Value =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| AssistError::Schema {
            what: "ranking",
            detail: e.to_string(),
        })?;
    let arr = v.as_array().ok_or(AssistError::Schema {
        what: "ranking",
        detail: "expected a JSON array".to_string(),
    })?;
    let mut out = Vec::new();
    for item in arr {
        let id = item.as_i64().ok_or_else(|| AssistError::Schema {
            what: "ranking",
            detail: format!("expected task id, got {}", item),
        })?;
        if !known.contains(&id) {
            return Err(AssistError::Schema {
                what: "ranking",
                detail: format!("unknown task id {}", id),
            });
        }
        if !out.contains(&id) {
            out.push(id);
        }
    }
    for id in known {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    Ok(out)
}
