// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an income or expense entry recurs. `effective_date` is always the
/// date recurrence began, never an end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    OneTime,
    Daily,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Daily => "daily",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-time" => Ok(Frequency::OneTime),
            "daily" => Ok(Frequency::Daily),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(anyhow::anyhow!(
                "Invalid frequency '{}' (use one-time|daily|monthly|yearly)",
                other
            )),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    Groceries,
    Subscription,
    Entertainment,
    Utilities,
    Dining,
    Transport,
    Health,
    Travel,
    Education,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Groceries => "groceries",
            ExpenseCategory::Subscription => "subscription",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Dining => "dining",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Health => "health",
            ExpenseCategory::Travel => "travel",
            ExpenseCategory::Education => "education",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Other => "other",
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "groceries" => Ok(ExpenseCategory::Groceries),
            "subscription" => Ok(ExpenseCategory::Subscription),
            "entertainment" => Ok(ExpenseCategory::Entertainment),
            "utilities" => Ok(ExpenseCategory::Utilities),
            "dining" => Ok(ExpenseCategory::Dining),
            "transport" => Ok(ExpenseCategory::Transport),
            "health" => Ok(ExpenseCategory::Health),
            "travel" => Ok(ExpenseCategory::Travel),
            "education" => Ok(ExpenseCategory::Education),
            "shopping" => Ok(ExpenseCategory::Shopping),
            "other" => Ok(ExpenseCategory::Other),
            other => Err(anyhow::anyhow!("Invalid category '{}'", other)),
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub source: String,
    pub amount: Decimal,
    pub effective_date: NaiveDate,
    pub frequency: Frequency,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    pub effective_date: NaiveDate,
    pub frequency: Frequency,
    pub category: ExpenseCategory,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub started: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalStep {
    pub id: i64,
    pub goal_id: i64,
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(anyhow::anyhow!(
                "Invalid priority '{}' (use low|medium|high)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub priority: Priority,
    pub due: Option<NaiveDate>,
    pub done: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    Movie,
    Series,
    Book,
    Game,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
            MediaKind::Book => "book",
            MediaKind::Game => "game",
        }
    }
}

impl FromStr for MediaKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaKind::Movie),
            "series" => Ok(MediaKind::Series),
            "book" => Ok(MediaKind::Book),
            "game" => Ok(MediaKind::Game),
            other => Err(anyhow::anyhow!(
                "Invalid kind '{}' (use movie|series|book|game)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaStatus {
    Planned,
    InProgress,
    Done,
    Dropped,
}

impl MediaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaStatus::Planned => "planned",
            MediaStatus::InProgress => "in-progress",
            MediaStatus::Done => "done",
            MediaStatus::Dropped => "dropped",
        }
    }
}

impl FromStr for MediaStatus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(MediaStatus::Planned),
            "in-progress" => Ok(MediaStatus::InProgress),
            "done" => Ok(MediaStatus::Done),
            "dropped" => Ok(MediaStatus::Dropped),
            other => Err(anyhow::anyhow!(
                "Invalid status '{}' (use planned|in-progress|done|dropped)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i64,
    pub title: String,
    pub kind: MediaKind,
    pub status: MediaStatus,
    pub rating: Option<u8>,
}

// Edit paths are typed per entity: a `None` field leaves the stored value
// untouched. No open-ended key-value merges.

#[derive(Debug, Clone, Default)]
pub struct IncomeUpdate {
    pub source: Option<String>,
    pub amount: Option<Decimal>,
    pub effective_date: Option<NaiveDate>,
    pub frequency: Option<Frequency>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub effective_date: Option<NaiveDate>,
    pub frequency: Option<Frequency>,
    pub category: Option<ExpenseCategory>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub due: Option<NaiveDate>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MediaUpdate {
    pub title: Option<String>,
    pub kind: Option<MediaKind>,
    pub status: Option<MediaStatus>,
    pub rating: Option<u8>,
}
