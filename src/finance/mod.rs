// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure month-bucketed aggregation over recurring income and expense
//! entries. Nothing in this module touches the store or the network;
//! callers hand in snapshots and a target month.

pub mod aggregate;
pub mod projection;
pub mod window;

pub use aggregate::{by_category, monthly_net, trailing_trend, MonthlySummary, TrendPoint};
pub use projection::{projected_amount, Recurring};
pub use window::MonthWindow;
