// Copyright (c) 2025 Lifehub Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod assist;
pub mod calendar;
pub mod doctor;
pub mod expenses;
pub mod exporter;
pub mod goals;
pub mod habits;
pub mod income;
pub mod media;
pub mod reports;
pub mod tasks;
