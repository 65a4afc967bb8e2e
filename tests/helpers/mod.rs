// ABOUTME: Shared test helpers for calorie API integration tests
// ABOUTME: Exports axum request builders and profile fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod test_utils;
