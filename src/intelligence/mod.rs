// ABOUTME: Intelligence module for energy expenditure calculations
// ABOUTME: Hosts the calorie estimator and re-exports its public surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Nutrition math used by the HTTP routes. Everything in here is pure and
//! synchronous so it can be unit tested without a runtime.

/// Daily calorie estimation (BMR, activity multiplier, goal offset)
pub mod calorie_estimator;

pub use calorie_estimator::{
    adjust_for_goal, calculate_bmr, calculate_bmr_female, calculate_bmr_male, estimate,
    ActivityLevel, CalorieEstimate, Gender, Goal, ProfileInput, ProfileRequest, ValidationError,
};
