// ABOUTME: Daily calorie estimation from biometrics, activity level, and weight goal
// ABOUTME: Validates the request schema in a fixed order, then applies Harris-Benedict BMR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimator
//!
//! Pure validation-and-calculation procedure behind `POST /calculate-calories`.
//! Nothing here performs I/O; the route handler owns logging and serialization.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
//!   (activity factor multipliers).
//!
//! # Validation order
//!
//! Error precedence is observable by clients and is fixed:
//!
//! 1. activity level absent or unknown
//! 2. any of the six fields absent
//! 3. gender unknown
//! 4. goal unknown
//!
//! Step 1 running before the completeness check means a request missing
//! `gender` with a bad `activity_level` reports the activity level. BMR is
//! computed only once a [`ProfileInput`] exists.

use crate::constants::{
    MSG_INVALID_ACTIVITY_LEVEL, MSG_INVALID_GENDER, MSG_INVALID_GOAL, MSG_MISSING_DATA,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calories removed or added per day for a weight-change goal
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

/// Revised Harris-Benedict coefficients
mod harris_benedict {
    pub const MALE_CONSTANT: f64 = 88.362;
    pub const MALE_WEIGHT_COEF: f64 = 13.397;
    pub const MALE_HEIGHT_COEF: f64 = 4.799;
    pub const MALE_AGE_COEF: f64 = 5.677;

    pub const FEMALE_CONSTANT: f64 = 447.593;
    pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
    pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
    pub const FEMALE_AGE_COEF: f64 = 4.330;
}

/// The four ways a profile can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `activity_level` absent or not a known level
    #[error("{}", MSG_INVALID_ACTIVITY_LEVEL)]
    InvalidActivityLevel,
    /// One of the six required fields is absent or null
    #[error("{}", MSG_MISSING_DATA)]
    MissingData,
    /// `gender` is neither male nor female
    #[error("{}", MSG_INVALID_GENDER)]
    InvalidGender,
    /// `goal` is not lose, gain, or maintain weight
    #[error("{}", MSG_INVALID_GOAL)]
    InvalidGoal,
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::MissingData => Self::missing_field(error.to_string()),
            ValidationError::InvalidActivityLevel
            | ValidationError::InvalidGender
            | ValidationError::InvalidGoal => Self::invalid_input(error.to_string()),
        }
    }
}

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

impl Gender {
    /// Case-insensitive lookup of a gender value
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Every supported level, in increasing order of activity
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Lowercase wire key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly active",
            Self::ModeratelyActive => "moderately active",
            Self::VeryActive => "very active",
            Self::ExtraActive => "extra active",
        }
    }

    /// Multiplier applied to BMR to get total daily energy expenditure
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Case-insensitive lookup against the wire keys
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.to_lowercase();
        Self::ALL.into_iter().find(|level| level.key() == value)
    }
}

/// Weight-management goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Caloric deficit
    LoseWeight,
    /// Caloric surplus
    GainWeight,
    /// Caloric balance
    MaintainWeight,
}

impl Goal {
    /// Lowercase wire key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose weight",
            Self::GainWeight => "gain weight",
            Self::MaintainWeight => "maintain weight",
        }
    }

    /// Daily calorie offset for this goal
    #[must_use]
    pub const fn calorie_offset(self) -> f64 {
        match self {
            Self::LoseWeight => -GOAL_ADJUSTMENT_KCAL,
            Self::GainWeight => GOAL_ADJUSTMENT_KCAL,
            Self::MaintainWeight => 0.0,
        }
    }

    /// Case-insensitive lookup against the wire keys
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "lose weight" => Some(Self::LoseWeight),
            "gain weight" => Some(Self::GainWeight),
            "maintain weight" => Some(Self::MaintainWeight),
            _ => None,
        }
    }
}

/// Request payload as received; every field may be absent
///
/// Field types are enforced by deserialization: a fractional `age` or a
/// non-string `activity_level` fails before validation runs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProfileRequest {
    /// "male" or "female", any case
    pub gender: Option<String>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Age in whole years
    pub age: Option<u32>,
    /// One of the [`ActivityLevel`] keys, any case
    pub activity_level: Option<String>,
    /// One of the [`Goal`] keys, any case
    pub goal: Option<String>,
}

/// Fully validated profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileInput {
    /// Biological gender for BMR coefficients
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight-management goal
    pub goal: Goal,
}

impl ProfileInput {
    /// Basal metabolic rate for this profile (unrounded)
    #[must_use]
    pub fn bmr(&self) -> f64 {
        calculate_bmr(self.gender, self.weight_kg, self.height_cm, self.age_years)
    }

    /// Compute BMR, apply the activity multiplier and goal offset, and format
    #[must_use]
    pub fn to_estimate(&self) -> CalorieEstimate {
        let bmr = self.bmr();
        let calories = adjust_for_goal(bmr * self.activity_level.multiplier(), self.goal.key());

        CalorieEstimate {
            bmr: round_to_hundredths(bmr),
            calories_needed: round_to_hundredths(calories),
            goal: title_case(self.goal.key()),
            activity_level: title_case(self.activity_level.key()),
        }
    }
}

/// Calorie estimate returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEstimate {
    /// Basal Metabolic Rate in kcal/day, two decimals
    pub bmr: f64,
    /// Daily calories after activity and goal adjustment, two decimals
    pub calories_needed: f64,
    /// Goal, title-cased
    pub goal: String,
    /// Activity level, title-cased
    pub activity_level: String,
}

/// Harris-Benedict BMR for men
///
/// Formula: 88.362 + 13.397 x `weight_kg` + 4.799 x `height_cm` - 5.677 x age
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_bmr_male(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    use harris_benedict::{MALE_AGE_COEF, MALE_CONSTANT, MALE_HEIGHT_COEF, MALE_WEIGHT_COEF};

    MALE_CONSTANT + MALE_WEIGHT_COEF * weight_kg + MALE_HEIGHT_COEF * height_cm
        - MALE_AGE_COEF * f64::from(age_years)
}

/// Harris-Benedict BMR for women
///
/// Formula: 447.593 + 9.247 x `weight_kg` + 3.098 x `height_cm` - 4.330 x age
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_bmr_female(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    use harris_benedict::{
        FEMALE_AGE_COEF, FEMALE_CONSTANT, FEMALE_HEIGHT_COEF, FEMALE_WEIGHT_COEF,
    };

    FEMALE_CONSTANT + FEMALE_WEIGHT_COEF * weight_kg + FEMALE_HEIGHT_COEF * height_cm
        - FEMALE_AGE_COEF * f64::from(age_years)
}

/// BMR dispatched on gender
#[must_use]
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    match gender {
        Gender::Male => calculate_bmr_male(weight_kg, height_cm, age_years),
        Gender::Female => calculate_bmr_female(weight_kg, height_cm, age_years),
    }
}

/// Apply the goal offset to a calorie figure
///
/// "lose weight" subtracts 500, "gain weight" adds 500, matched
/// case-insensitively. Any other string returns `calories` unchanged.
#[must_use]
pub fn adjust_for_goal(calories: f64, goal: &str) -> f64 {
    Goal::parse(goal).map_or(calories, |goal| calories + goal.calorie_offset())
}

/// Round to two decimal places, half away from zero
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Upper-case the first letter of every word and lower-case the rest
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            at_word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

/// Validate a request and compute its calorie estimate
///
/// # Errors
///
/// Returns the first [`ValidationError`] hit in the documented order.
pub fn estimate(profile: &ProfileRequest) -> Result<CalorieEstimate, ValidationError> {
    let activity_level = profile
        .activity_level
        .as_deref()
        .and_then(ActivityLevel::parse)
        .ok_or(ValidationError::InvalidActivityLevel)?;

    let (Some(gender), Some(weight_kg), Some(height_cm), Some(age_years), Some(goal)) = (
        profile.gender.as_deref(),
        profile.weight,
        profile.height,
        profile.age,
        profile.goal.as_deref(),
    ) else {
        return Err(ValidationError::MissingData);
    };

    let gender = Gender::parse(gender).ok_or(ValidationError::InvalidGender)?;
    let goal = Goal::parse(goal).ok_or(ValidationError::InvalidGoal)?;

    let input = ProfileInput {
        gender,
        weight_kg,
        height_cm,
        age_years,
        activity_level,
        goal,
    };

    Ok(input.to_estimate())
}
