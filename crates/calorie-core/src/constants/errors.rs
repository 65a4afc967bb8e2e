// ABOUTME: User-facing error message constants for the calorie API
// ABOUTME: Messages are part of the wire contract and must not change wording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Activity level missing or not one of the known levels
pub const MSG_INVALID_ACTIVITY_LEVEL: &str = "Invalid activity level";

/// One of the six profile fields was absent or null
pub const MSG_MISSING_DATA: &str = "Missing data in request";

/// Gender was neither male nor female
pub const MSG_INVALID_GENDER: &str = "Invalid gender value";

/// Goal was not one of lose/gain/maintain weight
pub const MSG_INVALID_GOAL: &str = "Invalid goal value";

/// Request body was not JSON or did not match the field types
pub const MSG_MALFORMED_BODY: &str = "Malformed request body";
