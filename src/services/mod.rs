// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Wraps the pure recipe core with request diagnostics for the HTTP handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they decode the request, call a service, and
//! encode the result. Services own the business rules and report to the
//! diagnostics sink regardless of which route reached them.

/// Recipe search, lookup, and listing
pub mod recipes;

pub use recipes::RecipeService;
