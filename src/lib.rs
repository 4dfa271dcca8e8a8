// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout tracker: log runs and rides at map positions.
//!
//! This crate provides the workout model, its persisted store, and the
//! marker registry kept in sync with the map, driven through an explicit
//! command model so any UI layer can sit on top.

pub mod app;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use app::App;
pub use commands::{Command, CommandOutcome};
