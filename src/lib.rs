// Copyright 2026 Tokenpress Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tokenpress library — token news gateway.
//!
//! Maps a cryptocurrency token name to a CoinTelegraph tag page, renders
//! that page through the Zyte extract API, and serves the top headlines
//! as JSON. This library crate exposes the core modules for integration
//! testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod news;
pub mod renderer;
pub mod rest;
