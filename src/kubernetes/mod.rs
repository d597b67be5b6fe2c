// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, REST access and discovery.

pub mod client;
pub mod discovery;
pub mod rest;

pub use client::{connect, load_config};
pub use discovery::{discover, DiscoveryReport};
pub use rest::RestClient;
