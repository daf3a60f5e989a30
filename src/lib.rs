//! bet-scanner: cross-bookmaker odds reconciliation
//!
//! This library provides the core components for:
//! - Canonicalizing team, league, market and selection vocabularies
//! - Validating raw scraped quotes into typed quotes
//! - A concurrent canonical quote store with merge policies
//! - Grouping quotes by real-world fixture
//! - Surebet and value bet detection
//! - Concurrent ingestion from mock, file and HTTP odds sources
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod detector;
pub mod grouping;
pub mod ingest;
pub mod normalize;
pub mod quote;
pub mod scanner;
pub mod source;
pub mod store;
pub mod telemetry;
