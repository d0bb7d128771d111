//! NASA-TLX - Subjective workload assessment instrument
//!
//! This crate collects six workload ratings from a respondent, derives
//! per-dimension weights from 15 forced pairwise comparisons, and combines
//! them into a weighted and a raw composite score exported as a portable
//! record (JSON or CSV).

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
