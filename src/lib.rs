//! EssentIA - Guided psychometric feedback sessions
//!
//! This crate turns four assessment reports (DISC, career anchors, VIA
//! strengths, value languages) into a structured identity profile and
//! walks a consultant through a fixed fifteen-step feedback script whose
//! callouts are resolved against that profile.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
