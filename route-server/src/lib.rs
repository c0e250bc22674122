//! Metro route planner server.
//!
//! A web service that answers: "Which metro stations should I use to get
//! from this address to that one, and where do I change lines?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod geocode;
pub mod planner;
pub mod stations;
pub mod web;
