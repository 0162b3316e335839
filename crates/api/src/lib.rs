//! Demo host application for the httpresults result types: a short-link
//! service whose handlers return typed results and whose `/metadata` endpoint
//! serves the documentation those types describe.

pub mod app;
pub mod config;
