//! Subway meeting point server.
//!
//! A web application that answers: "Several of us are starting from
//! different stations, where should we meet so nobody rides too far?"

pub mod cache;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod stations;
pub mod web;
