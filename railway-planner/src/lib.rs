//! Railway network journey planner.
//!
//! Builds a graph from a network's route listings and answers: "what are
//! all the ways from this station to that one, fewest changes first?"

pub mod cli;
pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod web;
