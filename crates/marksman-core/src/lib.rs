//! Core types and definitions for the MARKSMAN target range.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input samples, frame snapshots, events, configuration and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

pub use glam::Vec3;
