//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store transitions and persistence into use-case APIs.
//! - Keep UI/FFI layers decoupled from reducer and storage details.

pub mod recipe_service;
