// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Runtime blending engine for layered post-processing effect presets.
//!
//! A host rendering system owns a set of post-processing effect parameters
//! (colour grading, bloom, vignette, lens effects, depth of field, ...).
//! This crate moves those parameters toward preset targets, either instantly
//! or smoothly over time, one independent transition per effect channel.
//!
//! # Key entry points
//!
//! - [`engine::PostFxEngine`] - owns the bound store, the blend scheduler and
//!   the preset list; every apply call goes through it
//! - [`store::EffectStore`] - the host's live parameter store boundary
//! - [`preset::Preset`] - per-channel targets gated by enable flags
//! - [`cycler::PresetCycler`] - next/previous/random/auto preset stepping
//! - [`options::BlendOptions`] - TOML configuration
//!
//! # Blending model
//!
//! Each of the twelve channels in [`channel::ChannelKind`] has at most one
//! active [`blend::Transition`]. A new request on a channel cancels the old
//! one and starts from the channel's live value, so rapid re-requests never
//! jump. Transitions advance only inside [`engine::PostFxEngine::tick`],
//! which the host calls once per frame.

pub mod blend;
pub mod channel;
pub mod cycler;
pub mod engine;
pub mod error;
pub mod options;
pub mod preset;
pub mod store;
pub mod util;
