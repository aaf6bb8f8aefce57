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
// Complexity limits
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

//! Scroll-driven staging of a single 3D model on a web page.
//!
//! As the reader scrolls through the page sections, the model turns and
//! drifts through a keyframe table while the canvas slides sideways and
//! tilts with its own velocity. Every animated scalar is chased by a
//! critically damped spring so motion stays smooth at any scroll speed.
//!
//! # Key entry points
//!
//! - [`engine::Session`] - per-page state; one `tick` per display refresh
//! - [`scroll::ScrollTrack`] - scroll offset to phase mapping
//! - [`animation::keyframes::KeyframeTable`] - piecewise keyframe sampling
//! - [`camera::framing`] - fitting the camera to the model's bounds
//! - [`options::Options`] - tuning constants with TOML presets
//!
//! # Architecture
//!
//! The crate is host-independent. A host measures the page sections,
//! reports the model load result and calls [`engine::Session::tick`] with
//! the frame delta and scroll offset; the returned
//! [`engine::FrameCommands`] say what to write to the canvas, the model
//! and the camera. The `web` feature provides a browser host on wasm32;
//! the `binary` feature provides a headless simulator.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod options;
pub mod scroll;
pub mod util;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;
