//! randomart synthesizes small expression trees from a probabilistic grammar and renders them
//! as images.
//!
//! # Pipeline overview
//!
//! 1. **Build**: hand-construct a [`Grammar`] whose branch templates live in a [`NodeStore`]
//! 2. **Generate**: expand a start rule into a concrete tree ([`Generator`], [`generate`])
//! 3. **Evaluate**: reduce the tree at a coordinate pair ([`evaluate`], [`evaluate_as_color`])
//! 4. **Render**: evaluate once per pixel into a [`FrameRGBA`] and hand it to the PNG encoder
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Explicit context**: the RNG and the node arena are passed in, never global, so seeded runs
//!   are reproducible.
//! - **All-or-nothing**: a generation or evaluation failure aborts the stage; nothing partial is
//!   returned.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod ast;
mod config;
mod eval;
mod foundation;
mod grammar;
mod render;
mod session;

pub use ast::node::{BinaryOp, Children, Node, NodeId, NodeKind};
pub use ast::printer::{GrammarDisplay, NodeDisplay};
pub use ast::store::{NodeStore, StoreMark};
pub use config::RenderConfig;
pub use eval::error::{EvalError, ValueType};
pub use eval::evaluator::{evaluate, evaluate_as_color};
pub use foundation::core::{Canvas, Color, Provenance};
pub use foundation::error::{RandomartError, RandomartResult};
pub use grammar::default::{DEFAULT_MAX_DEPTH, DEFAULT_START_RULE, default_grammar};
pub use grammar::generate::{
    DEFAULT_MAX_ATTEMPTS, GenerationError, GenerationStats, Generator, generate,
};
pub use grammar::model::{Branch, Grammar, GrammarBuilder, Rule};
pub use render::pipeline::{FrameRGBA, RenderStats, render_frame, render_frame_with_stats};
pub use render::png::{encode_png, save_png};
pub use session::Session;
