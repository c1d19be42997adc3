//! `datagrid-core` provides the UI-agnostic primitives behind a data grid.
//!
//! This crate is designed for **grid/table component authors** and apps that
//! want fine-grained control. The higher-level controller (event handling,
//! controlled/uncontrolled state routing, read-model assembly) lives in the
//! facade crate `datagrid`.
//!
//! ## Design goals
//!
//! - View-layer agnostic: nothing here renders; the engine produces row
//!   orders, window geometry and selection sets for *your* view to draw.
//! - No async runtime: every operation is a pure, synchronous function over
//!   the current state snapshot. Server-side fetching stays outside the core.
//! - Total over its inputs: unknown column ids are skipped, missing values
//!   resolve to [`value::CellValue::Null`]; nothing on the processing path
//!   returns an error.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `datagrid`. Use this crate
//! directly if you only need the primitives.
//!
//! Useful entry points:
//! - [`pipeline::Pipeline`]: the filter → sort → paginate row pipeline.
//! - [`window::compute_window`]: O(1) viewport windowing with overscan.
//! - [`selection::Selection`]: mode-gated selection set keyed by row id.
//! - [`expansion::Expansion`]: per-row expanded-content membership.
//! - [`column::Column`]: column descriptors with accessor closures.

pub mod column;
pub mod error;
pub mod expansion;
pub mod pipeline;
pub mod row;
pub mod selection;
pub mod value;
pub mod window;
