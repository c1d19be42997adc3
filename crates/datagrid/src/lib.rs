//! `datagrid` is a headless data grid engine.
//!
//! It owns the data-processing and interaction state a grid UI needs (a
//! filter → sort → paginate row pipeline, O(1) row windowing for large sets,
//! and selection/expansion tracking) and leaves every pixel to you. Each
//! render cycle you hand it your rows, feed it the interaction events your
//! view produced, and draw the [`grid::GridViewModel`] it assembles.
//!
//! ## Design goals
//!
//! - View-layer agnostic: works the same under a browser DOM, a TUI, or a
//!   native toolkit; geometry is in whatever units your host measures.
//! - Event-loop agnostic: you drive it; the engine performs no I/O and
//!   spawns nothing. Server-side sorting/filtering/pagination is delegated
//!   through [`events::GridSignal::DataRequested`] and the caller fetches.
//! - State ownership is explicit: each interaction domain is engine-owned
//!   (mutated in place) or caller-owned (signal-only), never both.
//!
//! ## Getting started
//!
//! ```
//! use datagrid::column::Column;
//! use datagrid::events::GridEvent;
//! use datagrid::grid::DataGrid;
//!
//! struct Task {
//!     title: &'static str,
//!     done: bool,
//! }
//!
//! let columns = vec![
//!     Column::new("title", |t: &Task| t.title.into()),
//!     Column::new("done", |t: &Task| t.done.into()),
//! ];
//! let rows = vec![
//!     Task { title: "write docs", done: false },
//!     Task { title: "add tests", done: true },
//! ];
//!
//! let mut grid = DataGrid::new(columns).unwrap();
//! grid.handle_event(&rows, GridEvent::SortClick { column: "title".into(), additive: false });
//! let model = grid.view(&rows);
//! assert_eq!(model.rows[0].row.title, "add tests");
//! ```
//!
//! The primitives (pipeline stages, windower, trackers) live in
//! `datagrid-core` and are re-exported here.

pub mod config;
pub mod events;
pub mod grid;

pub use datagrid_core::column;
pub use datagrid_core::error;
pub use datagrid_core::expansion;
pub use datagrid_core::pipeline;
pub use datagrid_core::row;
pub use datagrid_core::selection;
pub use datagrid_core::value;
pub use datagrid_core::window;
