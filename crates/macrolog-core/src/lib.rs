//! # Macrolog Core Library
//!
//! This library provides the core business logic for the Macrolog nutrition
//! ledger. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Ledger**: day-keyed ordered intake entries with validate-then-commit
//!   mutations
//! - **Tracker**: the root aggregate binding ledger, meal history, goals, and
//!   preferences over a pluggable key-value [`Storage`] boundary
//! - **Rollup**: fixed-length trailing-window aggregation (7-day, 30-day,
//!   arbitrary N)
//! - **Goals**: traffic-light adherence bands with asymmetric over-goal
//!   policies for energy and protein
//!
//! ## Key Components
//!
//! - [`Tracker`]: load-once, mutate-in-place, persist-on-write engine
//! - [`Ledger`]: the day-keyed entry map
//! - [`DayKey`]: canonical local-calendar-date key
//! - [`Storage`]: the persistence contract ([`JsonFileStore`], [`MemoryStore`])

pub mod daykey;
pub mod error;
pub mod goals;
pub mod history;
pub mod ledger;
pub mod rollup;
pub mod storage;
pub mod tracker;
pub mod units;

pub use daykey::{shift_days, DayKey};
pub use error::{ConfigError, CoreError, NotFoundError, PersistenceError, ValidationError};
pub use goals::{Band, Goals};
pub use history::{MealHistory, MealTemplate};
pub use ledger::{DayTotals, EntryInput, IntakeEntry, Ledger};
pub use rollup::{rollup, summarize, DailyAggregate, WindowSummary, MONTH_DAYS, WEEK_DAYS};
pub use storage::{JsonFileStore, MemoryStore, Storage};
pub use tracker::{DayReport, Tracker};
pub use units::{to_canonical, to_display, EnergyUnit, KJ_PER_KCAL};
