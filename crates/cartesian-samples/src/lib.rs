// File: crates/cartesian-samples/src/lib.rs
// Summary: Sample harness library; generators, headless document, controls, animation and sample pages.

pub mod animation;
pub mod config;
pub mod controls;
pub mod data;
pub mod document;
pub mod generators;
pub mod pages;
pub mod session;

pub use animation::{Animation, AnimationScheduler, Frame, SineSweep, SpiralSweep, StepStatus};
pub use config::HarnessConfig;
pub use controls::{ControlError, ControlEvent, ControlPanel};
pub use data::{CategoryDatum, CsvRecord, DuplicateCategoryDatum, NumericDatum};
pub use document::{Document, Node, NodeId, Slider};
pub use pages::{CategoryLinePage, DuplicateCategoriesPage, NumericLinePage, PageSettings, SamplePage, ScriptStep};
pub use session::Session;
