//! Chart assembly layer: the validation boundary, house occupancy, the
//! KP table, wheel rendering, and the composed [`compute_chart`] entry
//! point.
//!
//! Consumers that only need a partial recomputation (say, a fresh dasha
//! timeline from a stored Moon longitude) can call the `jataka_base`
//! functions directly; this crate adds the aggregate and its wire shape.

pub mod chart;
pub mod input;
pub mod kp;
pub mod wheel;

pub use chart::{ChartMeta, ChartResult, compute_chart};
pub use input::{
    ChartRequest, DEFAULT_PRECISION, clamp_precision, parse_civil_date, parse_civil_time,
};
pub use kp::{HouseOccupancy, KpPoint, KpRow, build_kp_table, organize_houses};
pub use wheel::{DrawInstruction, Wheel, WheelOptions, WheelPoint, render_wheel};
