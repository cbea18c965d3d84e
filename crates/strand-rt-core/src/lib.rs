//! Runtime support for compiled Strand programs: the deferred-task
//! scheduler (trampoline) and primitive-value output formatting.
//!
//! The C ABI consumed by emitted code lives in `strand-rt-native`; this
//! crate is the safe core it is built on, and the surface hosts embed
//! directly when they drive the runtime from Rust.

mod output;
mod sched;

pub use output::{
    output_bool, output_i16, output_i32, output_i64, output_i8, output_str, output_u16,
    output_u32, output_u64, output_u8, OutputSink, WriteSink,
};
pub use sched::Scheduler;
