// Example Rust-side tracer for analysis.
//
// Run `rvr-tracegen tracers/rust/pc_count.rs pc_count.h` to emit a C header
// skeleton with the same hook surface when an inline C tracer is needed.

pub const TRACER_NAME: &str = "pc_count";

#[derive(Default)]
pub struct PcCountTracer {
    pub pcs: u64,
}

impl PcCountTracer {
    pub fn trace_pc(&mut self, _pc: u64, _op: u16) {
        self.pcs = self.pcs.saturating_add(1);
    }
}
