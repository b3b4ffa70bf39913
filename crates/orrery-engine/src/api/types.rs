/// Unique identifier for a node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// Timing for a single scheduler tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Clamped wall-clock delta for this tick, in seconds.
    pub dt: f32,
    /// Accumulated simulation time since start, in seconds.
    pub elapsed: f64,
    /// Number of ticks run so far, including this one.
    pub frame: u64,
}
