//! Constants shared by catalog ingest and aggregate calculations.

/// Simulation frames per second; weapon reload is measured in frames.
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Scale from per-frame thrust/drag to displayed top speed.
pub const SPEED_SCALE: f64 = 60.0;

/// Scale from per-frame thrust/mass to displayed acceleration.
pub const ACCELERATION_SCALE: f64 = 3600.0;

/// Scale from per-frame turn/mass to displayed turn rate.
pub const TURN_SCALE: f64 = 60.0;

/// Multiplier applied to summed heat dissipation before computing the heat envelope.
pub const HEAT_DISSIPATION_SCALE: f64 = 6.0;

/// Suffix appended to the name of a copied build.
pub const COPY_SUFFIX: &str = " (Copy)";
