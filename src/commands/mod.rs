mod emit;
mod fan;
mod wait;

pub use emit::Emit;
pub use fan::SetFanRpm;
pub use wait::Wait;
