pub mod patterns;
pub mod progress;

pub use patterns::PatternUtils;
pub use progress::FileProgress;
