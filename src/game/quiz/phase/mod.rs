mod answering;
mod finished;
mod locked;

pub use self::answering::*;
pub use self::finished::*;
pub use self::locked::*;
