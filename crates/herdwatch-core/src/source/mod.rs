//! Injectable randomness and time.
//!
//! The store never calls the thread RNG or the system clock directly; it goes
//! through `RandomSource` and `Clock` so tests can pin both.

pub mod clock;
pub mod mock;
pub mod random;

pub use clock::{Clock, SystemClock};
pub use mock::{MockClock, MockRandom, ScriptedRandom};
pub use random::{RandomSource, ThreadRandom};
