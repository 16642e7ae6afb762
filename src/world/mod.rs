// world/ - Ocean floor synthesis
//
// Deterministic height field and surface texture. No global state: every
// run owns its random source.

mod random;
mod terrain;
mod shade;
mod synth;

pub use random::*;
pub use terrain::*;
pub use shade::*;
pub use synth::*;
