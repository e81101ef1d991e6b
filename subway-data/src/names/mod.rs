//! Station name normalization.
//!
//! Agency stop tables use terse names like `"86 St - 4 Av"`. The lookup
//! tool needs a readable display name, a key to match spoken or typed
//! names against, and the alternative phrasings a rider might use.

mod normalize;

pub use normalize::{StopNames, normalize};
