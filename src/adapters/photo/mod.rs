//! Photo picker adapters.

mod canned;

pub use canned::CannedPhotoPicker;
