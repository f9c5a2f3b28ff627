mod open;
#[cfg(feature = "serde")]
mod serialize;
pub(crate) mod utils;
