pub mod constants;
#[cfg(any(feature = "json", feature = "bincode"))]
pub mod io;
pub mod protocol;
