pub mod zones;

pub use zones::{Hand, Library};
