mod core;

pub use self::core::Options;
