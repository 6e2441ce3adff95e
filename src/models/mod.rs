mod violation;

pub use violation::*;
