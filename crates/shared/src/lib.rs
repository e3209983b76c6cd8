mod nanoid;

pub use nanoid::{ALPHABET, NanoId};
