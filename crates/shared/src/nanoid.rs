use nanoid::nanoid;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

pub const ALPHABET: [char; 62] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9',
];

const ID_LENGTH: usize = 10;

/// Stable identifier for playground sessions; keeps concurrently mounted
/// playgrounds apart in the type-checking service. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Hash, Eq)]
pub struct NanoId(Arc<str>);

impl NanoId {
    pub fn new<S>(s: S) -> Self
    where
        S: AsRef<str>,
    {
        NanoId(Arc::from(s.as_ref()))
    }

    pub fn generate() -> Self {
        NanoId(Arc::from(nanoid!(ID_LENGTH, &ALPHABET)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NanoId {
    fn default() -> Self {
        NanoId::generate()
    }
}

impl Deref for NanoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for NanoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for NanoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NanoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(NanoId(Arc::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_alphabet() {
        let id = NanoId::generate();
        assert_eq!(id.as_str().chars().count(), ID_LENGTH);
        assert!(id.as_str().chars().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn test_generate_unique() {
        let a = NanoId::generate();
        let b = NanoId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_round_trip() {
        let id = NanoId::new("playground-1");
        assert_eq!(id.to_string(), "playground-1");
        assert_eq!(&*id, "playground-1");
    }
}
