//! Seeds for reproducible team generation.

use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic team generation.
///
/// A 128-bit (16-byte) seed that initializes the random number generator
/// driving the trial shuffles. The same seed over the same roster and locks
/// produces the same partition, enabling:
///
/// - Reproducing a roll the group liked
/// - Deterministic testing
///
/// The textual form (display, parse, serde) is a 32-character hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSeed(pub(crate) [u8; 16]);

impl fmt::Display for BalanceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 32 hex characters")]
pub struct ParseSeedError {
    pub input: String,
}

impl FromStr for BalanceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError {
                input: s.to_owned(),
            });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError {
            input: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for BalanceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BalanceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `BalanceSeed` values with `rng.random()`.
impl Distribution<BalanceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BalanceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        BalanceSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_random_seed() {
        let seed: BalanceSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: BalanceSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed, deserialized);
    }

    #[test]
    fn test_display_is_32_char_big_endian_hex() {
        let seed = BalanceSeed([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
        assert_eq!(BalanceSeed([0; 16]).to_string(), "0".repeat(32));
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let seed: BalanceSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_rejects_wrong_length_and_non_hex() {
        assert!("0123".parse::<BalanceSeed>().is_err());
        assert!("0".repeat(33).parse::<BalanceSeed>().is_err());
        assert!(
            "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<BalanceSeed>()
                .is_err()
        );
        assert!("".parse::<BalanceSeed>().is_err());
    }
}
