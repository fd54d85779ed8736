//! Opaque 32-byte identity used for providers, pool tokens, and reserve
//! tokens. The all-zero value is the null identifier and is rejected wherever
//! a real identity is required.

use core::fmt;

/// An address-like identifier. `Ord` so it can key ordered maps.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub [u8; 32]);

impl Address {
    /// The null identifier.
    pub const ZERO: Address = Address([0u8; 32]);

    /// Wrap raw identity bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Address(bytes)
    }

    /// Whether this is the null identifier.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Address(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_null() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address([7u8; 32]).is_zero());
    }

    #[test]
    fn displays_as_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let shown = format!("{}", Address(bytes));
        assert_eq!(shown.len(), 64);
        assert!(shown.starts_with("ab"));
        assert!(shown.ends_with("01"));
    }
}
