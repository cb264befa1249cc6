use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, StdError, StdResult};

/// Opaque 32 byte identifier for an alliance record. Serialized as a hex
/// string on the wire, stored as raw bytes in table keys.
#[cw_serde]
pub struct AllianceEntity(HexBinary);

impl AllianceEntity {
    pub const LENGTH: usize = 32;

    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        AllianceEntity(HexBinary::from(bytes.to_vec()))
    }

    pub fn from_slice(bytes: &[u8]) -> StdResult<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(StdError::generic_err(format!(
                "alliance entity id must be {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            )));
        }
        Ok(AllianceEntity(HexBinary::from(bytes.to_vec())))
    }

    pub fn from_hex(input: &str) -> StdResult<Self> {
        let decoded = HexBinary::from_hex(input)?;
        Self::from_slice(decoded.as_slice())
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.as_slice().to_vec()
    }

    pub fn len(&self) -> usize {
        self.0.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_slice().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.len() == Self::LENGTH
    }
}

// message payloads carry unchecked ids, handlers assert the length
impl From<HexBinary> for AllianceEntity {
    fn from(bytes: HexBinary) -> Self {
        AllianceEntity(bytes)
    }
}

impl fmt::Display for AllianceEntity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}
