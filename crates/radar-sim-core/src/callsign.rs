//! Fixed-capacity vessel callsign.

use std::ffi::CStr;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CALLSIGN_CAPACITY, CALLSIGN_MAX_LEN};
use crate::error::FleetError;

/// Short display name of a contact.
///
/// Stored inline as NUL-terminated bytes so a host can read it as a C string
/// without copying. Holds at most [`CALLSIGN_MAX_LEN`] printable ASCII
/// characters; the trailing bytes are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Callsign {
    bytes: [u8; CALLSIGN_CAPACITY],
}

impl Callsign {
    pub fn new(value: &str) -> Result<Self, FleetError> {
        if value.len() > CALLSIGN_MAX_LEN {
            return Err(FleetError::too_long(value));
        }
        if !value.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
            return Err(FleetError::CallsignNotPrintable(value.to_string()));
        }

        let mut bytes = [0u8; CALLSIGN_CAPACITY];
        bytes[..value.len()].copy_from_slice(value.as_bytes());
        Ok(Self { bytes })
    }

    /// Builds a callsign from a literal, failing compilation when used in a
    /// const context with an invalid value.
    pub const fn from_static(value: &'static str) -> Self {
        let src = value.as_bytes();
        assert!(src.len() <= CALLSIGN_MAX_LEN, "callsign too long");

        let mut bytes = [0u8; CALLSIGN_CAPACITY];
        let mut i = 0;
        while i < src.len() {
            assert!(
                src[i].is_ascii_graphic() || src[i] == b' ',
                "callsign must be printable ASCII"
            );
            bytes[i] = src[i];
            i += 1;
        }
        Self { bytes }
    }

    /// Number of characters before the terminator.
    pub fn len(&self) -> usize {
        self.bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(CALLSIGN_MAX_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII.
        std::str::from_utf8(&self.bytes[..self.len()]).unwrap_or_default()
    }

    /// The callsign with its NUL terminator, for C callers.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.bytes).unwrap_or_default()
    }
}

impl TryFrom<String> for Callsign {
    type Error = FleetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Callsign {
    type Error = FleetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Callsign> for String {
    fn from(value: Callsign) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callsign({:?})", self.as_str())
    }
}
