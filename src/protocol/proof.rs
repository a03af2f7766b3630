//! Proof data structures and wire encoding.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::groups::GroupParams;
use crate::{Error, Result};

/// Protocol version for serialization compatibility.
const PROTOCOL_VERSION: u8 = 1;

/// Upper bound on an encoded field; fits a 16384-bit modulus.
const MAX_FIELD_BYTES: usize = 2048;

/// Prover's first message: `t = g^r mod p` for an ephemeral nonce `r`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commitment(BigUint);

impl Commitment {
    /// Creates a commitment from a group element.
    pub fn new(t: BigUint) -> Self {
        Self(t)
    }

    /// Returns the group element `t`.
    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// Prover's third message: `s = (r + c·x) mod q`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Response(BigUint);

impl Response {
    /// Creates a response from a scalar.
    pub fn new(s: BigUint) -> Self {
        Self(s)
    }

    /// Returns the scalar `s`.
    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// Complete non-interactive zero-knowledge proof `(t, s)`.
///
/// The challenge is deliberately not part of the proof: verifiers always
/// recompute it from the transcript, so a tampered challenge cannot be
/// smuggled in on the wire.
///
/// # Serialization
///
/// `[version (1 byte)][t_len (4 bytes, BE)][t (BE)][s_len (4 bytes, BE)][s (BE)]`.
/// Decoding validates ranges and subgroup membership against the group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    version: u8,
    commitment: Commitment,
    response: Response,
}

impl Proof {
    /// Creates a proof from commitment and response.
    pub fn new(commitment: Commitment, response: Response) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            commitment,
            response,
        }
    }

    /// Returns the protocol version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the commitment `t`.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Returns the response `s`.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Serializes the proof to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let t_bytes = self.commitment.0.to_bytes_be();
        let s_bytes = self.response.0.to_bytes_be();

        let mut result = Vec::with_capacity(1 + 8 + t_bytes.len() + s_bytes.len());
        result.push(self.version);

        result.extend_from_slice(&(t_bytes.len() as u32).to_be_bytes());
        result.extend_from_slice(&t_bytes);

        result.extend_from_slice(&(s_bytes.len() as u32).to_be_bytes());
        result.extend_from_slice(&s_bytes);

        result
    }

    /// Deserializes and validates a proof against a group description.
    ///
    /// # Errors
    ///
    /// `MalformedProof` on an unsupported version, truncated or trailing
    /// bytes, oversized fields, a commitment outside the group's order-`q`
    /// subgroup, or a response not in `[0, q)`.
    pub fn from_bytes(bytes: &[u8], params: &GroupParams) -> Result<Self> {
        const MIN_PROOF_SIZE: usize = 1 + 4 + 1 + 4 + 1;

        if bytes.len() < MIN_PROOF_SIZE {
            return Err(Error::MalformedProof(format!(
                "proof too small: {} bytes",
                bytes.len()
            )));
        }

        let version = bytes[0];
        if version != PROTOCOL_VERSION {
            return Err(Error::MalformedProof(format!(
                "unsupported proof version: {version}"
            )));
        }

        let mut pos = 1;
        let t_bytes = read_field(bytes, &mut pos, "commitment")?;
        let s_bytes = read_field(bytes, &mut pos, "response")?;

        if pos != bytes.len() {
            return Err(Error::MalformedProof(format!(
                "proof has {} trailing bytes",
                bytes.len() - pos
            )));
        }

        let t = BigUint::from_bytes_be(t_bytes);
        let s = BigUint::from_bytes_be(s_bytes);

        params.validate_element(&t)?;
        if &s >= params.order() {
            return Err(Error::MalformedProof(
                "response must lie in [0, q)".to_string(),
            ));
        }

        Ok(Proof {
            version,
            commitment: Commitment::new(t),
            response: Response::new(s),
        })
    }
}

fn read_field<'a>(bytes: &'a [u8], pos: &mut usize, label: &str) -> Result<&'a [u8]> {
    if *pos + 4 > bytes.len() {
        return Err(Error::MalformedProof(format!(
            "truncated proof: missing {label} length"
        )));
    }

    let len_bytes: [u8; 4] = bytes[*pos..*pos + 4]
        .try_into()
        .unwrap_or_else(|_| unreachable!("slice is exactly 4 bytes"));
    let len = u32::from_be_bytes(len_bytes) as usize;
    *pos += 4;

    if len == 0 || len > MAX_FIELD_BYTES {
        return Err(Error::MalformedProof(format!("invalid {label} length: {len}")));
    }

    if *pos + len > bytes.len() {
        return Err(Error::MalformedProof(format!(
            "truncated proof: incomplete {label} data"
        )));
    }

    let field = &bytes[*pos..*pos + len];
    *pos += len;
    Ok(field)
}
