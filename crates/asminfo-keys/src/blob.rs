//! ---
//! asminfo_section: "01-signing-keys"
//! asminfo_subsection: "module"
//! asminfo_type: "source"
//! asminfo_scope: "code"
//! asminfo_description: "Strong-name key interpretation and token derivation."
//! asminfo_version: "v0.1.0"
//! asminfo_owner: "tbd"
//! ---
//! CryptoAPI key blob handling.
//!
//! A key-pair `.snk` file is a raw `PRIVATEKEYBLOB`:
//!
//! ```text
//! BLOBHEADER { bType = 0x07, bVersion = 0x02, reserved: u16, aiKeyAlg: u32 }
//! RSAPUBKEY  { magic = "RSA2", bitlen: u32, pubexp: u32 }
//! modulus[bitlen / 8], prime1, prime2, exponent1, exponent2, coefficient, privateExponent
//! ```
//!
//! The public key recorded in an assembly identity wraps a `PUBLICKEYBLOB`
//! in a 12-byte header naming the signature and hash algorithms.
use sha1::{Digest, Sha1};

use crate::errors::{KeyError, Result};

/// `bType` marker of a CryptoAPI private key blob.
pub const PRIVATE_KEY_BLOB: u8 = 0x07;
const PUBLIC_KEY_BLOB: u8 = 0x06;
const BLOB_VERSION: u8 = 0x02;

const CALG_RSA_SIGN: u32 = 0x0000_2400;
const CALG_SHA1: u32 = 0x0000_8004;

// "RSA1" / "RSA2" little-endian.
const RSA1_MAGIC: u32 = 0x3141_5352;
const RSA2_MAGIC: u32 = 0x3241_5352;

const BLOB_HEADER_LEN: usize = 8;
const RSA_PUB_KEY_LEN: usize = 12;
const KEY_HEADERS_LEN: usize = BLOB_HEADER_LEN + RSA_PUB_KEY_LEN;

/// Length in bytes of a strong-name public key token.
pub const TOKEN_LEN: usize = 8;

/// Extract the strong-name public key embedded in a private key blob.
///
/// The returned bytes are the form stored in assembly metadata, so they can
/// be fed straight into [`strong_name_token`].
pub fn public_key_from_private_blob(blob: &[u8]) -> Result<Vec<u8>> {
    let headers = blob
        .get(..KEY_HEADERS_LEN)
        .ok_or_else(|| malformed(format!("blob is only {} bytes long", blob.len())))?;

    if headers[0] != PRIVATE_KEY_BLOB {
        return Err(malformed(format!(
            "unexpected blob type 0x{:02x}",
            headers[0]
        )));
    }
    if headers[1] != BLOB_VERSION {
        return Err(malformed(format!(
            "unsupported blob version {}",
            headers[1]
        )));
    }

    let magic = read_u32(headers, BLOB_HEADER_LEN);
    if magic != RSA2_MAGIC {
        return Err(malformed(format!("unexpected RSA magic 0x{magic:08x}")));
    }

    // The key pair's own algorithm (signature or key exchange) carries over.
    let key_alg = read_u32(headers, 4);
    let bit_len = read_u32(headers, BLOB_HEADER_LEN + 4);
    let pub_exp = read_u32(headers, BLOB_HEADER_LEN + 8);
    if bit_len == 0 || bit_len % 16 != 0 {
        return Err(malformed(format!("invalid modulus length of {bit_len} bits")));
    }

    let modulus_len = (bit_len / 8) as usize;
    let half_len = modulus_len / 2;
    // modulus + privateExponent are full width, the five CRT values are half width.
    let expected_len = KEY_HEADERS_LEN + 2 * modulus_len + 5 * half_len;
    if blob.len() < expected_len {
        return Err(malformed(format!(
            "blob truncated: expected {expected_len} bytes, found {}",
            blob.len()
        )));
    }
    let modulus = &blob[KEY_HEADERS_LEN..KEY_HEADERS_LEN + modulus_len];

    let mut public_key = Vec::with_capacity(12 + KEY_HEADERS_LEN + modulus_len);
    public_key.extend_from_slice(&CALG_RSA_SIGN.to_le_bytes());
    public_key.extend_from_slice(&CALG_SHA1.to_le_bytes());
    public_key.extend_from_slice(&(KEY_HEADERS_LEN as u32 + bit_len / 8).to_le_bytes());
    public_key.extend_from_slice(&[PUBLIC_KEY_BLOB, BLOB_VERSION, 0, 0]);
    public_key.extend_from_slice(&key_alg.to_le_bytes());
    public_key.extend_from_slice(&RSA1_MAGIC.to_le_bytes());
    public_key.extend_from_slice(&bit_len.to_le_bytes());
    public_key.extend_from_slice(&pub_exp.to_le_bytes());
    public_key.extend_from_slice(modulus);
    Ok(public_key)
}

/// Compute the 8-byte strong-name token: the last eight bytes of the SHA-1
/// digest of the public key, in reverse order.
#[must_use]
pub fn strong_name_token(public_key: &[u8]) -> [u8; TOKEN_LEN] {
    let digest = Sha1::digest(public_key);
    let mut token = [0u8; TOKEN_LEN];
    for (slot, byte) in token.iter_mut().zip(digest.iter().rev()) {
        *slot = *byte;
    }
    token
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn malformed(reason: String) -> KeyError {
    KeyError::MalformedKeyPair(reason)
}
