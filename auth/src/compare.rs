//! Constant-time comparison of secret material.

use subtle::ConstantTimeEq;

/// Compare two byte slices without leaking where they differ.
///
/// A length mismatch returns `false` straight away; lengths are not secret
/// here (signatures and derived keys have fixed sizes). Equal-length inputs
/// are compared with `subtle`, which touches every byte.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
