//! Published Ed25519 key generation vectors

/// Seed and public key from RFC 8032 section 7.1
#[derive(Debug, Clone, Copy)]
pub struct Rfc8032Vector {
    pub name: &'static str,
    pub seed: &'static str,
    pub public: &'static str,
}

pub const RFC8032_VECTORS: &[Rfc8032Vector] = &[
    Rfc8032Vector {
        name: "TEST 1",
        seed: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    },
    Rfc8032Vector {
        name: "TEST 2",
        seed: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        public: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
    },
    Rfc8032Vector {
        name: "TEST 3",
        seed: "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
        public: "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
    },
];

/// Decode a 64-character hex string into 32 bytes
///
/// Panics on malformed input; only meant for literals in tests.
pub fn hex32(s: &str) -> [u8; 32] {
    let bytes = hex::decode(s).expect("valid hex");
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out
}
