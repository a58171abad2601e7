//! Published test vectors for the Salsa20 family

/// A keystream known-answer test
#[derive(Debug, Clone, Copy)]
pub struct KeystreamVector {
    /// Where the vector comes from
    pub name: &'static str,
    /// Hex-encoded key
    pub key: &'static str,
    /// Hex-encoded nonce
    pub nonce: &'static str,
    /// Starting block counter
    pub counter: u64,
    /// Hex-encoded keystream starting at `counter`
    pub keystream: &'static str,
}

/// An HSalsa20 known-answer test
#[derive(Debug, Clone, Copy)]
pub struct HSalsaVector {
    /// Where the vector comes from
    pub name: &'static str,
    /// Hex-encoded 32-byte key
    pub key: &'static str,
    /// Hex-encoded 16-byte input
    pub input: &'static str,
    /// Hex-encoded 32-byte output
    pub output: &'static str,
}

/// Salsa20/20 keystream vectors
pub const SALSA20: &[KeystreamVector] = &[
    KeystreamVector {
        name: "ECRYPT set 1 vector 0, 256-bit key",
        key: "8000000000000000000000000000000000000000000000000000000000000000",
        nonce: "0000000000000000",
        counter: 0,
        keystream: "e3be8fdd8beca2e3ea8ef9475b29a6e7003951e1097a5c38d23b7a5fad9f6844",
    },
    KeystreamVector {
        name: "ECRYPT set 1 vector 0, 128-bit key",
        key: "80000000000000000000000000000000",
        nonce: "0000000000000000",
        counter: 0,
        keystream: "4dfa5e481da23ea09a31022050859936da52fcee218005164f267cb65f5cfd7f",
    },
    KeystreamVector {
        name: "Salsa20 expansion example, 32-byte key",
        key: "0102030405060708090a0b0c0d0e0f10c9cacbcccdcecfd0d1d2d3d4d5d6d7d8",
        nonce: "65666768696a6b6c",
        counter: 0x74737271706f6e6d,
        keystream: "45254427290f6bc1ff8b7a06aae9d9625990b66a1533c841ef31de22d772287e\
                    68c507e1c5991f02664e4cb054f5f6b8b1a0858206489577c0c384ecea67f64a",
    },
    KeystreamVector {
        name: "Salsa20 expansion example, 16-byte key",
        key: "0102030405060708090a0b0c0d0e0f10",
        nonce: "65666768696a6b6c",
        counter: 0x74737271706f6e6d,
        keystream: "27ad2ef81ec852113043feef25120df7f1c83d900a3732b9062ff6fd8f56bbe1\
                    86556ef6a1a32bebe75eab3391d6701d0ee80510978cb78dab097ab568b6b1c1",
    },
];

/// XSalsa20 keystream vectors
pub const XSALSA20: &[KeystreamVector] = &[KeystreamVector {
    name: "NaCl crypto_stream, second-level key",
    key: "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389",
    nonce: "69696ee955b62b73cd62bda875fc73d68219e0036b7a0b37",
    counter: 0,
    keystream: "eea6a7251c1e72916d11c2cb214d3c252539121d8e234e652d651fa4c8cff880",
}];

/// HSalsa20 vectors
pub const HSALSA20: &[HSalsaVector] = &[
    HSalsaVector {
        name: "NaCl crypto_core_hsalsa20, zero input",
        key: "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742",
        input: "00000000000000000000000000000000",
        output: "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389",
    },
    HSalsaVector {
        name: "NaCl crypto_core_hsalsa20, nonce prefix",
        key: "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389",
        input: "69696ee955b62b73cd62bda875fc73d6",
        output: "dc908dda0b9344a953629b733820778880f3ceb421bb61b91cbd4c3e66256ce4",
    },
    HSalsaVector {
        name: "all-zero key and input",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        input: "00000000000000000000000000000000",
        output: "351f86faa3b988468a850122b65b0acece9c4826806aeee63de9c0da2bd7f91e",
    },
];
