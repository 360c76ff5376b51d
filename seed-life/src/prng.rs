//! Seeded pseudo-random numbers: the `xmur3` string hash and the `mulberry32`
//! stream it seeds. Both must stay bit-exact, since every generated artifact is
//! a function of their output.

use rand::RngCore;
use rand::rand_core::impls;

const XMUR3_INIT: u32 = 1779033703;
const XMUR3_CHAR_MUL: u32 = 3432918353;
const XMUR3_MIX_MUL_1: u32 = 2246822507;
const XMUR3_MIX_MUL_2: u32 = 3266489909;

const MULBERRY32_INCREMENT: u32 = 0x6D2B79F5;
const TWO_POW_32: f64 = 4294967296.0;

/// Hashes a string to the 32-bit seed of a [`Mulberry32`] stream.
pub fn hash_seed(seed: &str) -> u32 {
    Xmur3::new(seed).next_u32()
}

/// String hash in generator form. Each call to [`Xmur3::next_u32`] re-mixes the
/// accumulator, so one string can yield several independent seeds.
///
/// Characters are hashed as UTF-16 code units.
#[derive(Clone, Debug)]
pub struct Xmur3 {
    hash: u32,
}

impl Xmur3 {
    pub fn new(input: &str) -> Self {
        let len = input.encode_utf16().count() as u32;
        let hash = input
            .encode_utf16()
            .fold(XMUR3_INIT ^ len, |hash, unit| {
                (hash ^ u32::from(unit))
                    .wrapping_mul(XMUR3_CHAR_MUL)
                    .rotate_left(13)
            });
        Self { hash }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.hash;
        h = (h ^ (h >> 16)).wrapping_mul(XMUR3_MIX_MUL_1);
        h = (h ^ (h >> 13)).wrapping_mul(XMUR3_MIX_MUL_2);
        h ^= h >> 16;
        self.hash = h;
        h
    }
}

/// The `mulberry32` generator. One instance owns its state; it is `Clone` so a
/// stream can be forked deliberately, never shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds a stream from the hash of `seed`.
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_word()) / TWO_POW_32
    }

    fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY32_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

/// Formats a float the way the per-cell seed strings have always been built:
/// shortest round-trip digits, with exponent notation only outside
/// `1e-6 <= |x| < 1e21`.
pub fn js_number_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{value}")
    } else if magnitude >= 1e21 {
        format!("{value:e}").replacen('e', "e+", 1)
    } else {
        format!("{value:e}")
    }
}
