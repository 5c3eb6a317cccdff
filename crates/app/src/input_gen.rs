//! Sample input generation.
//!
//! When no input file is specified, we generate sample data with
//! interesting compression characteristics: mostly text-like content with a
//! skewed symbol distribution, interleaved with runs and a little
//! incompressible noise. That gives the Huffman coder structure to exploit
//! while keeping the summary numbers honest.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `size_bytes` of mixed-compressibility sample data.
///
/// Deterministic for a given `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let chunk_size = (size_bytes - data.len()).min(4096);
        let chunk_type: u8 = rng.gen_range(0..10);

        match chunk_type {
            // 20% runs of a single byte
            0..=1 => {
                let byte_value: u8 = rng.gen_range(b'a'..=b'z');
                data.extend(std::iter::repeat(byte_value).take(chunk_size));
            }

            // 70% skewed text: common letters drawn far more often
            2..=8 => {
                let common = b"etaoin shrdlu";
                let rare = b"bcfgjkmpqvwxyz.,!?";
                for _ in 0..chunk_size {
                    if rng.gen_range(0..10) < 8 {
                        data.push(common[rng.gen_range(0..common.len())]);
                    } else {
                        data.push(rare[rng.gen_range(0..rare.len())]);
                    }
                }
            }

            // 10% incompressible noise
            _ => {
                for _ in 0..chunk_size {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}
