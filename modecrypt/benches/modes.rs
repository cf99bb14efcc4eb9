//! Benchmarks for the modes of operation.
//!
//! Measures config-level encrypt/decrypt throughput for every mode over the
//! XOR demonstration cipher, so the numbers reflect mode and padding overhead
//! rather than the cost of a real block cipher.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use modecrypt::{configure, DummyCipher, Mode, Padding};

/// Message sizes in bytes.
const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

const KEY: &[u8; 16] = b"0123456789abcdef";
const IV: &[u8; 16] = b"fedcba9876543210";

fn bench_encrypt(c: &mut Criterion) {
    let cipher = DummyCipher::new(16);
    let mut group = c.benchmark_group("encrypt");

    for mode in Mode::ALL {
        let config = configure(mode, Padding::Pkcs7, KEY, IV);
        for size in SIZES {
            let data = vec![0xa5u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &data, |b, data| {
                b.iter(|| config.encrypt(black_box(data), &cipher).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_decrypt(c: &mut Criterion) {
    let cipher = DummyCipher::new(16);
    let mut group = c.benchmark_group("decrypt");

    for mode in Mode::ALL {
        let config = configure(mode, Padding::Pkcs7, KEY, IV);
        for size in SIZES {
            let ciphertext = config.encrypt(&vec![0xa5u8; size], &cipher).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &ciphertext, |b, ct| {
                b.iter(|| config.decrypt(black_box(ct), &cipher).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encrypt, bench_decrypt);
criterion_main!(benches);
