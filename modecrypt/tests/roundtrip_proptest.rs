//! Property-based round-trip tests across modes and paddings

mod common;

use common::ToyCipher;
use modecrypt::{configure, Mode, Padding};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

proptest! {
    #[test]
    fn pkcs7_round_trip(
        mode in any_mode(),
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let cipher = ToyCipher::new(16);
        let config = configure(mode, Padding::Pkcs7, &key, &iv);

        let ciphertext = config.encrypt(&data, &cipher).unwrap();
        let plaintext = config.decrypt(&ciphertext, &cipher).unwrap();

        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn pkcs5_round_trip_on_8_byte_blocks(
        mode in prop::sample::select(vec![Mode::Cbc, Mode::Ecb]),
        key in any::<[u8; 24]>(),
        iv in any::<[u8; 8]>(),
        data in prop::collection::vec(any::<u8>(), 0..100)
    ) {
        let cipher = ToyCipher::new(8);
        let config = configure(mode, Padding::Pkcs5, &key, &iv);

        let ciphertext = config.encrypt(&data, &cipher).unwrap();
        prop_assert_eq!(ciphertext.len() % 8, 0);
        prop_assert_eq!(config.decrypt(&ciphertext, &cipher).unwrap(), data);
    }

    #[test]
    fn stream_modes_are_length_preserving(
        mode in prop::sample::select(vec![Mode::Cfb, Mode::Ofb, Mode::Ctr]),
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let cipher = ToyCipher::new(16);
        let config = configure(mode, Padding::None, &key, &iv);

        let ciphertext = config.encrypt(&data, &cipher).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(config.decrypt(&ciphertext, &cipher).unwrap(), data);
    }

    #[test]
    fn stream_prefix_is_stable(
        mode in prop::sample::select(vec![Mode::Cfb, Mode::Ofb, Mode::Ctr]),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..100),
        cut in any::<prop::sample::Index>()
    ) {
        let cipher = ToyCipher::new(16);
        let config = configure(mode, Padding::None, b"0123456789abcdef", &iv);
        let cut = cut.index(data.len());

        let full = config.encrypt(&data, &cipher).unwrap();
        let prefix = config.encrypt(&data[..cut], &cipher).unwrap();
        prop_assert_eq!(&full[..cut], &prefix[..]);
    }
}
