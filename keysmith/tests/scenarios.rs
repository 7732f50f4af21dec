//! End-to-end scenarios against the public API.

use std::sync::Arc;

use assert_matches::assert_matches;
use keysmith::alphabet::DEFAULT_SYMBOLS;
use keysmith::{Codec, ConstructionError, DecodeError, EncodeError, Error, KeySize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_case::test_case;

#[test_case(3, 0, "aaa"; "size 3 id 0")]
#[test_case(3, 1, "aab"; "size 3 id 1")]
#[test_case(3, 10, "aak"; "size 3 id 10")]
#[test_case(5, 1024, "aaa2q"; "size 5 id 1024")]
#[test_case(7, 1024, "aaaaa2q"; "size 7 id 1024")]
#[test_case(0, 3_333_333, "b9qav"; "dynamic id 3333333")]
fn alphanumeric_scenarios(size: usize, id: u64, key: &str) {
    let codec = Codec::new(DEFAULT_SYMBOLS, KeySize::new(size)).unwrap();

    assert_eq!(codec.encode(id).unwrap(), key);
    assert_eq!(codec.decode(key).unwrap(), id);
}

#[test_log::test]
fn ternary_codec_range() {
    let codec = Codec::new("abc", KeySize::new(3)).unwrap();

    assert_eq!(codec.total(), 27);
    assert_eq!(codec.encode(26).unwrap(), "ccc");
    assert_matches!(
        codec.encode(27),
        Err(EncodeError::IdOutOfRange { id: 27, total: 27 })
    );
    assert_matches!(codec.encode(1_000), Err(EncodeError::IdOutOfRange { .. }));
}

#[test]
fn dynamic_zero_is_a_single_zero_digit() {
    let codec = Codec::new("xyz", KeySize::Dynamic).unwrap();

    assert_eq!(codec.encode(0).unwrap(), "x");
    assert_eq!(codec.decode("x").unwrap(), 0);
    assert_eq!(codec.decode("xxx").unwrap(), 0);
}

#[test_case(DEFAULT_SYMBOLS, 13; "alphanumeric")]
#[test_case("01", 65; "binary")]
#[test_case("0123456789abcdef", 17; "hex")]
fn saturated_total(alphabet: &str, size: usize) {
    let codec = Codec::new(alphabet, KeySize::new(size)).unwrap();
    assert_eq!(codec.total(), u64::MAX);
    assert_eq!(codec.last_id(), u64::MAX - 1);
}

#[test]
fn construction_rejections() {
    assert_matches!(
        Codec::new("", KeySize::Dynamic),
        Err(ConstructionError::EmptyAlphabet)
    );
    assert_matches!(
        Codec::new("abcabc", KeySize::new(3)),
        Err(ConstructionError::DuplicateSymbol('a'))
    );
    assert_matches!(
        Codec::with_size_parts("abc", &[-4]),
        Err(ConstructionError::InvalidSize(-4))
    );
}

#[test_log::test]
fn decode_rejections() {
    let codec = Codec::new(DEFAULT_SYMBOLS, KeySize::new(3)).unwrap();

    assert_matches!(
        codec.decode("abcdef"),
        Err(DecodeError::LengthMismatch { expected: 3, actual: 6 })
    );
    assert_matches!(codec.decode("aA1"), Err(DecodeError::UnknownSymbol('A')));
}

#[test]
fn errors_convert_into_the_top_level_error() {
    fn roundtrip(codec: &Codec, id: u64) -> Result<u64, Error> {
        let key = codec.encode(id)?;
        Ok(codec.decode(&key)?)
    }

    fn build(alphabet: &str) -> Result<Codec, Error> {
        Ok(Codec::new(alphabet, KeySize::new(2))?)
    }

    let codec = build("abcd").unwrap();
    assert_eq!(roundtrip(&codec, 15).unwrap(), 15);
    assert_matches!(roundtrip(&codec, 16), Err(Error::Encode(_)));
    assert_matches!(build("aa"), Err(Error::Construction(_)));
}

#[test]
fn default_alphabet_codecs_are_independent() {
    let mut first_rng = StdRng::seed_from_u64(1);
    let mut second_rng = StdRng::seed_from_u64(2);
    let first = Codec::with_default_alphabet(&mut first_rng, KeySize::new(6));
    let second = Codec::with_default_alphabet(&mut second_rng, KeySize::new(6));

    assert_ne!(first.alphabet(), second.alphabet());

    let key = first.encode(123_456).unwrap();
    assert_eq!(first.decode(&key).unwrap(), 123_456);
    assert_eq!(key.chars().count(), 6);
}

#[test]
fn shared_codec_across_threads() {
    let codec = Arc::new(Codec::new(DEFAULT_SYMBOLS, KeySize::new(8)).unwrap());

    let handles = (0..8u64)
        .map(|worker| {
            let codec = Arc::clone(&codec);
            std::thread::spawn(move || {
                for id in (worker..100_000).step_by(8) {
                    let key = codec.encode(id).unwrap();
                    assert_eq!(codec.decode(&key).unwrap(), id);
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn version_is_prefixed() {
    let version = keysmith::version();
    assert!(version.starts_with('v'));
    assert_eq!(&version[1..], env!("CARGO_PKG_VERSION"));
}
