//! Matching-policy tests for the protocol name resolver
//!
//! Covers the typo/casing/partial-match policies that real users hit:
//! ticker aliases, spaced spellings, and the ordered substring fallback.

use rstest::rstest;
use test_case::test_case;

use emrys_agent::errors::ResolveError;
use emrys_agent::protocols::ProtocolRegistry;

fn registry() -> ProtocolRegistry {
    ProtocolRegistry::bundled().unwrap()
}

#[test_case("SOON SVM", "SOON_SVM"; "spaced spelling")]
#[test_case("soon svm", "SOON_SVM"; "lower case alias")]
#[test_case("IBC protocol", "IBC"; "alias with suffix word")]
#[test_case("walrus storage", "WALRUS"; "storage alias")]
#[test_case("ZPL UTXO Bridge", "ZPL_UTXO_BRIDGE"; "mixed case product name")]
#[test_case("eth", "ETHEREUM"; "ticker eth")]
#[test_case("AVAX", "AVALANCHE"; "ticker avax")]
#[test_case("binance smart chain", "BSC"; "long chain name")]
fn alias_matching(input: &str, expected_key: &str) {
    assert_eq!(registry().resolve(input).unwrap().key, expected_key);
}

#[test_case("SVM", "SVM"; "exact beats soon svm substring")]
#[test_case("UTXO", "UTXO"; "exact beats zpl bridge substring")]
#[test_case("SOON", "SOON_SVM"; "prefix falls through to substring")]
#[test_case("osmo", "OSMOSIS"; "partial chain name")]
#[test_case("what about POLKADOT then", "POLKADOT"; "key embedded in sentence")]
fn fallback_matching(input: &str, expected_key: &str) {
    assert_eq!(registry().resolve(input).unwrap().key, expected_key);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_inputs_are_invalid(#[case] input: &str) {
    assert!(matches!(
        registry().resolve(input),
        Err(ResolveError::InvalidInput { .. })
    ));
}

#[rstest]
#[case("totally-unknown-xyz")]
#[case("qqqq")]
#[case("12345")]
fn unknown_inputs_are_not_found_with_echo(#[case] input: &str) {
    match registry().resolve(input) {
        Err(ResolveError::NotFound { input: echoed }) => assert_eq!(echoed, input),
        other => panic!("expected NotFound for '{}', got {:?}", input, other.is_ok()),
    }
}

/// The fallback must stay deterministic: resolving the same partial input
/// repeatedly always lands on the same entry, in table order.
#[test]
fn substring_fallback_is_deterministic() {
    let registry = registry();
    let first = registry.resolve("SOON").unwrap().key;
    for _ in 0..50 {
        assert_eq!(registry.resolve("SOON").unwrap().key, first);
    }
    assert_eq!(first, "SOON_SVM");
}
