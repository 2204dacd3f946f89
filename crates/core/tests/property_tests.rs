//! Propriétés du codec vérifiées sur des entrées aléatoires

use adnpix_core::{apply_scale, undo_scale, Canvas, Codec, Pixel, Sequence, DEFAULT_MAX_DIMENSION};
use proptest::prelude::*;

fn acgt(max_groups: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['A', 'C', 'G', 'T']), 0..max_groups * 12)
        .prop_map(|bases| bases.into_iter().collect())
}

fn pixels() -> impl Strategy<Value = Vec<Pixel>> {
    proptest::collection::vec(any::<(u8, u8, u8)>(), 0..50)
        .prop_map(|rgb| rgb.into_iter().map(|(r, g, b)| Pixel::new(r, g, b)).collect())
}

proptest! {
    #[test]
    fn prop_roundtrip_with_padding(text in acgt(40)) {
        let codec = Codec::default();
        let canvas = codec.encode(&Sequence::parse(&text)).unwrap();
        let decoded = codec.decode(&canvas).to_string();

        let padding = (12 - text.len() % 12) % 12;
        let expected = format!("{}{}", text, "A".repeat(padding));
        prop_assert_eq!(decoded.len(), canvas.len() * 12);
        prop_assert!(decoded.starts_with(&expected));
        prop_assert!(decoded[expected.len()..].chars().all(|c| c == 'A'));
    }

    #[test]
    fn prop_case_invariance(text in acgt(10)) {
        let codec = Codec::default();
        let upper = codec.encode(&Sequence::parse(&text)).unwrap();
        let lower = codec.encode(&Sequence::parse(&text.to_lowercase())).unwrap();
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn prop_unknown_symbol_is_a(text in acgt(5), index in any::<prop::sample::Index>(), symbol in "[^ACGTacgt]") {
        prop_assume!(!text.is_empty());
        let position = index.index(text.len());
        let mut noisy: Vec<char> = text.chars().collect();
        let mut clean = noisy.clone();
        noisy[position] = symbol.chars().next().unwrap();
        clean[position] = 'A';

        let codec = Codec::default();
        let noisy = codec.encode(&Sequence::parse(&noisy.into_iter().collect::<String>())).unwrap();
        let clean = codec.encode(&Sequence::parse(&clean.into_iter().collect::<String>())).unwrap();
        prop_assert_eq!(noisy, clean);
    }

    #[test]
    fn prop_scale_roundtrip(pixels in pixels(), factor in 1u32..12) {
        let canvas = Canvas::from_pixels(pixels).unwrap();
        let scaled = apply_scale(&canvas, factor, DEFAULT_MAX_DIMENSION).unwrap();
        prop_assert_eq!(scaled.image().width(), canvas.width() * factor);

        let restored = undo_scale(scaled.image(), scaled.metadata()).unwrap();
        prop_assert_eq!(restored, canvas);
    }
}
