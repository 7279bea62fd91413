use proptest::prelude::*;
use zoning_core::ReformType;

proptest! {
    #[test]
    fn parse_is_total_and_idempotent(label in ".{0,40}") {
        let parsed = ReformType::parse(&label);
        let reparsed = ReformType::parse(parsed.label());
        prop_assert_eq!(parsed, reparsed);
    }

    #[test]
    fn recognized_labels_ignore_case(idx in 0usize..9, upper in any::<bool>()) {
        let rt = ReformType::RECOGNIZED[idx].clone();
        let label = if upper {
            rt.label().to_ascii_uppercase()
        } else {
            rt.label().to_ascii_lowercase()
        };
        prop_assert_eq!(ReformType::parse(&label), rt);
    }
}
