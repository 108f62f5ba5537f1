use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tessera_kernel::merge::{Merge, Merger, merge};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..3).prop_map(Value::from),
    ]
}

fn plain_entries() -> impl Strategy<Value = BTreeMap<String, Value>> {
    let key = prop::sample::select(vec!["a", "b", "c", "Options"]).prop_map(str::to_owned);
    prop::collection::btree_map(key, leaf(), 0..4)
}

fn object(entries: BTreeMap<String, Value>) -> Value {
    Value::Object(entries.into_iter().collect::<Map<_, _>>())
}

/// Option documents with plain keys and up to three levels of `*Options` objects.
fn document() -> impl Strategy<Value = Value> {
    plain_entries().prop_map(object).prop_recursive(3, 24, 2, |inner| {
        let key = prop::sample::select(vec!["fooOptions", "barOptions"]).prop_map(str::to_owned);
        (plain_entries(), prop::collection::btree_map(key, inner, 0..2)).prop_map(|(mut plain, nested)| {
            plain.extend(nested);
            object(plain)
        })
    })
}

#[derive(Debug, Clone, PartialEq, Merge)]
struct Patch {
    width: Option<u32>,
    label: Option<String>,
    tags: Vec<u8>,
}

fn patch() -> impl Strategy<Value = Patch> {
    (any::<Option<u32>>(), any::<Option<String>>(), prop::collection::vec(any::<u8>(), 0..3))
        .prop_map(|(width, label, tags)| Patch { width, label, tags })
}

proptest! {
    #[test]
    fn sources_are_never_mutated(target in document(), first in document(), second in document()) {
        let snapshot = (first.clone(), second.clone());
        let mut target = target;
        merge(&mut target, &[&first, &second]).unwrap();
        prop_assert_eq!(snapshot, (first, second));
    }

    #[test]
    fn merging_twice_changes_nothing(target in document(), source in document()) {
        let mut once = target;
        merge(&mut once, &[&source]).unwrap();
        let mut twice = once.clone();
        merge(&mut twice, &[&source]).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn later_plain_keys_win(target in document(), first in document(), last in document()) {
        let merger = Merger::new();
        let mut merged = target;
        merger.merge(&mut merged, &[&first, &last]).unwrap();

        let (Value::Object(merged), Value::Object(last)) = (&merged, &last) else { unreachable!() };
        for (key, value) in last.iter().filter(|(key, _)| !merger.is_nested_key(key)) {
            prop_assert_eq!(merged.get(key), Some(value));
        }
    }

    #[test]
    fn absent_keys_keep_target_values(target in document(), source in document()) {
        let mut merged = target.clone();
        merge(&mut merged, &[&source]).unwrap();

        let (Value::Object(target), Value::Object(source), Value::Object(merged)) = (&target, &source, &merged) else {
            unreachable!()
        };
        for (key, value) in target.iter().filter(|(key, _)| !source.contains_key(*key)) {
            prop_assert_eq!(merged.get(key), Some(value));
        }
    }

    #[test]
    fn typed_merge_skips_none(target in patch(), source in patch()) {
        let mut merged = target.clone();
        merged.merge_from(&source);

        prop_assert_eq!(merged.width, source.width.or(target.width));
        prop_assert_eq!(merged.label, source.label.or(target.label));
        prop_assert_eq!(merged.tags, source.tags);
    }
}
