//! Property-based tests for the type registry
//!
//! These tests use proptest to check registry invariants across randomly
//! generated names and definition files.

use emugen::types::{LoadConfig, TypeId, TypeRegistry};
use emugen_core::builtins;
use proptest::prelude::*;

fn type_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,15}"
}

fn width() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![0u32, 8, 16, 32])
}

fn format_token() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["%d", "%u", "%c", "0x%x", "0x%08x", "%f", "%p"]).prop_map(str::to_string)
}

fn definition() -> impl Strategy<Value = (String, u32, String)> {
    (type_name(), width(), format_token())
}

proptest! {
    /// Property: resolve never fails, and anything not registered is UNKNOWN
    #[test]
    fn resolve_falls_back_for_unregistered_names(name in ".*") {
        let registry = TypeRegistry::new();
        let desc = registry.resolve(&name);
        if builtins::from_str(&name).is_some() {
            prop_assert_eq!(desc.name(), name.as_str());
        } else {
            prop_assert!(desc.is_unknown());
            prop_assert_eq!(desc.id(), TypeId::UNKNOWN);
        }
    }

    /// Property: every loaded line gets the next id, in file order
    #[test]
    fn ids_are_sequential_in_file_order(defs in prop::collection::vec(definition(), 0..32)) {
        let source: String = defs
            .iter()
            .map(|(name, width, format)| format!("{name}\t{width}  {format}\n"))
            .collect();
        let mut registry = TypeRegistry::new();

        let report = registry.load_from_str(&source, &LoadConfig::default()).unwrap();

        let expected: Vec<TypeId> = (0..defs.len() as u32).map(|i| TypeId(6 + i)).collect();
        prop_assert_eq!(&report.defined, &expected);
        prop_assert_eq!(registry.next_id(), TypeId(6 + defs.len() as u32));
    }

    /// Property: the last definition of a name is the one that resolves
    #[test]
    fn last_definition_wins(defs in prop::collection::vec(definition(), 1..32)) {
        let source: String = defs
            .iter()
            .map(|(name, width, format)| format!("{name} {width} {format}\n"))
            .collect();
        let mut registry = TypeRegistry::new();
        registry.load_from_str(&source, &LoadConfig::default()).unwrap();

        for (name, _, _) in &defs {
            let (index, (_, width, format)) = defs
                .iter()
                .enumerate()
                .rev()
                .find(|(_, (n, _, _))| n == name)
                .unwrap();
            let desc = registry.resolve(name);
            prop_assert_eq!(desc.id(), TypeId(6 + index as u32));
            prop_assert_eq!(desc.width(), *width);
            prop_assert_eq!(desc.format(), format.as_str());
        }
    }

    /// Property: ids stay unique across the reachable descriptors
    #[test]
    fn reachable_ids_are_unique(defs in prop::collection::vec(definition(), 0..32)) {
        let mut registry = TypeRegistry::new();
        for (name, width, format) in &defs {
            registry.define(name, i64::from(*width), format).unwrap();
        }

        let ids: Vec<TypeId> = registry.descriptors().iter().map(|d| d.id()).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        prop_assert_eq!(ids, deduped);
    }

    /// Property: widths outside the converter table are always rejected
    #[test]
    fn unsupported_widths_are_rejected(name in type_name(), width in any::<i32>()) {
        prop_assume!(![0, 8, 16, 32].contains(&width));
        let mut registry = TypeRegistry::new();
        let source = format!("{name} {width} %d\n");

        let err = registry.load_from_str(&source, &LoadConfig::default()).unwrap_err();

        prop_assert!(err.is_parse());
        prop_assert_eq!(err.line(), Some(1));
        prop_assert_eq!(registry.next_id(), TypeId(6));
    }
}
