use gitconfig_core::{ConfigView, OverlayView, Scope, Value};
use proptest::prelude::*;
use std::collections::HashMap;

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    // Small alphabet so names collide and share prefixes often.
    prop::collection::vec(("[a-c]{1,2}(\\.[a-c]{1,2})?", "[a-c:0-9]{0,4}"), 0..24)
}

proptest! {
    #[test]
    fn test_all_sorted_and_unique(input in pairs()) {
        let scope = Scope::from_pairs(input.clone());
        let names: Vec<_> = scope.all().iter().map(Value::name).collect();

        // Invariant 1: strictly ascending, hence no duplicates
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));

        // Invariant 2: every input name survives, with its last value
        let mut last: HashMap<&str, &str> = HashMap::new();
        for (name, raw) in &input {
            last.insert(name, raw);
        }
        prop_assert_eq!(scope.len(), last.len());
        for (name, raw) in last {
            prop_assert_eq!(scope.get(name).map(Value::raw), Some(raw));
        }
    }

    #[test]
    fn test_find_exact_is_get(input in pairs(), probe in "[a-c]{1,2}(\\.[a-c]{1,2})?") {
        let scope = Scope::from_pairs(input);
        let found = scope.find(&probe);
        let expected: Vec<&Value> = scope.get(&probe).into_iter().collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn test_find_prefix_is_subsequence_of_all(input in pairs(), prefix in "[a-c.]{0,3}") {
        let scope = Scope::from_pairs(input);
        let found = scope.find(&format!("{prefix}*"));
        let expected: Vec<&Value> = scope
            .all()
            .iter()
            .filter(|v| v.name().starts_with(&prefix))
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn test_overlay_precedence(
        system in pairs(),
        global in pairs(),
        local in pairs(),
        prefix in "[a-c.]{0,2}",
    ) {
        let system = Scope::from_pairs(system);
        let global = Scope::from_pairs(global);
        let local = Scope::from_pairs(local);
        let config = OverlayView::new(system.clone(), global.clone(), local.clone());

        // Invariant 1: the merged view is sorted and unique
        let names: Vec<_> = config.all().iter().map(Value::name).collect();
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));

        // Invariant 2: every visible value comes from the highest scope defining it
        for value in config.all() {
            let expected = local
                .get(value.name())
                .or_else(|| global.get(value.name()))
                .or_else(|| system.get(value.name()));
            prop_assert_eq!(Some(value), expected);
            prop_assert_eq!(config.get(value.name()), Some(value));
        }

        // Invariant 3: the merged view covers every name of every scope
        let total: std::collections::BTreeSet<_> =
            system.names().chain(global.names()).chain(local.names()).collect();
        prop_assert_eq!(config.len(), total.len());

        // Invariant 4: prefix search over the overlay agrees with the merged view
        let found = config.find(&format!("{prefix}*"));
        let expected: Vec<&Value> = config
            .all()
            .iter()
            .filter(|v| v.name().starts_with(&prefix))
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn test_list_round_trips_raw(raw in "[a-c:]{0,8}") {
        let value = Value::new("p.x", raw.clone());
        prop_assert_eq!(value.as_list().join(":"), raw.clone());
        prop_assert_eq!(value.as_list().len(), raw.matches(':').count() + 1);
    }

    #[test]
    fn test_int_agrees_with_display(n in any::<i64>()) {
        let value = Value::new("p.x", n.to_string());
        prop_assert_eq!(value.as_int(), Some(n));
    }
}
