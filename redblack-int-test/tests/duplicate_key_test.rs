use redblack_int_test::test_util::{cleanup, create_test_context, run_test, snapshot, value_for};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_duplicates_are_counted_separately() {
    run_test(
        create_test_context,
        |ctx| {
            let tree = ctx.tree();
            let mut tree = tree.write();
            for serial in 0..50 {
                tree.insert(7, value_for(7, serial));
            }
            tree.insert(3, "three".to_string());

            assert_eq!(tree.size(), 51);
            assert_eq!(tree.len(), 51);
            assert_eq!(tree.list_keys(Some(&7), Some(&7)).len(), 50);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_duplicates_iterate_in_insertion_order() {
    run_test(
        create_test_context,
        |ctx| {
            let tree = ctx.tree();
            let mut tree = tree.write();
            for (serial, key) in [5, 2, 5, 8, 5, 2, 5].into_iter().enumerate() {
                tree.insert(key, value_for(key, serial));
            }

            let fives: Vec<String> = tree
                .range(Some(&5), Some(&5))
                .map(|(_, v)| v.clone())
                .collect();
            assert_eq!(fives, vec!["5#0", "5#2", "5#4", "5#6"]);
            let backwards: Vec<String> = tree
                .range_rev(Some(&5), Some(&5))
                .map(|(_, v)| v.clone())
                .collect();
            assert_eq!(backwards, vec!["5#6", "5#4", "5#2", "5#0"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_deleting_duplicates_one_at_a_time() {
    run_test(
        create_test_context,
        |ctx| {
            let tree = ctx.tree();
            let mut tree = tree.write();
            for serial in 0..10 {
                tree.insert(1, value_for(1, serial));
                tree.insert(2, value_for(2, serial));
            }

            let mut removed = Vec::new();
            while let Some((key, value)) = tree.delete(&1) {
                assert_eq!(key, 1);
                removed.push(value);
            }
            removed.sort();
            removed.dedup();
            assert_eq!(removed.len(), 10);
            assert!(!tree.contains_key(&1));
            assert_eq!(tree.len(), 10);
            assert!(snapshot(&tree).iter().all(|(k, _)| *k == 2));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_cluster_boundaries() {
    run_test(
        create_test_context,
        |ctx| {
            let tree = ctx.tree();
            let mut tree = tree.write();
            for (serial, key) in [10, 20, 20, 20, 30].into_iter().enumerate() {
                tree.insert(key, value_for(key, serial));
            }

            assert_eq!(tree.first_greater(&20).map(|(k, _)| *k), Some(30));
            assert_eq!(tree.last_less(&20).map(|(k, _)| *k), Some(10));
            assert_eq!(tree.first_at_least(&20).map(|(_, v)| v.as_str()), Some("20#1"));
            assert_eq!(tree.last_at_most(&20).map(|(_, v)| v.as_str()), Some("20#3"));

            // Whichever copy search lands on, stepping away from it leaves the cluster.
            let hit = tree.search_node(&20).expect("20 was inserted");
            let mut cursor = Some(hit);
            let mut seen = 0;
            while let Some(id) = cursor {
                match tree.entry(id) {
                    Some((20, _)) => seen += 1,
                    _ => break,
                }
                cursor = tree.successor(id);
            }
            cursor = tree.predecessor(hit);
            while let Some(id) = cursor {
                match tree.entry(id) {
                    Some((20, _)) => seen += 1,
                    _ => break,
                }
                cursor = tree.predecessor(id);
            }
            assert_eq!(seen, 3);
            Ok(())
        },
        cleanup,
    )
}
