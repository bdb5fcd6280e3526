use simplelog::{Config, LevelFilter, TestLogger};

const NUM_OF_OPERATIONS: usize = 10_000;

fn init_logger(level: LevelFilter) {
    let _ = TestLogger::init(level, Config::default());
}

macro_rules! ordered_set_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use ordered_trees::$module_name::$type_name;
                use ordered_trees::Order;
                use rand::Rng;
                use simplelog::LevelFilter;
                use std::collections::BTreeSet;
                use super::{init_logger, NUM_OF_OPERATIONS};

                fn build(keys: &[u32]) -> $type_name<u32> {
                    let mut set = $type_name::new();
                    for key in keys {
                        assert!(set.insert(*key));
                    }
                    set
                }

                #[test]
                fn int_test_set() {
                    init_logger(LevelFilter::Info);
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, NUM_OF_OPERATIONS as u32);

                        assert_eq!(set.insert(key), expected.insert(key));
                    }

                    assert_eq!(set.len(), expected.len());
                    assert_eq!(
                        set.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert_eq!(set.min(), expected.iter().next());
                    assert_eq!(set.max(), expected.iter().next_back());
                    assert!(set.validate().is_ok());

                    for i in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, NUM_OF_OPERATIONS as u32);

                        assert_eq!(set.contains(&key), expected.contains(&key));
                        assert_eq!(set.remove(&key), expected.take(&key));
                        if i % 1000 == 0 {
                            assert!(set.validate().is_ok());
                        }
                    }

                    assert_eq!(set.len(), expected.len());
                    assert_eq!(
                        set.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert!(set.validate().is_ok());
                }

                #[test]
                fn int_test_traversal_orders() {
                    init_logger(LevelFilter::Trace);
                    let set = build(&[50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45]);

                    assert_eq!(
                        set.traverse(Order::InOrder).cloned().collect::<Vec<u32>>(),
                        vec![10, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80],
                    );

                    let mut pre_order = set.traverse(Order::PreOrder).cloned().collect::<Vec<u32>>();
                    let mut post_order = set.traverse(Order::PostOrder).cloned().collect::<Vec<u32>>();
                    assert_eq!(pre_order.len(), 11);
                    assert_eq!(post_order.len(), 11);
                    assert_eq!(pre_order.first(), post_order.last());

                    pre_order.sort();
                    post_order.sort();
                    assert_eq!(pre_order, post_order);
                    assert!(set.validate().is_ok());
                }

                #[test]
                fn int_test_remove_two_children() {
                    init_logger(LevelFilter::Trace);
                    let mut set = build(&[50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45]);

                    assert_eq!(set.remove(&30), Some(30));
                    assert_eq!(
                        set.iter().cloned().collect::<Vec<u32>>(),
                        vec![10, 20, 25, 35, 40, 45, 50, 60, 70, 80],
                    );
                    assert!(!set.contains(&30));
                    assert!(set.contains(&35));
                    assert!(set.validate().is_ok());
                }

                #[test]
                fn int_test_idempotence() {
                    init_logger(LevelFilter::Trace);
                    let mut set = build(&[3, 1, 2]);
                    let before = set.traverse(Order::PreOrder).cloned().collect::<Vec<u32>>();

                    assert!(!set.insert(2));
                    assert_eq!(set.remove(&4), None);
                    assert_eq!(set.len(), 3);
                    assert_eq!(set.traverse(Order::PreOrder).cloned().collect::<Vec<u32>>(), before);

                    assert_eq!(set.remove(&2), Some(2));
                    assert_eq!(set.remove(&2), None);
                    assert_eq!(set.len(), 2);
                    assert!(set.validate().is_ok());
                }

                #[test]
                fn int_test_traversal_restarts() {
                    let set = build(&[2, 1, 3]);
                    let mut partial = set.iter();
                    assert_eq!(partial.next(), Some(&1));

                    assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
                    assert_eq!(partial.collect::<Vec<&u32>>(), vec![&2, &3]);
                }

                #[test]
                fn int_test_empty() {
                    let mut set: $type_name<u32> = $type_name::new();
                    assert!(set.is_empty());
                    assert_eq!(set.height(), 0);
                    assert_eq!(set.remove(&1), None);
                    assert_eq!(set.iter().next(), None);
                    assert_eq!(set.traverse(Order::PostOrder).next(), None);
                    assert_eq!(set.summary().len, 0);
                    assert!(set.validate().is_ok());
                }

                #[test]
                fn int_test_strings() {
                    let mut set = $type_name::new();
                    for word in &["pear", "apple", "fig", "banana"] {
                        set.insert(word.to_string());
                    }
                    assert_eq!(set.remove(&String::from("fig")), Some(String::from("fig")));
                    assert_eq!(
                        set.iter().map(|word| word.as_str()).collect::<Vec<&str>>(),
                        vec!["apple", "banana", "pear"],
                    );
                }
            }
        )*
    }
}

ordered_set_tests!(
    bst: BstSet,
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);

mod shapes {
    use ordered_trees::avl_tree::AvlSet;
    use ordered_trees::bst::BstSet;
    use ordered_trees::red_black_tree::{Color, RedBlackSet};
    use ordered_trees::Order;

    #[test]
    fn int_test_bst_keeps_insertion_shape() {
        let mut set = BstSet::new();
        for key in &[50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45] {
            set.insert(*key);
        }
        assert_eq!(
            set.traverse(Order::PreOrder).cloned().collect::<Vec<u32>>(),
            vec![50, 30, 20, 10, 25, 40, 35, 45, 70, 60, 80],
        );
        assert_eq!(set.height(), 4);

        set.remove(&30);
        assert_eq!(
            set.traverse(Order::PreOrder).cloned().collect::<Vec<u32>>(),
            vec![50, 35, 20, 10, 25, 40, 45, 70, 60, 80],
        );
    }

    #[test]
    fn int_test_bst_degenerates_on_sorted_input() {
        let mut set = BstSet::new();
        for key in 0..512 {
            set.insert(key);
        }
        assert_eq!(set.height(), 512);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn int_test_avl_rotates_ascending_input() {
        let mut set = AvlSet::new();
        for key in &[10, 20, 30] {
            set.insert(*key);
        }
        assert_eq!(set.traverse(Order::PreOrder).next(), Some(&20));
        assert_eq!(set.height(), 2);
        assert_eq!(set.balance_factor(), 0);
    }

    #[test]
    fn int_test_avl_height_bound() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut set = AvlSet::new();
        for _ in 0..4096 {
            set.insert(rand::Rng::next_u32(&mut rng));
        }
        let bound = 1.45 * ((set.len() + 2) as f64).log2();
        assert!((set.height() as f64) <= bound);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn int_test_red_black_ascending_input() {
        let mut set = RedBlackSet::new();
        for key in 1..=10 {
            set.insert(key);
            assert!(set.validate().is_ok());
        }
        assert_eq!(set.root_color(), Some(Color::Black));
        assert!(set.black_height() >= 2);
        assert!((set.height() as f64) <= 2.0 * 11f64.log2());
    }
}
