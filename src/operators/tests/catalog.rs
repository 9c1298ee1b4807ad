/*
 * @Description  : 具名测试函数表：每个函数都能接受任意小浮点数
 */

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;

use super::small_floats;
use crate::operators::catalog::{one_arg, reduce_arg, two_arg};

#[test]
fn test_catalog_names_are_unique() {
    let mut names = HashSet::new();
    for (name, _) in one_arg() {
        assert!(names.insert(name), "重复的函数名：{name}");
    }
    for (name, _) in two_arg() {
        assert!(names.insert(name), "重复的函数名：{name}");
    }
    for (name, _) in reduce_arg() {
        assert!(names.insert(name), "重复的函数名：{name}");
    }
    assert_eq!(names.len(), 14 + 6 + 3);
}

#[test]
fn test_catalog_known_values() {
    let lookup = |name: &str| one_arg().into_iter().find(|(n, _)| *n == name).unwrap().1;
    assert_eq!(lookup("square")(3.0), 9.0);
    assert_eq!(lookup("relu")(-10.0), 0.0);
    assert_eq!(lookup("div_constant")(10.0), 2.0);

    let reduce = reduce_arg();
    assert_eq!((reduce[0].1)(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!((reduce[1].1)(&[1.0, 2.0, 3.0]), 2.0);
}

proptest! {
    #[test]
    fn test_one_args(t1 in small_floats()) {
        for (name, f) in one_arg() {
            let out = f(t1);
            prop_assert!(!out.is_nan(), "{}({}) 得到 NaN", name, t1);
        }
    }

    #[test]
    fn test_two_args(t1 in small_floats(), t2 in small_floats()) {
        for (name, f) in two_arg() {
            let out = f(t1, t2);
            if ["gt2", "lt2", "eq2"].contains(&name) {
                prop_assert!(out == 0.0 || out == 1.0, "{} 应返回 0 或 1", name);
            }
        }
    }

    #[test]
    fn test_reduce_args(ls in vec(small_floats(), 1..10)) {
        for (name, f) in reduce_arg() {
            prop_assert!(f(&ls).is_finite(), "{} 在非空列表上应有限", name);
        }
    }
}
