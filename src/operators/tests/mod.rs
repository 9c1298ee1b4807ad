use proptest::prelude::*;

/// 与`is_close`等价的 proptest 断言
macro_rules! prop_assert_close {
    ($a:expr, $b:expr) => {{
        let (a, b): (f64, f64) = ($a, $b);
        proptest::prop_assert!(
            $crate::operators::is_close(a, b),
            "{} 与 {} 不够接近",
            a,
            b
        );
    }};
}

mod catalog;

/// 有限的小范围浮点数
fn small_floats() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}
