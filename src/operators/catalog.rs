//! 具名测试函数表
//!
//! 把算子组合成一组单参、双参和归约函数，供通用的冒烟测试逐个调用，
//! 也方便上层（张量、自动微分）用同一批函数对照验证。

use super::{add, eq, exp, log, lt, mul, neg, relu, sigmoid, sum};

pub type OneArgFn = (&'static str, fn(f64) -> f64);
pub type TwoArgFn = (&'static str, fn(f64, f64) -> f64);
pub type ReduceFn = (&'static str, fn(&[f64]) -> f64);

pub fn one_arg() -> Vec<OneArgFn> {
    let table: [OneArgFn; 14] = [
        ("neg", |a| neg(a)),
        ("add_constant", |a| a + 5.0),
        ("square", |a| a * a),
        ("cube", |a| a * a * a),
        ("sub_constant", |a| a - 5.0),
        ("mult_constant", |a| 5.0 * a),
        ("div_constant", |a| a / 5.0),
        ("inv", |a| 1.0 / (a + 3.5)),
        ("sig", |a| sigmoid(a)),
        ("log", |a| log(a + 100_000.0)),
        ("relu", |a| relu(a + 5.5)),
        ("exp", |a| exp(a - 200.0)),
        ("explog", |a| log(a + 100_000.0) + exp(a - 200.0)),
        ("complex", complex),
    ];
    table.to_vec()
}

pub fn two_arg() -> Vec<TwoArgFn> {
    let table: [TwoArgFn; 6] = [
        ("add2", |a, b| add(a, b)),
        ("mul2", |a, b| mul(a, b)),
        ("div2", |a, b| a / (b + 5.5)),
        ("gt2", |a, b| lt(b, a + 1.2)),
        ("lt2", |a, b| lt(a + 1.2, b)),
        ("eq2", |a, b| eq(a, b + 5.5)),
    ];
    table.to_vec()
}

pub fn reduce_arg() -> Vec<ReduceFn> {
    let table: [ReduceFn; 3] = [
        ("sum_red", |ls| sum(ls)),
        ("mean_red", mean),
        ("mean_full_red", mean),
    ];
    table.to_vec()
}

fn complex(a: f64) -> f64 {
    log(sigmoid(relu(relu(a * 10.0 + 7.0) * 6.0 + 5.0) * 10.0)) / 50.0
}

// 空列表得到 NaN
fn mean(ls: &[f64]) -> f64 {
    sum(ls) / ls.len() as f64
}
