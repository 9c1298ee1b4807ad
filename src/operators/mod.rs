//! # 标量算子模块
//!
//! 自动微分层所依赖的纯函数：基础算术、比较、激活函数及其反向（导数）版本，
//! 以及列表级的高阶组合子。所有函数对`num_traits::Float`泛型，遵循 IEEE 浮点语义
//! （如`inv(0.0)`得到无穷大），不定义额外的错误类型。

use num_traits::Float;

pub mod catalog;

/// `log`/`log_back`中防止对 0 取对数的偏移量
pub const EPS: f64 = 1e-6;
/// `is_close`的判定阈值
pub const CLOSE_TOLERANCE: f64 = 1e-2;

// f32/f64 均能精确容纳上面的常量，转换不会失败
fn constant<T: Float>(c: f64) -> T {
    T::from(c).unwrap_or_else(T::nan)
}

// ========== 基础算术 ==========

pub fn mul<T: Float>(x: T, y: T) -> T {
    x * y
}

pub fn id<T: Float>(x: T) -> T {
    x
}

pub fn add<T: Float>(x: T, y: T) -> T {
    x + y
}

pub fn neg<T: Float>(x: T) -> T {
    -x
}

// ========== 比较（返回 1.0 / 0.0） ==========

pub fn lt<T: Float>(x: T, y: T) -> T {
    if x < y { T::one() } else { T::zero() }
}

pub fn eq<T: Float>(x: T, y: T) -> T {
    if x == y { T::one() } else { T::zero() }
}

pub fn max<T: Float>(x: T, y: T) -> T {
    if x > y { x } else { y }
}

/// 两数之差的绝对值小于`CLOSE_TOLERANCE`
pub fn is_close<T: Float>(x: T, y: T) -> bool {
    (x - y).abs() < constant(CLOSE_TOLERANCE)
}

// ========== 激活函数 ==========

/// sigmoid，按符号分两支计算以避免`exp`溢出
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

pub fn relu<T: Float>(x: T) -> T {
    if x > T::zero() { x } else { T::zero() }
}

/// `ln(x + EPS)`
pub fn log<T: Float>(x: T) -> T {
    (x + constant(EPS)).ln()
}

pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

pub fn inv<T: Float>(x: T) -> T {
    T::one() / x
}

// ========== 反向（导数乘上游梯度 d） ==========

pub fn log_back<T: Float>(x: T, d: T) -> T {
    d / (x + constant(EPS))
}

pub fn inv_back<T: Float>(x: T, d: T) -> T {
    -d / (x * x)
}

pub fn relu_back<T: Float>(x: T, d: T) -> T {
    if x > T::zero() { d } else { T::zero() }
}

// ========== 高阶函数 ==========

/// 对每个元素应用`f`
pub fn map<T: Copy>(f: impl Fn(T) -> T, ls: &[T]) -> Vec<T> {
    ls.iter().map(|&x| f(x)).collect()
}

/// 逐对应用`f`，长度取两者较短者
pub fn zip_with<T: Copy>(f: impl Fn(T, T) -> T, ls1: &[T], ls2: &[T]) -> Vec<T> {
    ls1.iter().zip(ls2).map(|(&x, &y)| f(x, y)).collect()
}

/// 以`start`为初值从左到右归约
pub fn reduce<T: Copy>(f: impl Fn(T, T) -> T, start: T, ls: &[T]) -> T {
    ls.iter().fold(start, |acc, &x| f(acc, x))
}

pub fn neg_list<T: Float>(ls: &[T]) -> Vec<T> {
    map(neg, ls)
}

pub fn add_lists<T: Float>(ls1: &[T], ls2: &[T]) -> Vec<T> {
    zip_with(add, ls1, ls2)
}

/// 空列表之和为 0
pub fn sum<T: Float>(ls: &[T]) -> T {
    reduce(add, T::zero(), ls)
}

/// 空列表之积为 1
pub fn prod<T: Float>(ls: &[T]) -> T {
    reduce(mul, T::one(), ls)
}

#[cfg(test)]
mod tests;
