//! # Mini Torch
//!
//! `mini_torch`是仿照[pytorch](https://pytorch.org)接口的教学用脚手架：
//! - [`nn`]：`Module`/`Parameter`模块树，负责参数的层级登记、遍历、train/eval 模式传播；
//! - [`operators`]：上层自动微分引擎所依赖的标量算子及其导数；
//! - [`variable`]：带梯度追踪标记的最小标量值。
//!
//! 张量计算、自动微分图、优化器均不在本 crate 内，留给学习者自行实现。

pub mod errors;
pub mod nn;
pub mod operators;
pub mod utils;
pub mod variable;
