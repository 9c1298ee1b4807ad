/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 负责神经网络模块树（Module/Parameter）的构建与遍历
 */

mod display;
mod module;
mod parameter;
mod state_dict;

pub use module::{Attr, AttrRef, Module};
pub use parameter::{GradTracking, Parameter, Trainable};
pub use state_dict::LoadReport;

#[cfg(test)]
mod tests;
