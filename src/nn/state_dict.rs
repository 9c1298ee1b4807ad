/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 状态字典：按点分路径导出/载入模块树的参数值
 *
 * 只在内存中进行，不涉及文件；需要落盘时可用 serde_json 序列化导出的字典。
 */

use super::{Module, Trainable};
use crate::errors::ModuleError;
use indexmap::IndexMap;
use log::debug;

/// 非严格载入的结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// 模块树中有、字典中没有的参数路径
    pub missing_keys: Vec<String>,
    /// 字典中有、模块树中没有的键
    pub unexpected_keys: Vec<String>,
}

impl<V: Clone> Module<V> {
    /// 导出参数值，键为点分路径，顺序同`named_parameters`
    pub fn state_dict(&self) -> IndexMap<String, V> {
        self.named_parameters()
            .into_iter()
            .map(|(path, p)| (path, p.value().clone()))
            .collect()
    }
}

impl<V: Trainable + Clone> Module<V> {
    /// 按路径以`Parameter::update`写回参数值
    ///
    /// `strict`为真时，若存在缺失或多余的键则返回错误，且不修改任何参数；
    /// 否则只写入能对上的项，并在`LoadReport`中列出对不上的键。
    pub fn load_state_dict(
        &mut self,
        state: &IndexMap<String, V>,
        strict: bool,
    ) -> Result<LoadReport, ModuleError> {
        let mut report = LoadReport::default();
        let mut params = self.named_parameters_mut();

        for (path, _) in &params {
            if !state.contains_key(path) {
                report.missing_keys.push(path.clone());
            }
        }
        for key in state.keys() {
            if !params.iter().any(|(path, _)| path == key) {
                report.unexpected_keys.push(key.clone());
            }
        }

        if strict {
            if let Some(key) = report.missing_keys.first() {
                return Err(ModuleError::MissingKey(key.clone()));
            }
            if let Some(key) = report.unexpected_keys.first() {
                return Err(ModuleError::UnexpectedKey(key.clone()));
            }
        }

        for (path, param) in params.iter_mut() {
            if let Some(value) = state.get(path.as_str()) {
                param.update(value.clone());
            }
        }
        debug!(
            "载入状态字典：{} 项，缺失 {}，多余 {}",
            state.len(),
            report.missing_keys.len(),
            report.unexpected_keys.len()
        );
        Ok(report)
    }
}
