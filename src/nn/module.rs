/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Module —— 存放参数、子模块与普通字段的树形容器
 */

use super::{Parameter, Trainable};
use crate::errors::ModuleError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{debug, trace};
use serde_json::Value;

/// 写入模块的属性
///
/// 同一属性名在一个模块内只能属于下列三类之一；按新值的类别存放，并从另两类中移除。
#[derive(Debug, Clone)]
pub enum Attr<V> {
    Parameter(Parameter<V>),
    Module(Module<V>),
    Field(Value),
}

/// 查找属性得到的借用视图
#[derive(Debug)]
pub enum AttrRef<'a, V> {
    Parameter(&'a Parameter<V>),
    Module(&'a Module<V>),
    Field(&'a Value),
}

impl<'a, V> AttrRef<'a, V> {
    pub const fn as_parameter(&self) -> Option<&'a Parameter<V>> {
        match *self {
            Self::Parameter(p) => Some(p),
            _ => None,
        }
    }

    pub const fn as_module(&self) -> Option<&'a Module<V>> {
        match *self {
            Self::Module(m) => Some(m),
            _ => None,
        }
    }

    pub const fn as_field(&self) -> Option<&'a Value> {
        match *self {
            Self::Field(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrKind {
    Parameter,
    Module,
    Field,
}

/// 模块树节点
///
/// # 设计原则
/// - 模块独占其子模块与参数，没有指向父节点的引用（树而非图）
/// - 参数、子模块、字段均按插入顺序保存，枚举与打印结果确定
/// - 覆写同类属性保留原位置；换类则从旧类别移除、追加到新类别末尾
///
/// # 使用示例
/// ```
/// use mini_torch::nn::Module;
///
/// let mut root: Module = Module::new();
/// root.register_module("sub", Module::new())
///     .unwrap()
///     .add_parameter("b", 0.0)
///     .unwrap();
///
/// let named = root.named_parameters();
/// assert_eq!(named.len(), 1);
/// assert_eq!(named[0].0, "sub.b");
/// assert_eq!(*named[0].1.value(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Module<V = f64> {
    kind: String,
    training: bool,
    parameters: IndexMap<String, Parameter<V>>,
    modules: IndexMap<String, Module<V>>,
    fields: IndexMap<String, Value>,
}

impl<V> Default for Module<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Module<V> {
    /// 创建空模块（训练模式）
    pub fn new() -> Self {
        Self::with_kind("Module")
    }

    /// 创建带类型名的空模块，类型名用于打印
    pub fn with_kind(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            training: true,
            parameters: IndexMap::new(),
            modules: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// 是否处于训练模式
    pub const fn training(&self) -> bool {
        self.training
    }

    // ========== 属性写入 ==========

    /// 写入属性（唯一的变更入口），按值的类别分流存放
    pub fn set_attr(&mut self, name: &str, attr: Attr<V>) -> Result<(), ModuleError> {
        match attr {
            Attr::Parameter(param) => {
                self.register_parameter(name, param)?;
            }
            Attr::Module(module) => {
                self.register_module(name, module)?;
            }
            Attr::Field(value) => self.set_field(name, value)?,
        }
        Ok(())
    }

    /// 注册参数，返回其在树中的可变引用
    pub fn register_parameter(
        &mut self,
        name: &str,
        param: Parameter<V>,
    ) -> Result<&mut Parameter<V>, ModuleError> {
        validate_name(name)?;
        self.evict(name, AttrKind::Parameter);
        Ok(upsert(&mut self.parameters, name, param, "参数"))
    }

    /// 注册子模块，返回其在树中的可变引用
    pub fn register_module(
        &mut self,
        name: &str,
        module: Module<V>,
    ) -> Result<&mut Module<V>, ModuleError> {
        validate_name(name)?;
        self.evict(name, AttrKind::Module);
        Ok(upsert(&mut self.modules, name, module, "子模块"))
    }

    /// 写入普通字段（不参与参数枚举）
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ModuleError> {
        validate_name(name)?;
        self.evict(name, AttrKind::Field);
        upsert(&mut self.fields, name, value.into(), "字段");
        Ok(())
    }

    /// 从`keep`以外的类别中移除同名属性，维持“一个名字只属于一类”
    fn evict(&mut self, name: &str, keep: AttrKind) {
        let evicted = match keep {
            AttrKind::Parameter => {
                self.modules.shift_remove(name).is_some() | self.fields.shift_remove(name).is_some()
            }
            AttrKind::Module => {
                self.parameters.shift_remove(name).is_some()
                    | self.fields.shift_remove(name).is_some()
            }
            AttrKind::Field => {
                self.parameters.shift_remove(name).is_some()
                    | self.modules.shift_remove(name).is_some()
            }
        };
        if evicted {
            debug!("{}: 属性`{}`改存为{:?}", self.kind, name, keep);
        }
    }

    // ========== 属性查找 ==========

    /// 宽松查找：参数 → 子模块 → 字段，找不到返回`None`
    pub fn attr(&self, name: &str) -> Option<AttrRef<'_, V>> {
        if let Some(p) = self.parameters.get(name) {
            return Some(AttrRef::Parameter(p));
        }
        if let Some(m) = self.modules.get(name) {
            return Some(AttrRef::Module(m));
        }
        self.fields.get(name).map(AttrRef::Field)
    }

    /// 严格查找：找不到时返回`ModuleError::AttributeNotFound`
    pub fn try_attr(&self, name: &str) -> Result<AttrRef<'_, V>, ModuleError> {
        self.attr(name)
            .ok_or_else(|| ModuleError::AttributeNotFound(name.to_string()))
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter<V>> {
        self.parameters.get(name)
    }

    pub fn parameter_mut(&mut self, name: &str) -> Option<&mut Parameter<V>> {
        self.parameters.get_mut(name)
    }

    pub fn module(&self, name: &str) -> Option<&Self> {
        self.modules.get(name)
    }

    pub fn module_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.modules.get_mut(name)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    // ========== 子模块 ==========

    /// 直接子模块的快照（插入顺序）
    pub fn modules(&self) -> Vec<&Self> {
        self.modules.values().collect()
    }

    /// 直接子模块及其注册名（插入顺序）
    pub fn named_modules(&self) -> Vec<(&str, &Self)> {
        self.modules.iter().map(|(k, m)| (k.as_str(), m)).collect()
    }

    // ========== train/eval 模式 ==========

    /// 本模块及所有后代切换到训练模式
    pub fn train(&mut self) {
        self.set_mode(true);
    }

    /// 本模块及所有后代切换到评估模式
    pub fn eval(&mut self) {
        self.set_mode(false);
    }

    // 先序深度优先
    fn set_mode(&mut self, training: bool) {
        trace!("{}: training={}", self.kind, training);
        self.training = training;
        for child in self.modules.values_mut() {
            child.set_mode(training);
        }
    }

    // ========== 参数枚举 ==========

    /// 先序深度优先收集子树中的全部参数，路径为以`.`连接的注册名
    ///
    /// 每一层先列出本层参数，再依次进入各子模块。
    pub fn named_parameters(&self) -> Vec<(String, &Parameter<V>)> {
        let mut output = Vec::new();
        self.collect_parameters("", &mut output);
        output
    }

    fn collect_parameters<'a>(&'a self, prefix: &str, output: &mut Vec<(String, &'a Parameter<V>)>) {
        for (name, param) in &self.parameters {
            output.push((join_path(prefix, name), param));
        }
        for (name, module) in &self.modules {
            module.collect_parameters(&join_path(prefix, name), output);
        }
    }

    /// `named_parameters`的可变版本，顺序一致
    pub fn named_parameters_mut(&mut self) -> Vec<(String, &mut Parameter<V>)> {
        let mut output = Vec::new();
        self.collect_parameters_mut("", &mut output);
        output
    }

    fn collect_parameters_mut<'a>(
        &'a mut self,
        prefix: &str,
        output: &mut Vec<(String, &'a mut Parameter<V>)>,
    ) {
        for (name, param) in self.parameters.iter_mut() {
            output.push((join_path(prefix, name), param));
        }
        for (name, module) in self.modules.iter_mut() {
            module.collect_parameters_mut(&join_path(prefix, name), output);
        }
    }

    /// 子树中的全部参数（不含路径）
    pub fn parameters(&self) -> Vec<&Parameter<V>> {
        self.named_parameters().into_iter().map(|(_, p)| p).collect()
    }

    pub fn parameters_mut(&mut self) -> Vec<&mut Parameter<V>> {
        self.named_parameters_mut()
            .into_iter()
            .map(|(_, p)| p)
            .collect()
    }

    /// 子树中的参数个数
    pub fn num_params(&self) -> usize {
        self.parameters.len() + self.modules.values().map(Self::num_params).sum::<usize>()
    }
}

impl<V: Trainable> Module<V> {
    /// 手动添加参数：以`key`为名包装`value`并注册（覆盖同名项），返回新参数
    pub fn add_parameter(&mut self, key: &str, value: V) -> Result<&mut Parameter<V>, ModuleError> {
        self.register_parameter(key, Parameter::with_name(value, key))
    }
}

fn validate_name(name: &str) -> Result<(), ModuleError> {
    if name.is_empty() || name.contains('.') {
        return Err(ModuleError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// 插入或覆盖；覆盖时保留原有位置
fn upsert<'a, T>(map: &'a mut IndexMap<String, T>, name: &str, item: T, what: &str) -> &'a mut T {
    match map.entry(name.to_string()) {
        Entry::Occupied(mut entry) => {
            debug!("覆盖{}`{}`", what, name);
            entry.insert(item);
            entry.into_mut()
        }
        Entry::Vacant(entry) => {
            debug!("注册{}`{}`", what, name);
            entry.insert(item)
        }
    }
}
