/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Parameter —— 模块树的叶子，持有一个可训练的值
 */

use serde::{Serialize, Serializer};
use std::fmt;

/// 梯度追踪能力
///
/// 可微值（如`Variable`）实现此 trait，`Parameter`借此开启梯度追踪并把自己的名字
/// 写到值上，便于调试输出。
pub trait GradTracking {
    fn requires_grad_(&mut self, requires_grad: bool);
    fn requires_grad(&self) -> bool;
    fn set_name(&mut self, name: &str);
    fn name(&self) -> Option<&str>;
}

/// 可作为参数值的类型
///
/// 默认实现返回`None`，即普通数值不具备梯度追踪能力；可微值应覆写
/// `grad_tracking`并返回`Some(self)`。
pub trait Trainable {
    fn grad_tracking(&mut self) -> Option<&mut dyn GradTracking> {
        None
    }
}

impl Trainable for f32 {}
impl Trainable for f64 {}
impl Trainable for i32 {}
impl Trainable for i64 {}

/// 模块中的可训练参数
///
/// # 使用示例
/// ```
/// use mini_torch::nn::{GradTracking, Parameter};
/// use mini_torch::variable::Variable;
///
/// let p = Parameter::with_name(Variable::new(1.5), "weight");
/// assert!(p.value().requires_grad());
/// assert_eq!(p.value().name(), Some("weight"));
/// ```
#[derive(Clone, PartialEq)]
pub struct Parameter<V> {
    value: V,
    name: Option<String>,
}

impl<V: Trainable> Parameter<V> {
    /// 创建无名参数
    pub fn new(value: V) -> Self {
        Self::build(value, None)
    }

    /// 创建具名参数，名字会同步到支持梯度追踪的值上
    pub fn with_name(value: V, name: &str) -> Self {
        Self::build(value, Some(name.to_string()))
    }

    fn build(value: V, name: Option<String>) -> Self {
        let mut param = Self { value, name };
        param.attach_value();
        param
    }

    /// 替换参数值（参数本身及其名字保持不变）
    ///
    /// 新值同样会被开启梯度追踪并被赋予参数名，用于优化器步进后换入新值。
    pub fn update(&mut self, value: V) {
        self.value = value;
        self.attach_value();
    }

    fn attach_value(&mut self) {
        if let Some(tracked) = self.value.grad_tracking() {
            tracked.requires_grad_(true);
            if let Some(name) = self.name.as_deref() {
                tracked.set_name(name);
            }
        }
    }
}

impl<V> Parameter<V> {
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// 获取值的可变引用
    ///
    /// 注意：直接修改不会重新应用梯度追踪，需要整体替换时请用`update`。
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: fmt::Display> fmt::Display for Parameter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<V: fmt::Debug> fmt::Debug for Parameter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

// 序列化时只保留值本身，与状态字典的形态一致
impl<V: Serialize> Serialize for Parameter<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
