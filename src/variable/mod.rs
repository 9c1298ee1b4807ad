//! # 变量模块
//!
//! 提供一个最小的标量可微值`Variable`。它本身不做求导，只承载梯度追踪标记和调试名，
//! 用来代表上层自动微分引擎中的标量。

use crate::nn::{GradTracking, Trainable};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Variable {
    value: f64,
    requires_grad: bool,
    name: Option<String>,
}

impl Variable {
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            requires_grad: false,
            name: None,
        }
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl From<f64> for Variable {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl GradTracking for Variable {
    fn requires_grad_(&mut self, requires_grad: bool) {
        self.requires_grad = requires_grad;
    }

    fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Trainable for Variable {
    fn grad_tracking(&mut self) -> Option<&mut dyn GradTracking> {
        Some(self)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Variable({}, name={})", self.value, name),
            None => write!(f, "Variable({})", self.value),
        }
    }
}
