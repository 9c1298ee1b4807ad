use thiserror::Error;

/// 模块树操作的错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModuleError {
    /// 严格查找（`try_attr`）时属性不存在
    #[error("模块中不存在名为`{0}`的属性")]
    AttributeNotFound(String),

    // 属性名不能为空，也不能含`.`，否则点分路径会产生歧义
    #[error("非法属性名`{0}`：不能为空，也不能包含`.`")]
    InvalidName(String),

    // 状态字典加载（严格模式）
    #[error("状态字典缺少参数`{0}`")]
    MissingKey(String),
    #[error("状态字典中的`{0}`在模块树中没有对应参数")]
    UnexpectedKey(String),
}
