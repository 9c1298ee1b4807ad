/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 模块树的打印格式
 */

use super::Module;
use std::fmt;

/// 格式：`类型名(`，每个子模块一行`(注册名): <子模块>`（缩进 2 格），最后`)`
///
/// ```text
/// MLP(
///   (layer1): Linear()
///   (layer2): Linear(
///     (inner): Module()
///   )
/// )
/// ```
impl<V> fmt::Display for Module<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        let children = self.named_modules();
        if !children.is_empty() {
            writeln!(f)?;
            for (name, child) in children {
                writeln!(f, "  ({}): {}", name, indent_tail(&child.to_string(), 2))?;
            }
        }
        write!(f, ")")
    }
}

/// 除首行外，每行前补`spaces`个空格
fn indent_tail(s: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut lines = s.split('\n');
    let mut output = lines.next().unwrap_or_default().to_string();
    for line in lines {
        output.push('\n');
        output.push_str(&pad);
        output.push_str(line);
    }
    output
}
