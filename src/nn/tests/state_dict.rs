/*
 * @Description  : 状态字典的导出与载入
 */

use indexmap::IndexMap;

use crate::assert_err;
use crate::errors::ModuleError;
use crate::nn::{GradTracking, LoadReport, Module};
use crate::variable::Variable;

fn build_model() -> Module<Variable> {
    let mut model = Module::with_kind("Net");
    model.add_parameter("scale", Variable::new(1.0)).unwrap();
    let fc = model.register_module("fc", Module::with_kind("Linear")).unwrap();
    fc.add_parameter("weight", Variable::new(0.5)).unwrap();
    fc.add_parameter("bias", Variable::new(-0.5)).unwrap();
    model
}

fn values(model: &Module<Variable>) -> Vec<f64> {
    model.parameters().iter().map(|p| p.value().value()).collect()
}

#[test]
fn test_state_dict_follows_named_parameters() {
    let model = build_model();
    let state = model.state_dict();

    let keys: Vec<&str> = state.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["scale", "fc.weight", "fc.bias"]);
    assert_eq!(state["fc.bias"].value(), -0.5);
}

#[test]
fn test_state_dict_to_json() {
    let mut model: Module = Module::new();
    model.add_parameter("a", 1.5).unwrap();
    model.register_module("sub", Module::new())
        .unwrap()
        .add_parameter("b", 2.5)
        .unwrap();

    let json = serde_json::to_string(&model.state_dict()).unwrap();
    assert_eq!(json, r#"{"a":1.5,"sub.b":2.5}"#);

    let back: IndexMap<String, f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, model.state_dict());
}

#[test]
fn test_load_state_dict_strict() {
    let mut model = build_model();

    let mut state = IndexMap::new();
    state.insert("scale".to_string(), Variable::new(2.0));
    state.insert("fc.weight".to_string(), Variable::new(3.0));
    state.insert("fc.bias".to_string(), Variable::new(4.0));

    let report = model.load_state_dict(&state, true).unwrap();
    assert_eq!(report, LoadReport::default());
    assert_eq!(values(&model), vec![2.0, 3.0, 4.0]);

    // 通过 update 写回：重新开启梯度并赋名
    let weight = model.module("fc").unwrap().parameter("weight").unwrap();
    assert!(weight.value().requires_grad());
    assert_eq!(weight.value().name(), Some("weight"));
}

#[test]
fn test_load_state_dict_strict_rejects_mismatch_without_writing() {
    let mut model = build_model();

    // 1. 缺少 fc.bias
    let mut state = IndexMap::new();
    state.insert("scale".to_string(), Variable::new(9.0));
    state.insert("fc.weight".to_string(), Variable::new(9.0));
    assert_err!(
        model.load_state_dict(&state, true),
        ModuleError::MissingKey("fc.bias")
    );
    assert_eq!(values(&model), vec![1.0, 0.5, -0.5]);

    // 2. 多出 fc.extra
    state.insert("fc.bias".to_string(), Variable::new(9.0));
    state.insert("fc.extra".to_string(), Variable::new(9.0));
    assert_err!(
        model.load_state_dict(&state, true),
        ModuleError::UnexpectedKey("fc.extra")
    );
    assert_eq!(values(&model), vec![1.0, 0.5, -0.5]);
}

#[test]
fn test_load_state_dict_lenient_reports_mismatch() {
    let mut model = build_model();

    let mut state = IndexMap::new();
    state.insert("fc.weight".to_string(), Variable::new(7.0));
    state.insert("unknown".to_string(), Variable::new(7.0));

    let report = model.load_state_dict(&state, false).unwrap();
    assert_eq!(report.missing_keys, vec!["scale", "fc.bias"]);
    assert_eq!(report.unexpected_keys, vec!["unknown"]);
    assert_eq!(values(&model), vec![1.0, 7.0, -0.5]);
}
