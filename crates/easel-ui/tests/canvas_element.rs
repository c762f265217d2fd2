const ELEMENT_MODULE: &str = include_str!("../js/canvas-element.js");

#[test]
fn element_module_exports_the_class_factory() {
    assert!(ELEMENT_MODULE.contains("export function canvasElementClass()"));
    assert!(ELEMENT_MODULE.contains("class extends HTMLElement"));
    assert!(ELEMENT_MODULE.contains("['width', 'height']"));
}

#[test]
fn element_module_never_evaluates_strings() {
    assert!(!ELEMENT_MODULE.contains("new Function"));
    assert!(!ELEMENT_MODULE.contains("eval("));
}

#[test]
fn canvas_source_imports_the_module_instead_of_building_it() {
    let canvas_rs = include_str!("../src/web/canvas.rs");
    assert!(canvas_rs.contains(r#"module = "/js/canvas-element.js""#));
    assert!(!canvas_rs.contains("Function::new"));
}
