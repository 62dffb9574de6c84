use lut1d::{ExtrapMethod, InterpMethod, SearchMethod};

#[test]
fn search_names() {
    assert_eq!(SearchMethod::Sequential.method_name(), "sequential");
    assert_eq!(SearchMethod::Binary.method_name(), "binary");
    assert_eq!(SearchMethod::Hint.to_string(), "hint");
}

#[test]
fn interp_names() {
    let names: Vec<String> = [
        InterpMethod::Linear,
        InterpMethod::Nearest,
        InterpMethod::Next,
        InterpMethod::Previous,
    ]
    .iter()
    .map(|m| m.to_string())
    .collect();
    assert_eq!(names, ["linear", "nearest", "next", "previous"]);
}

#[test]
fn extrap_names() {
    assert_eq!(ExtrapMethod::Clip.method_name(), "clip");
    assert_eq!(ExtrapMethod::Linear.method_name(), "linear");
    assert_eq!(format!("{}", ExtrapMethod::Specify), "specify");
}

#[test]
fn defaults_match_reference_selection() {
    assert_eq!(SearchMethod::default(), SearchMethod::Binary);
    assert_eq!(InterpMethod::default(), InterpMethod::Linear);
    assert_eq!(ExtrapMethod::default(), ExtrapMethod::Clip);
}
