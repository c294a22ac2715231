use basecalc::mach::Runtime;

pub fn exec(source: &str) -> String {
    let mut runtime = Runtime::default();
    exec_in(&mut runtime, source)
}

/// Printed rows followed by the error, if any, one per line.
pub fn exec_in(runtime: &mut Runtime, source: &str) -> String {
    let mut s = String::new();
    runtime.clear_output();
    let result = runtime.run(source);
    for row in runtime.output_rows() {
        s.push_str(&format!("{}\n", row));
    }
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}
