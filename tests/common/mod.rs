#![allow(dead_code)]

use keycalc::lang::Error;
use keycalc::mach::{Config, Runtime};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn exec(source: &str) -> Result<Runtime, Error> {
    exec_with(Config::default(), source)
}

pub fn exec_with(config: Config, source: &str) -> Result<Runtime, Error> {
    init_tracing();
    let program = keycalc::compile(source)?;
    let mut runtime = Runtime::new(config);
    runtime.run(&program)?;
    Ok(runtime)
}

/// Top of the register stack after running `source`, as text.
pub fn x(source: &str) -> String {
    match exec(source) {
        Ok(r) => r.x().to_string(),
        Err(e) => panic!("{} : {:?}", source, e),
    }
}
