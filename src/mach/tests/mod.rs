use crate::mach::{Config, Event, Program, Runtime, Status, StopHandle};

mod procedure_test;
mod suspend_test;

fn runtime(source: &str) -> Runtime {
    runtime_with(source, Config::default())
}

fn runtime_with(source: &str, config: Config) -> Runtime {
    let program = Program::compile(source, config.tab_width).unwrap();
    Runtime::new(program, &config, StopHandle::new())
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

/// Collect printed lines and errors until the run halts or asks for input.
fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Running => {}
            Event::Print(ps) => {
                s.push_str(&ps);
                s.push('\n');
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Input(prompt) => {
                s.push_str(&prompt.unwrap_or_else(|| "?".to_string()));
                break;
            }
            Event::Halted(_) => break,
        }
    }
    s
}

fn finished(runtime: &Runtime) {
    assert_eq!(runtime.status(), Status::Finished);
}
