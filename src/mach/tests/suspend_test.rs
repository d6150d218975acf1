use super::*;

#[test]
fn test_input_suspends_and_resumes() {
    let mut r = runtime("name ← INPUT(\"Name? \")\nDISPLAY(\"Hi \" + name)");
    assert_eq!(run(&mut r), "Name? ");
    assert_eq!(r.pc(), 0);
    assert_eq!(r.execute(10), Event::Input(Some("Name? ".to_string())));
    r.enter("Ada");
    assert_eq!(run(&mut r), "Hi Ada\n");
    finished(&r);
    assert_eq!(r.steps(), 2);
}

#[test]
fn test_two_inputs_in_one_statement() {
    let mut r = runtime("DISPLAY(INPUT(\"a\") + INPUT(\"b\"))");
    assert_eq!(run(&mut r), "a");
    r.enter("1");
    assert_eq!(run(&mut r), "b");
    r.enter("2");
    assert_eq!(run(&mut r), "12\n");
    assert_eq!(r.steps(), 1);
}

#[test]
fn test_random_is_replayed_across_input() {
    let config = Config {
        seed: Some(9),
        ..Config::default()
    };
    let mut r = runtime_with("DISPLAY(RANDOM(1, 1000000), INPUT(), RANDOM(1, 1000000))", config.clone());
    assert_eq!(run(&mut r), "?");
    r.enter("x");
    let suspended = run(&mut r);
    let mut r = runtime_with("DISPLAY(RANDOM(1, 1000000), \"x\", RANDOM(1, 1000000))", config);
    assert_eq!(run(&mut r), suspended);
}

#[test]
fn test_cancel_input_stops() {
    let mut r = runtime("DISPLAY(1)\nx ← INPUT()\nDISPLAY(2)");
    assert_eq!(run(&mut r), "1\n?");
    r.cancel();
    assert_eq!(run(&mut r), "INPUT CANCELLED IN LINE 2\n");
    assert_eq!(r.status(), Status::Stopped);
}

#[test]
fn test_interrupt() {
    let mut r = runtime("REPEAT UNTIL false\nx ← 1\nEND REPEAT");
    assert_eq!(r.execute(10), Event::Running);
    r.interrupt();
    assert_eq!(r.execute(10), Event::Halted(Status::Stopped));
    assert_eq!(r.execute(10), Event::Halted(Status::Stopped));
}

#[test]
fn test_condition_input_in_until() {
    let mut r = runtime("REPEAT UNTIL INPUT(\"more? \") = \"n\"\nDISPLAY(\"again\")\nEND REPEAT");
    assert_eq!(run(&mut r), "again\nmore? ");
    r.enter("y");
    assert_eq!(run(&mut r), "again\nmore? ");
    r.enter("n");
    assert_eq!(run(&mut r), "");
    finished(&r);
}
