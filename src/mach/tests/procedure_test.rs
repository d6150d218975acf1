use super::*;
use crate::mach::Val;

#[test]
fn test_procedure_is_skipped_at_top_level() {
    let mut r = runtime(
        "PROCEDURE greet(name)\n\
         DISPLAY(\"Hello \" + name)\n\
         END PROCEDURE\n\
         greet(\"TBA\")",
    );
    assert_eq!(run(&mut r), "Hello TBA\n");
    finished(&r);
}

#[test]
fn test_call_returns_to_caller() {
    let mut r = runtime(
        "DISPLAY(\"a\")\n\
         show()\n\
         DISPLAY(\"c\")\n\
         PROCEDURE show()\n\
         DISPLAY(\"b\")\n\
         END PROCEDURE",
    );
    assert_eq!(run(&mut r), "a\nb\nc\n");
}

#[test]
fn test_return_value_assignment() {
    let mut r = runtime(
        "PROCEDURE add(a, b)\n\
         RETURN(a + b)\n\
         DISPLAY(\"unreachable\")\n\
         END PROCEDURE\n\
         SET total ← add(2, 3)\n\
         DISPLAY(total)",
    );
    assert_eq!(run(&mut r), "5\n");
    assert_eq!(r.global("total"), Some(&Val::Number(5.0)));
}

#[test]
fn test_return_into_list_element() {
    let mut r = runtime(
        "PROCEDURE double(x)\n\
         RETURN(x * 2)\n\
         END PROCEDURE\n\
         xs ← [1, 2, 3]\n\
         xs[2] ← double(xs[2])\n\
         DISPLAY(xs)",
    );
    assert_eq!(run(&mut r), "1,4,3\n");
}

#[test]
fn test_parameters_do_not_leak() {
    let mut r = runtime(
        "PROCEDURE f(p)\n\
         q ← p + 1\n\
         END PROCEDURE\n\
         f(1)\n\
         DISPLAY(q)",
    );
    assert_eq!(run(&mut r), "UNDEFINED VARIABLE IN LINE 5; q\n");
    assert_eq!(r.status(), Status::Crashed);
    assert!(r.global("p").is_none());
}

#[test]
fn test_locals_shadow_globals() {
    let mut r = runtime(
        "x ← 1\n\
         PROCEDURE f()\n\
         DISPLAY(x)\n\
         x ← 2\n\
         DISPLAY(x)\n\
         END PROCEDURE\n\
         f()\n\
         DISPLAY(x)",
    );
    assert_eq!(run(&mut r), "1\n2\n1\n");
}

#[test]
fn test_caller_locals_invisible() {
    let mut r = runtime(
        "PROCEDURE outer()\n\
         secret ← 7\n\
         inner()\n\
         END PROCEDURE\n\
         PROCEDURE inner()\n\
         DISPLAY(secret)\n\
         END PROCEDURE\n\
         outer()",
    );
    assert_eq!(run(&mut r), "UNDEFINED VARIABLE IN LINE 6; secret\n");
}

#[test]
fn test_recursion() {
    let mut r = runtime(
        "PROCEDURE fact(n)\n\
         IF n ≤ 1\n\
         RETURN(1)\n\
         END IF\n\
         rest ← fact(n - 1)\n\
         RETURN(n * rest)\n\
         END PROCEDURE\n\
         DISPLAY(\"start\")\n\
         f ← fact(5)\n\
         DISPLAY(f)",
    );
    assert_eq!(run(&mut r), "start\n120\n");
}

#[test]
fn test_loop_state_is_per_frame() {
    let mut r = runtime(
        "PROCEDURE twice()\n\
         REPEAT 2 TIMES\n\
         DISPLAY(\"t\")\n\
         END REPEAT\n\
         END PROCEDURE\n\
         REPEAT 2 TIMES\n\
         twice()\n\
         END REPEAT",
    );
    assert_eq!(run(&mut r), "t\nt\nt\nt\n");
}

#[test]
fn test_return_from_inside_loop() {
    let mut r = runtime(
        "PROCEDURE first_big(xs)\n\
         i ← 1\n\
         REPEAT LENGTH(xs) TIMES\n\
         IF xs[i] > 10\n\
         RETURN(xs[i])\n\
         END IF\n\
         i ← i + 1\n\
         END REPEAT\n\
         RETURN(-1)\n\
         END PROCEDURE\n\
         a ← first_big([3, 12, 40])\n\
         b ← first_big([1])\n\
         DISPLAY(a, b)",
    );
    assert_eq!(run(&mut r), "12 -1\n");
}

#[test]
fn test_arity_errors() {
    let source = "PROCEDURE f(a, b)\nEND PROCEDURE\n";
    let mut r = runtime(&format!("{}f(1)", source));
    assert_eq!(run(&mut r), "WRONG NUMBER OF ARGUMENTS IN LINE 3; f EXPECTS 2, GOT 1\n");
    let mut r = runtime(&format!("{}f(1, 2, 3)", source));
    assert_eq!(run(&mut r), "WRONG NUMBER OF ARGUMENTS IN LINE 3; f EXPECTS 2, GOT 3\n");
}

#[test]
fn test_call_errors() {
    let mut r = runtime("nothing(1)");
    assert_eq!(run(&mut r), "UNDEFINED PROCEDURE IN LINE 1; nothing\n");
    let mut r = runtime("RETURN(1)");
    assert_eq!(run(&mut r), "RETURN WITHOUT PROCEDURE IN LINE 1\n");
    let mut r = runtime("PROCEDURE f()\nEND PROCEDURE\nx ← f()");
    assert_eq!(
        run(&mut r),
        "ILLEGAL FUNCTION CALL IN LINE 3; PROCEDURE RETURNED NO VALUE\n"
    );
    let mut r = runtime("PROCEDURE f()\nRETURN(1)\nEND PROCEDURE\nx ← f() + 1");
    assert_eq!(
        run(&mut r),
        "ILLEGAL FUNCTION CALL IN LINE 4; f MUST BE CALLED ON ITS OWN OR ASSIGNED\n"
    );
}

#[test]
fn test_list_statements_share_list() {
    let mut r = runtime(
        "PROCEDURE push(list, v)\n\
         APPEND(list, v)\n\
         END PROCEDURE\n\
         xs ← []\n\
         push(xs, 1)\n\
         push(xs, 2)\n\
         INSERT(xs, 1, 0)\n\
         REMOVE(xs, 3)\n\
         DISPLAY(xs, LENGTH(xs))",
    );
    assert_eq!(run(&mut r), "0,1 2\n");
}

#[test]
fn test_list_containing_itself() {
    let mut r = runtime(
        "xs ← [1]\n\
         APPEND(xs, xs)\n\
         DISPLAY(LENGTH(xs))\n\
         DISPLAY(xs)\n\
         DISPLAY(\"<\" + xs + \">\")\n\
         ys ← [7, 8]\n\
         ys[2] ← ys\n\
         DISPLAY(ys, ys[2] = ys)",
    );
    assert_eq!(run(&mut r), "2\n1,\n<1,>\n7, true\n");
    finished(&r);
}
