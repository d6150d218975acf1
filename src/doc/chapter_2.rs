/*!
# Statements

Each line holds one statement.

| Statement | Effect |
|---|---|
| `DISPLAY(a, b, …)` | displays the values separated by spaces |
| `[SET] name ← expr` | assigns in the current procedure, or globally at top level |
| `[SET] name[i] ← expr` | replaces element `i` of a list |
| `IF cond [THEN]` … `[ELSE]` … `END IF` | runs one of two branches |
| `REPEAT n TIMES` … `END REPEAT` | `n` is evaluated once when the loop starts |
| `REPEAT UNTIL cond` … `END REPEAT` | checks `cond` after each pass |
| `PROCEDURE name(a, b)` … `END PROCEDURE` | declares a procedure |
| `name(args)` | calls a procedure and discards any result |
| `[SET] x ← name(args)` | calls a procedure and keeps its result |
| `RETURN [expr]` | leaves the procedure, optionally with a result |

`END IF`, `END REPEAT` and `END PROCEDURE` may also be written as one word.

## Procedures

A call must pass exactly as many arguments as the procedure declares.
Arguments are evaluated in the caller before the procedure starts.

Inside a procedure, a name refers to the procedure's own parameters and
variables first and to global variables second. The caller's variables
are never visible. Assignments inside a procedure never change a global
variable; they create a local one.

```text
total ← 100
PROCEDURE add(a, b)
    total ← a + b
    RETURN(total)
END PROCEDURE
sum ← add(2, 3)
DISPLAY(sum, total)
```
displays `5 100`.

A procedure result can only be used by assigning it. `x ← add(1, 2) * 2`
is an error; write `x ← add(1, 2)` and then `x ← x * 2`.

Procedures may not be declared inside other procedures or inside an `IF`
or `REPEAT` block.
*/
