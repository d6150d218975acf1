/*!
# Introductory Tutorial

Write a program in any text editor and pass the file to the `apcsp`
executable. Output appears line by line. Stop a running program with
CTRL-C.

```text
$ cat hello.txt
DISPLAY("Hello World")
$ apcsp hello.txt
Hello World
```

A program is read one line per statement. Blank lines and comments are
fine anywhere. A comment begins with `#` or `//` and runs to the end of
the line, unless the marker is inside a string.

```text
# Greet the user.
name ← INPUT("What is your name?")
DISPLAY("Hello " + name)   // + joins strings
```

Variables are created by assigning to them. The arrow may be typed as `←`
or as `<-`, and an optional `SET` may come first. Names are case
sensitive; keywords are not.

```text
SET score ← 0
score <- score + 10
DISPLAY(score)
```

Decisions use `IF`, with an optional `ELSE`. The word `THEN` is optional.

```text
IF score > 5 THEN
    DISPLAY("Big number")
ELSE
    DISPLAY("Small number")
END IF
```

There are two loops. `REPEAT n TIMES` runs its body `n` times, and
`REPEAT UNTIL` runs its body at least once, then again for as long as the
condition is false when the body ends.

```text
REPEAT 3 TIMES
    DISPLAY("x")
END REPEAT

x ← 0
REPEAT UNTIL x ≥ 3
    DISPLAY(x)
    x ← x + 1
END REPEAT
```

Procedures are declared anywhere in the program. Running past a declaration
does nothing; the body only runs when called.

```text
PROCEDURE greet(name)
    DISPLAY("Hello " + name)
END PROCEDURE

greet("TBA")
```

A run is limited to 20000 statements so a loop that never ends stops with
`STEP LIMIT EXCEEDED` instead of hanging. Use `--steps` to change it.
*/
