/*!
# Expressions and Types

There are four types of values.

| Type | Examples |
|---|---|
| Number | `12`, `3.5`, `.5` |
| String | `"hello"`, `'hello'`, `“hello”` |
| Boolean | `true`, `false` |
| List | `[1, 2, 3]`, `[]`, `["a", [1, 2]]` |

Numbers are double precision. Whole numbers display without a fraction, so
`7 / 2` displays `3.5` and `6 / 2` displays `3`. Dividing by zero gives
`Infinity`, `-Infinity` or `NaN` rather than an error.

## Operators

From lowest to highest precedence. Operators of equal precedence are
evaluated left to right.

| Operators | Meaning |
|---|---|
| `OR`, `\|\|` | either is true |
| `AND`, `&&` | both are true |
| `=`, `==`, `≠`, `!=`, `<>` | equality |
| `<`, `≤`, `<=`, `>`, `≥`, `>=` | comparison |
| `+`, `-` | addition, subtraction, joining strings |
| `*`, `/`, `MOD`, `%` | multiplication, division, remainder |
| `-`, `NOT`, `!` | negation |
| `x[i]` | element `i` of a list or string |

`AND` and `OR` stop as soon as the answer is known, so
`i ≤ LENGTH(xs) AND xs[i] > 0` never reads past the end of `xs`.

`+` joins when either side is a string: `"n=" + 1 + 2` is `n=12` but
`1 + 2 + "!"` is `3!`. The other arithmetic operators accept strings that
look like numbers, which is handy because `INPUT` always yields a string.

Numbers compare with strings by reading the string as a number; a string
that is not a number is neither less, greater, nor equal. Booleans equal
only booleans, but order as 0 and 1, so `1 < 2 < 3` is `true < 3`, which is
true. Lists can only be tested for equality, and two lists are equal only
when they are the same list.

`IF`, `REPEAT UNTIL`, `NOT`, `AND` and `OR` treat `false`, `0`, `NaN` and
the empty string as false. Everything else is true.

## Built-in procedures

| Call | Result |
|---|---|
| `INPUT()`, `INPUT(prompt)` | a line typed by the user, as a string |
| `RANDOM(a, b)` | a whole number from `a` to `b` inclusive |
| `LENGTH(x)` | elements in a list or characters in a string |
| `APPEND(list, value)` | adds `value` to the end (statement only) |
| `INSERT(list, i, value)` | puts `value` before element `i` (statement only) |
| `REMOVE(list, i)` | deletes element `i` (statement only) |

Lists are shared, not copied. Passing a list to a procedure and appending
to it changes the caller's list too.

```text
xs ← [3, 1]
APPEND(xs, 4)
INSERT(xs, 1, 0)
REMOVE(xs, 2)
DISPLAY(xs, LENGTH(xs))
```
displays `0,1,4 3`.
*/
