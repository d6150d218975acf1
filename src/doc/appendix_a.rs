/*!
# Errors

Every error names the line it happened on. Errors found before the program
starts prevent it from running at all. Errors while running end the run.

| Error | Found | Cause |
|---|---|---|
| `ELSE WITHOUT IF` | before running | `ELSE` outside an `IF` block, or a second `ELSE` |
| `END IF WITHOUT IF` | before running | `END IF` does not close an `IF` |
| `END REPEAT WITHOUT REPEAT` | before running | `END REPEAT` does not close a `REPEAT` |
| `BLOCK NOT CLOSED` | before running | an `IF` or `REPEAT` has no `END` |
| `NESTED PROCEDURE` | before running | `PROCEDURE` inside a procedure |
| `MALFORMED PROCEDURE` | before running | bad name or parameter list |
| `END PROCEDURE WITHOUT PROCEDURE` | before running | stray `END PROCEDURE` |
| `PROCEDURE NOT CLOSED` | before running | `PROCEDURE` has no `END PROCEDURE` |
| `DUPLICATE PROCEDURE` | before running | two procedures with one name |
| `RESERVED NAME` | before running | a procedure named like a keyword or built-in |
| `INVALID CHARACTERS` | running | a character outside the expression alphabet |
| `SYNTAX ERROR` | running | a malformed expression |
| `UNDEFINED VARIABLE` | running | a name that has not been assigned |
| `UNDEFINED PROCEDURE` | running | a call to an unknown procedure |
| `TYPE MISMATCH` | running | for example, multiplying a list |
| `SUBSCRIPT OUT OF RANGE` | running | an index outside the list or string |
| `ILLEGAL FUNCTION CALL` | running | a procedure result used inside an expression |
| `WRONG NUMBER OF ARGUMENTS` | running | too many or too few arguments |
| `UNKNOWN STATEMENT` | running | a line that is no kind of statement |
| `RETURN WITHOUT PROCEDURE` | running | `RETURN` at top level |
| `INPUT CANCELLED` | running | `INPUT` was cancelled; the run stops |
| `STEP LIMIT EXCEEDED` | running | too many statements; the run stops |
*/
