/*!
# `PRINT(<expression>)`

## Purpose
Print a line of output.

## Remarks
`PRINT("text")` prints the text. `PRINT(name)` prints the variable
`name`, or the word `name` itself when no such variable exists.
Nothing is printed when the result is empty.

## Example
```text
who = "Poe"
PRINT("Quoth the raven")
PRINT(who)
Quoth the raven
Poe
```

*/
