/*!
# `DEFINE <name> AS FUNCTION ... ENDFUNCTION`

## Purpose
Store statements to run later with `CALL`.

## Remarks
The body does not run when it is defined. Defining the same name again
replaces the earlier body. Functions have no parameters or local
variables.

## Example
```text
DEFINE greet AS FUNCTION
PRINT("hello")
ENDFUNCTION
CALL greet
hello
```

*/
