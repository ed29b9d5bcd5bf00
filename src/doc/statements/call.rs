/*!
# `CALL <name>`

## Purpose
Run a function defined with `DEFINE`.

## Remarks
The body runs with the same variables and functions as the caller, so
anything it assigns or defines is still there afterwards. Calling an
undefined name prints `?UNDEFINED FUNCTION` and carries on.

## Example
```text
DEFINE bump AS FUNCTION
n = 2
ENDFUNCTION
n = 1
CALL bump
PRINT(n)
2
```

*/
