/*!
# `IF <operand> <operator> <operand> THEN ... [ELSE ...] ENDIF`

## Purpose
Run statements only when a comparison holds.

## Remarks
The operators are `>=`, `<=`, `=`, `>` and `<`. Without `ELSE`, a false
condition skips to after `ENDIF`. `THEN` must end the `IF` line.

## Example
```text
score = 72
IF score >= 50 THEN
PRINT("pass")
ELSE
PRINT("fail")
ENDIF
pass
```

*/
