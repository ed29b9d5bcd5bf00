/*!
# `REVELATION_CASE <variable> WHEN "<text>" THEN ... [ELSE ...] ENDCASE`

## Purpose
Choose one branch by the text of a variable.

## Remarks
The first `WHEN` whose text equals the variable runs. If none does, the
`ELSE` branch runs when there is one. An unset variable is the empty
string. Lines between `REVELATION_CASE` and the first `WHEN` never run.

## Example
```text
day = "sat"
REVELATION_CASE day
WHEN "sat" THEN
PRINT("weekend")
WHEN "mon" THEN
PRINT("work")
ELSE
PRINT("unknown")
ENDCASE
weekend
```

*/
