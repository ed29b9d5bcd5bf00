/*!
# `<variable> = <value>`

## Purpose
Store a value in a variable.

## Remarks
The line is split at the first ` = `. Everything after it is the value.
Quotes around the value are removed. `x =` stores the empty string.

## Example
```text
title = "The Raven"
count = 3
PRINT(title)
The Raven
```

*/
