/*!
# Values and Variables

A value is assigned to a variable with `=`. The spaces around `=` are
required. Variable names are letters, digits and underbars.

```text
name = "Ada Lovelace"
year = 1815
```

A value in double quotes is text. The quotes are removed once and
everything between them is kept, spaces included. A value without quotes
that spells a decimal number, such as `10`, `-3` or `2.50`, is a number.
Anything else without quotes is text exactly as written.

There is one set of variables. Assigning to a name replaces what it held.
Reading a name that was never assigned gives the empty string.

## Comparisons

`IF` compares two operands with one of `>=`, `<=`, `=`, `>` and `<`.
Each operand is a variable name, or a literal when no variable has that
name.

 * Two numbers compare by value, so `10 > 9` is true.
 * Numbers with more than 15 digits before the point compare as text.
 * Anything else compares as text, so `"10" > "9"` is false.
 * A condition without an operator is false.

```text
IF year >= 1800 THEN
PRINT("nineteenth century")
ENDIF
```

`REVELATION_CASE` compares text only. `WHEN "5" THEN` matches a variable
holding `5` but not one holding `5.0`.

*/
