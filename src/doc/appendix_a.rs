/*!
# Error Messages

Errors marked fatal stop the program and nothing it printed is shown.
The others are printed as a line starting with `?` and the program
carries on.

## SYNTAX ERROR (fatal)
A line starts with a keyword but is not shaped the way that statement
must be, such as an `IF` without `THEN` at the end. Every line is
checked before the program starts.

## UNTERMINATED BLOCK (fatal)
An `IF`, `REVELATION_CASE` or `DEFINE` has no matching `ENDIF`,
`ENDCASE` or `ENDFUNCTION`. The line shown is the one that opened it.

## UNDEFINED FUNCTION
`CALL` named a function that was never defined.

## UNRECOGNIZED STATEMENT
The line is not any statement.

## CALL DEPTH EXCEEDED (fatal)
Calls nested deeper than the configured limit, usually a function that
calls itself.

## NESTING TOO DEEP (fatal)
Blocks and calls, counted together, are nested deeper than the
configured limit.

## EXECUTION STEPS EXCEEDED (fatal)
The program ran more statements than the configured limit.

## BREAK (fatal)
The program was interrupted with CTRL-C.

## FILE NOT FOUND
The program file given on the command line does not exist.
*/
