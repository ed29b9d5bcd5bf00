/*!
# Introductory Tutorial for KJPL

Start `kjpl` from a terminal with no arguments. Each line you type is
collected until every block you opened is closed, then the collected
program runs and its output is printed. Type CTRL-D to exit. Stop a
running program with CTRL-C.

<pre><code>&nbsp;> PRINT("Hello World")
&nbsp;  Hello World
</code></pre>

Variables remember their values for the whole session, so a later
program can use what an earlier one stored.

<pre><code>&nbsp;> greeting = "Hello again"
&nbsp;  No output generated.
&nbsp;> PRINT(greeting)
&nbsp;  Hello again
</code></pre>

A block stays open until its terminator. Nothing runs while a block is
open.

<pre><code>&nbsp;> IF 2 > 1 THEN
&nbsp;> PRINT("bigger")
&nbsp;> ENDIF
&nbsp;  bigger
</code></pre>

Type `RESET` on a line of its own to forget every variable and function.

To run a whole file, pass its name: `kjpl hello.kj`.

*/
