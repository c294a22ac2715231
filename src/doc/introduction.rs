/*!
# Introductory Tutorial for basecalc

Start the executable with no arguments. If you get the following, you are
ready for this tutorial. Type CTRL-D to exit.
<pre><code>&nbsp;  READY.
&nbsp;> █
</code></pre>

Lines you type are not executed right away. They are collected into a
listing, one statement per line, and the whole listing runs when you type
`RUN`. For this tutorial, I'll mark lines that you type with a "`>`".

<pre><code>&nbsp;> config dec
&nbsp;> x = 6 * 7
&nbsp;> print x
&nbsp;> RUN
&nbsp;  42
&nbsp;  READY.
</code></pre>

Every run starts from nothing. Variables and the output base set by one
run are gone by the next. Printed output is cleared at the start of each
`RUN`; type `CLEAR` to clear it yourself.

The output base is chosen with `config`. Change the first line and try
again.

<pre><code>&nbsp;> NEW
&nbsp;> config hex
&nbsp;> x = 255
&nbsp;> print x
&nbsp;> RUN
&nbsp;  ff
&nbsp;  READY.
</code></pre>

`LIST` shows the listing with line numbers. Errors name the line and the
columns of the token that caused them.

<pre><code>&nbsp;> NEW
&nbsp;> config bin
&nbsp;> print y
&nbsp;> RUN
&nbsp;  UNDECLARED VARIABLE IN 2 (6..7); y
&nbsp;  READY.
</code></pre>

Scripts saved to a file run directly with `basecalc script.txt`.

*/
