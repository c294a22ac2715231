/*!
# Statements and Expressions

A script is a sequence of lines. Each line holds at most one statement.
Tokens must be separated by whitespace: `x = 1 + 2` is an assignment but
`x=1+2` is a single unrecognized token and the line is ignored.

## CONFIG

```text
config dec
config hex
config bin
```

Selects the base used by every later `print`. The last `config` wins.
Anything other than `dec`, `hex` or `bin` after `config` is an
`INVALID CONFIG` error.

## Assignment

```text
total = ( a + b ) * 2
```

A variable name starts with a letter followed by letters or digits. Names
are case sensitive. The right side is evaluated completely before the
variable changes.

## PRINT

```text
print total / 4
```

Evaluates the expression and prints it in the configured base. Printing
before any `config` is a `BASE NOT CONFIGURED` error.

Any line that does not start with `config`, `print` or a name followed by
`=` is ignored. Tokens after a complete statement are ignored.

## Expressions

| Operators | Precedence |
|-----------|------------|
| `*` `/`   | higher     |
| `+` `-`   | lower      |

Operators of the same precedence group left to right. Parentheses
override precedence. Integer literals may carry a leading `-`, as in `-5`,
but there is no negation operator so `-( 1 + 2 )` is a syntax error.

Division does not truncate: `print 10 / 4` shows `2.5` in decimal and
`2.8` in hexadecimal.

A variable holding zero reads as undeclared:
```text
z = 1 - 1
print z
```
fails with `UNDECLARED VARIABLE`.

*/
