/*!
# The Keystroke Language

A program is a flat sequence of keystrokes separated by whitespace. Each
keystroke either puts a value on the register stack, moves a value between
the stack and a variable, operates on the top of the stack, or calls a
subroutine.

```text
2 3 +            => X is 5
5 sto x          => X is 5, x is 5
rcl x rcl x *    => X is 25
```

## Registers

The machine has four registers arranged as a rotating stack. Keying a
number pushes it on top. Pushing a fifth value silently drops the oldest.
Operators take the top two values, `y` below and `x` on top, and push
`y op x`. The registers start out holding zero.

```text
2 3 -            => X is -1
1 3 /            => X is 0.333333333333
2 3 <            => X is 1
```

## Numbers

Numbers are digits with at most one decimal point: `42`, `3.14`, `.5`.
There is no exponent and no sign; negative values come from subtraction.
Division keeps twelve fractional digits and truncates the rest.
Comparisons push `1` for true and `0` for false.

## Variables

`sto name` copies the top register into a variable without removing it.
`rcl name` pushes the variable's value. Recalling a variable that was never
stored is an `UNDEFINED VARIABLE` error. Names are letters followed by
letters or digits.

## Labels

`lbl name ... rtn` defines a subroutine. `xeq name` runs it and continues
with the next keystroke. Labels may be defined anywhere at the top level,
before or after the `xeq` that calls them, but never inside another label.

```text
lbl sq rcl x rcl x * rtn
6 sto x xeq sq   => X is 36
```

## Keywords

| Keystroke | Meaning            |
|-----------|--------------------|
| `lbl`     | begin subroutine   |
| `rtn`     | end subroutine     |
| `xeq`     | call subroutine    |
| `sto`     | store to variable  |
| `rcl`     | recall variable    |

Keywords are lowercase. `LBL` is an ordinary name.

*/
