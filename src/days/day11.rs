//! Monkeys passing items around.
//!
//! Each monkey keeps its items in a ring buffer: inspected items leave the
//! front and thrown items join the back of the target's queue. With relief
//! switched off, worry levels are reduced modulo the lcm of every divisor,
//! which keeps each divisibility test intact.

use std::collections::VecDeque;

use itertools::Itertools;
use regex::Regex;

use crate::answer::Answers;
use crate::error::{AocError, Result};
use crate::util::{lcm_all, num, sections};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {Old, Const(u64)}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {Add(Operand), Mul(Operand)}

impl Op {
    fn apply(self, old: u64) -> Result<u64> {
        let value = |x: Operand| match x {Operand::Old => old, Operand::Const(c) => c};
        let new = match self {
            Op::Add(x) => old.checked_add(value(x)),
            Op::Mul(x) => old.checked_mul(value(x)),
        };
        new.ok_or_else(|| AocError::Malformed(format!("worry level overflows applying {:?} to {}", self, old)))
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: VecDeque<u64>,
    op: Op,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn field<'a>(line: Option<&&'a str>, key: &str) -> Result<&'a str> {
    let line = line.ok_or_else(|| AocError::Malformed(format!("missing {:?}", key)))?;
    line.trim().strip_prefix(key).map(str::trim).ok_or_else(|| AocError::malformed(line))
}

fn parse(lines: &[&str]) -> Result<Vec<Monkey>> {
    let op_re = Regex::new(r"^new = old ([*+]) (old|\d+)$").map_err(|e| AocError::Malformed(e.to_string()))?;
    let monkeys = sections(lines).into_iter().map(|block| -> Result<Monkey> {
        let mut block = block.iter().skip(1);
        let items = field(block.next(), "Starting items:")?;
        let items = items.split(',').filter(|s| !s.trim().is_empty()).map(num::<u64>).collect::<Result<VecDeque<_>>>()?;

        let op = field(block.next(), "Operation:")?;
        let caps = op_re.captures(op).ok_or_else(|| AocError::malformed(op))?;
        let operand = match &caps[2] {"old" => Operand::Old, c => Operand::Const(num(c)?)};
        let op = if &caps[1] == "+" {Op::Add(operand)} else {Op::Mul(operand)};

        let divisor: u64 = num(field(block.next(), "Test: divisible by")?)?;
        let if_true = num(field(block.next(), "If true: throw to monkey")?)?;
        let if_false = num(field(block.next(), "If false: throw to monkey")?)?;
        if divisor == 0 {return Err(AocError::Malformed("divisible by 0".into()))}
        Ok(Monkey {items, op, divisor, if_true, if_false})
    }).collect::<Result<Vec<_>>>()?;

    for (ix, m) in monkeys.iter().enumerate() {
        if m.if_true == ix || m.if_false == ix || m.if_true >= monkeys.len() || m.if_false >= monkeys.len() {
            return Err(AocError::Malformed(format!("monkey {} throws to an invalid target", ix)));
        }
    }
    Ok(monkeys)
}

/// Product of the two highest inspection counts after `rounds`.
fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: bool) -> Result<u64> {
    let modulus = lcm_all(monkeys.iter().map(|m| m.divisor));
    let mut inspected = vec![0u64; monkeys.len()];
    for _ in 0 .. rounds {
        for ix in 0 .. monkeys.len() {
            while let Some(worry) = monkeys[ix].items.pop_front() {
                inspected[ix] += 1;
                let m = &monkeys[ix];
                let worry = m.op.apply(worry)?;
                let worry = if relief {worry / 3} else {worry % modulus};
                let target = if worry % m.divisor == 0 {m.if_true} else {m.if_false};
                monkeys[target].items.push_back(worry);
            }
        }
    }
    inspected.into_iter().sorted_unstable_by(|a, b| b.cmp(a)).take(2)
        .try_fold(1u64, |acc, n| acc.checked_mul(n))
        .ok_or_else(|| AocError::Malformed("monkey business overflows".into()))
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let monkeys = parse(lines)?;
    Ok(Answers::new(monkey_business(monkeys.clone(), 20, true)?, monkey_business(monkeys, 10_000, false)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

    #[test]
    fn example() {
        let lines = EXAMPLE.lines().collect_vec();
        assert_eq!(solve(&lines).unwrap(), Answers::new(10605u64, 2713310158u64));
    }

    #[test]
    fn parses_operations_and_targets() {
        let lines = EXAMPLE.lines().collect_vec();
        let monkeys = parse(&lines).unwrap();
        assert_eq!(monkeys.len(), 4);
        assert_eq!(monkeys[2].op, Op::Mul(Operand::Old));
        assert_eq!(monkeys[1].op, Op::Add(Operand::Const(6)));
        assert_eq!(monkeys[1].items, [54u64, 65, 75, 74]);
        assert_eq!((monkeys[3].if_true, monkeys[3].if_false), (0, 1));
    }

    #[test]
    fn overflowing_worry_is_an_error() {
        assert_eq!(Op::Mul(Operand::Old).apply(1 << 31).unwrap(), 1 << 62);
        assert!(Op::Mul(Operand::Old).apply(1 << 32).is_err());
        assert!(Op::Add(Operand::Const(1)).apply(u64::MAX).is_err());

        let lines = [
            "Monkey 0:", "  Starting items: 4294967296", "  Operation: new = old * old",
            "  Test: divisible by 2", "    If true: throw to monkey 1", "    If false: throw to monkey 1",
            "", "Monkey 1:", "  Starting items:", "  Operation: new = old + 1",
            "  Test: divisible by 2", "    If true: throw to monkey 0", "    If false: throw to monkey 0",
        ];
        assert!(parse(&lines).is_ok());
        assert!(solve(&lines).is_err());
    }

    #[test]
    fn throwing_to_itself_is_rejected() {
        let lines = EXAMPLE.lines().collect_vec();
        let mut lines = lines[.. 6].to_vec();
        lines[4] = "    If true: throw to monkey 0";
        lines[5] = "    If false: throw to monkey 0";
        assert!(parse(&lines).is_err());
    }
}
