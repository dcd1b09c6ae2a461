//! Scenario execution on top of the stackfold library.

use anyhow::{Context, Result};
use serde::Serialize;
use stackfold::{map, reduce, try_map, try_reduce, Criteria, Stack};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::Command;

const WALKTHROUGH_PUSHES: [i64; 3] = [10, 20, 30];
const WALKTHROUGH_PROBES: [i64; 2] = [10, 5];
const WALKTHROUGH_WORDS: [&str; 4] = ["One", "Potato", "Two", "Potato"];

/// The result of running one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum Outcome {
    Stack {
        pushed: Vec<i64>,
        popped: Vec<i64>,
        /// A pop was attempted on an empty stack.
        exhausted: bool,
        remaining: Vec<i64>,
        membership: Vec<Membership>,
    },
    Words {
        kept: Vec<String>,
        lengths: Vec<usize>,
        total: usize,
    },
    Sum {
        values: Vec<i64>,
        total: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub value: i64,
    pub present: bool,
}

#[derive(Debug, Error)]
#[error("sum overflows a 64-bit integer")]
pub struct Overflow;

/// Runs `command`, returning one outcome per scenario executed.
pub fn run(command: &Command) -> Result<Vec<Outcome>> {
    debug!(?command, "running scenario");
    let outcomes = match command {
        Command::Walkthrough => {
            let words: Vec<String> = map(&WALKTHROUGH_WORDS, |w| w.to_string());
            vec![
                stack(&WALKTHROUGH_PUSHES, 1, &WALKTHROUGH_PROBES),
                words_outcome(&words, "Potato", 0),
            ]
        }
        Command::Stack {
            values,
            pops,
            probes,
        } => vec![stack(values, *pops, probes)],
        Command::Words {
            words,
            exclude,
            min_len,
        } => vec![words_outcome(words, exclude, *min_len)],
        Command::Sum { values } => vec![sum(values)?],
    };
    info!(count = outcomes.len(), "scenarios complete");
    Ok(outcomes)
}

fn stack(values: &[i64], pops: usize, probes: &[i64]) -> Outcome {
    let mut stack: Stack<i64> = values.iter().copied().collect();

    let mut popped = Vec::with_capacity(pops.min(stack.len()));
    let mut exhausted = false;
    for _ in 0..pops {
        match stack.pop() {
            Some(top) => popped.push(top),
            None => {
                exhausted = true;
                break;
            }
        }
    }

    let membership = map(probes, |&value| Membership {
        value,
        present: stack.contains(&value),
    });

    Outcome::Stack {
        pushed: values.to_vec(),
        popped,
        exhausted,
        remaining: stack.into_vec(),
        membership,
    }
}

fn words_outcome(words: &[String], exclude: &str, min_len: usize) -> Outcome {
    let kept = Criteria::new()
        .and_ne(exclude)
        .and(move |word: &String| word.len() >= min_len)
        .build()
        .filter_cloned(words);
    let lengths = map(&kept, String::len);
    let total = reduce(&lengths, 0, |acc, len| acc + len);

    Outcome::Words {
        kept,
        lengths,
        total,
    }
}

fn sum(raw: &[String]) -> Result<Outcome> {
    let values = try_map(raw, |s| s.trim().parse::<i64>()).context("parsing values to sum")?;
    let total = try_reduce(&values, 0i64, |acc, n| acc.checked_add(*n).ok_or(Overflow))
        .context("adding values")?;

    Ok(Outcome::Sum { values, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkthrough_matches_reference_output() {
        let outcomes = run(&Command::Walkthrough).unwrap();

        assert_eq!(
            outcomes,
            vec![
                Outcome::Stack {
                    pushed: vec![10, 20, 30],
                    popped: vec![30],
                    exhausted: false,
                    remaining: vec![10, 20],
                    membership: vec![
                        Membership {
                            value: 10,
                            present: true,
                        },
                        Membership {
                            value: 5,
                            present: false,
                        },
                    ],
                },
                Outcome::Words {
                    kept: vec!["One".into(), "Two".into()],
                    lengths: vec![3, 3],
                    total: 6,
                },
            ]
        );
    }

    #[test]
    fn stack_reports_exhaustion() {
        let outcome = stack(&[1, 2], 5, &[1]);
        match outcome {
            Outcome::Stack {
                popped,
                exhausted,
                remaining,
                membership,
                ..
            } => {
                assert_eq!(popped, vec![2, 1]);
                assert!(exhausted);
                assert!(remaining.is_empty());
                assert!(!membership[0].present);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn stack_pops_beyond_any_capacity() {
        let outcomes = run(&Command::Stack {
            values: vec![1],
            pops: usize::MAX,
            probes: vec![],
        })
        .unwrap();

        match &outcomes[..] {
            [Outcome::Stack {
                popped,
                exhausted,
                remaining,
                ..
            }] => {
                assert_eq!(popped, &vec![1]);
                assert!(exhausted);
                assert!(remaining.is_empty());
            }
            other => panic!("unexpected outcomes: {other:?}"),
        }
    }

    #[test]
    fn words_lengths_count_bytes() {
        let words = vec!["héllo".to_string(), "ab".to_string()];
        assert_eq!(
            words_outcome(&words, "Potato", 3),
            Outcome::Words {
                kept: vec!["héllo".into()],
                lengths: vec![6],
                total: 6,
            }
        );
    }

    #[test]
    fn words_respects_min_len() {
        let words: Vec<String> = ["a", "abc", "Potato", "abcd"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(
            words_outcome(&words, "Potato", 3),
            Outcome::Words {
                kept: vec!["abc".into(), "abcd".into()],
                lengths: vec![3, 4],
                total: 7,
            }
        );
    }

    #[test]
    fn sum_adds_parsed_values() {
        let raw = vec!["1".to_string(), " -4".to_string(), "10".to_string()];
        assert_eq!(
            sum(&raw).unwrap(),
            Outcome::Sum {
                values: vec![1, -4, 10],
                total: 7,
            }
        );
    }

    #[test]
    fn sum_reports_bad_element() {
        let raw = vec!["1".to_string(), "two".to_string()];
        let err = sum(&raw).unwrap_err();

        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain[0], "parsing values to sum");
        assert_eq!(chain[1], "map aborted at element 1");
        assert_eq!(chain[2], "invalid digit found in string");
    }

    #[test]
    fn sum_reports_overflow() {
        let raw = vec![i64::MAX.to_string(), "1".to_string()];
        let err = sum(&raw).unwrap_err();

        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain[1], "reduce aborted at element 1");
        assert_eq!(chain[2], "sum overflows a 64-bit integer");
    }
}
