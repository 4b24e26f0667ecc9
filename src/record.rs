use std::io::{BufRead, Lines};

use eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// One input block: the plaintext and its rotation command list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub plaintext: String,
    pub commands: Vec<i64>,
}

/// Iterates over input blocks of three lines each: a header integer
/// (consumed and discarded), the plaintext, and a line of
/// whitespace-separated command integers.
///
/// The stream may end cleanly only before a header line; a block truncated
/// after its header is an error.
pub struct BlockReader<R> {
    lines: Lines<R>,
    block: usize,
}

impl<R: BufRead> BlockReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            block: 0,
        }
    }

    fn next_line(&mut self) -> eyre::Result<String> {
        let line = self
            .lines
            .next()
            .ok_or_else(|| eyre::eyre!("block {} is truncated", self.block))??;

        Ok(line)
    }

    fn read_record(&mut self) -> eyre::Result<Record> {
        let plaintext = self.next_line()?.trim().to_owned();
        let commands = self
            .next_line()?
            .split_whitespace()
            .map(|token| {
                token.parse().wrap_err_with(|| {
                    format!("bad command {token:?} in block {}", self.block)
                })
            })
            .collect::<eyre::Result<Vec<i64>>>()?;

        Ok(Record {
            plaintext,
            commands,
        })
    }
}

impl<R: BufRead> Iterator for BlockReader<R> {
    type Item = eyre::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        // Header line; its value is unused. Missing means end of input.
        let header = self.lines.next()?;
        self.block += 1;

        if let Err(err) = header {
            return Some(Err(err.into()));
        }

        Some(self.read_record())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const INPUT: &str = indoc! {"
        3
        abc
        1 2 3
        5
        hello
        2 2 5
    "};

    #[test]
    fn reads_all_blocks() -> eyre::Result<()> {
        let records = BlockReader::new(INPUT.as_bytes())
            .collect::<eyre::Result<Vec<_>>>()?;

        assert_eq!(
            records,
            vec![
                Record {
                    plaintext: "abc".to_string(),
                    commands: vec![1, 2, 3],
                },
                Record {
                    plaintext: "hello".to_string(),
                    commands: vec![2, 2, 5],
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(BlockReader::new("".as_bytes()).count(), 0);
    }

    #[test]
    fn truncated_block_is_an_error() {
        let mut reader = BlockReader::new("3\nabc".as_bytes());

        assert!(reader.next().unwrap().is_err());
    }

    #[test]
    fn bad_command_token_is_an_error() {
        let mut reader = BlockReader::new("3\nabc\n1 x 3\n".as_bytes());

        let err = reader.next().unwrap().unwrap_err();
        assert!(err.to_string().contains("bad command"));
    }

    #[test]
    fn record_serialization() -> eyre::Result<()> {
        let record = Record {
            plaintext: "abc".to_string(),
            commands: vec![1, 2, 3],
        };

        let serialized = serde_json::to_string(&record)?;
        let deserialized: Record = serde_json::from_str(&serialized)?;

        assert_eq!(record, deserialized);

        Ok(())
    }
}
