use crate::error::EmptyCommands;
use crate::threshold::Thresholds;

/// Applies position-keyed Caesar rotations to lowercase text.
///
/// The command list is sorted once at construction; each character is then
/// shifted by `(m - j) % 26`, where `m` is the number of commands and `j`
/// is the partition index of the character's 1-based position.
#[derive(Debug, Clone)]
pub struct Roller {
    commands: Thresholds,
}

impl Roller {
    pub fn new(commands: Vec<i64>) -> Result<Self, EmptyCommands> {
        Ok(Self {
            commands: Thresholds::new(commands)?,
        })
    }

    /// Rotation amount for the character at 0-based index `index`.
    pub fn shift_at(&self, index: usize) -> u8 {
        let m = self.commands.len();
        let j = self.commands.partition(index as i64 + 1);

        ((m - j) % 26) as u8
    }

    /// Rotates each lowercase letter forward through the alphabet by its
    /// positional shift. Other characters pass through unchanged.
    #[tracing::instrument(skip(self, plaintext), level = "debug")]
    pub fn roll(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if c.is_ascii_lowercase() {
                    (((c as u8 - b'a' + self.shift_at(i)) % 26) + b'a') as char
                } else {
                    c
                }
            })
            .collect()
    }
}

/// One-shot form of [`Roller::roll`].
pub fn roll(plaintext: &str, commands: Vec<i64>) -> Result<String, EmptyCommands> {
    Ok(Roller::new(commands)?.roll(plaintext))
}
