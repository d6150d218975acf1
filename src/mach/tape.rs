use super::Val;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Results of `INPUT` and `RANDOM` produced while evaluating the current
/// statement.
///
/// A statement suspended on `INPUT` is evaluated again once the answer
/// arrives. Replaying the tape gives the second pass the same values the
/// first pass saw, so a statement behaves as if it ran exactly once.
pub struct Tape {
    rng: StdRng,
    recorded: Vec<Val>,
    position: usize,
}

impl Tape {
    pub fn new(seed: Option<u64>) -> Tape {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Tape {
            rng,
            recorded: vec![],
            position: 0,
        }
    }

    /// Start replaying from the beginning of the statement.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// The statement completed; nothing will be replayed.
    pub fn clear(&mut self) {
        self.recorded.clear();
        self.position = 0;
    }

    pub fn record(&mut self, val: Val) {
        self.recorded.push(val);
    }

    pub fn is_empty(&self) -> bool {
        self.recorded.is_empty()
    }

    /// Next recorded value, or `None` when the tape has run out, which for
    /// `INPUT` means the answer has not been entered yet.
    pub fn replay(&mut self) -> Option<Val> {
        let val = self.recorded.get(self.position)?.clone();
        self.position += 1;
        Some(val)
    }

    pub fn random(&mut self, lo: i64, hi: i64) -> Val {
        if let Some(val) = self.replay() {
            return val;
        }
        let val = Val::Number(self.rng.gen_range(lo..=hi) as f64);
        self.record(val.clone());
        self.position += 1;
        val
    }
}
