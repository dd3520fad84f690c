use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForcingSequenceError {
    #[error("forcing sequence must not be empty")]
    Empty,
    #[error("forcing sequence may only contain 'A' or 'B', found {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Which map parameter drives a single iteration step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Forcing {
    /// `r_x`, the horizontal axis parameter.
    A,
    /// `r_y`, the vertical axis parameter.
    B,
}

impl Forcing {
    #[inline]
    #[must_use]
    pub fn select(self, r_x: f64, r_y: f64) -> f64 {
        match self {
            Self::A => r_x,
            Self::B => r_y,
        }
    }
}

/// Non-empty cyclic pattern over {A, B}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcingSequence {
    steps: Vec<Forcing>,
}

impl ForcingSequence {
    pub fn new(sequence: &str) -> Result<Self, ForcingSequenceError> {
        if sequence.is_empty() {
            return Err(ForcingSequenceError::Empty);
        }

        let steps = sequence
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                'A' => Ok(Forcing::A),
                'B' => Ok(Forcing::B),
                _ => Err(ForcingSequenceError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Forcing for iteration `step`, wrapping cyclically.
    #[inline]
    #[must_use]
    pub fn at(&self, step: usize) -> Forcing {
        self.steps[step % self.steps.len()]
    }

    /// Unrolls the cycle over `steps` iterations so the hot loop indexes a
    /// flat table instead of taking a modulo per step.
    #[must_use]
    pub fn lookup(&self, steps: usize) -> ForcingLookup {
        ForcingLookup {
            steps: (0..steps).map(|step| self.at(step)).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcingLookup {
    steps: Vec<Forcing>,
}

impl ForcingLookup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Forcing] {
        &self.steps
    }
}
