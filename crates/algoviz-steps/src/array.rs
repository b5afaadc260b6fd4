//! Array insertion and deletion by shifting slots.

use crate::error::{Result, StepError};
use crate::step::ArrayStep;

/// Insert `value` at `index`, shifting the tail one slot right first.
///
/// `index` may equal the array length (append).
pub fn array_insertion(input: &[i64], index: usize, value: i64) -> Result<Vec<ArrayStep>> {
    if index > input.len() {
        return Err(StepError::IndexOutOfBounds {
            index,
            len: input.len(),
        });
    }

    let mut steps: Vec<ArrayStep> = (index..input.len())
        .rev()
        .map(|index| ArrayStep::ShiftRight { index })
        .collect();
    steps.push(ArrayStep::Insert { index, value });
    Ok(steps)
}

/// Delete the element at `index`, shifting the tail one slot left.
pub fn array_deletion(input: &[i64], index: usize) -> Result<Vec<ArrayStep>> {
    if index >= input.len() {
        return Err(StepError::IndexOutOfBounds {
            index,
            len: input.len(),
        });
    }

    let mut steps = vec![ArrayStep::Highlight { index }];
    steps.extend((index + 1..input.len()).map(|index| ArrayStep::ShiftLeft { index }));
    steps.push(ArrayStep::Delete {
        index: input.len() - 1,
    });
    Ok(steps)
}
