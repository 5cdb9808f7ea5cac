use crate::interpreter::engine::Engine;
use crate::interpreter::errors::EngineError;
use crate::parser::Instruction;

/// Direction of a bracket scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanDirection {
    Forward,
    Backward,
}

impl ScanDirection {
    fn target(self) -> Instruction {
        match self {
            ScanDirection::Forward => Instruction::LoopEnd,
            ScanDirection::Backward => Instruction::LoopStart,
        }
    }
}

impl Engine {
    /// Relocate the instruction pointer from the bracket at `from` to its partner.
    ///
    /// Resolved pairs are memoized in both directions; the program is immutable
    /// for the run so a pair never changes once found.
    pub(crate) fn jump(
        &mut self,
        from: usize,
        direction: ScanDirection,
    ) -> Result<usize, EngineError> {
        if let Some(&to) = self.jump_table.get(&from) {
            log::debug!("jump {} -> {} (cached)", from, to);
            return Ok(to);
        }

        let to = scan_for_partner(self.program.instructions(), from, direction)?;
        self.jump_table.insert(from, to);
        self.jump_table.insert(to, from);
        log::debug!("jump {} -> {}", from, to);
        Ok(to)
    }
}

/// Linear scan from `start` (inclusive) for the matching bracket.
///
/// The start bracket is counted on the first iteration, so the nesting level
/// returns to zero exactly at its partner.
pub(crate) fn scan_for_partner(
    instructions: &[Instruction],
    start: usize,
    direction: ScanDirection,
) -> Result<usize, EngineError> {
    let target = direction.target();
    let mut level: i64 = 0;
    let mut index = start;

    while let Some(&instruction) = instructions.get(index) {
        level += instruction.nesting_delta();
        if level == 0 && instruction == target {
            return Ok(index);
        }

        match direction {
            ScanDirection::Forward => index += 1,
            ScanDirection::Backward => match index.checked_sub(1) {
                Some(prev) => index = prev,
                None => break,
            },
        }
    }

    Err(EngineError::UnbalancedBrackets {
        position: start,
        bracket: instructions
            .get(start)
            .map(|i| i.as_char())
            .unwrap_or(target.as_char()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Program;

    fn scan(source: &str, start: usize, direction: ScanDirection) -> Result<usize, EngineError> {
        scan_for_partner(Program::parse(source).instructions(), start, direction)
    }

    #[test]
    fn test_forward_scan_skips_nested_loops() {
        //          0123456789
        let src = "[+[-[]]+]-";
        assert_eq!(scan(src, 0, ScanDirection::Forward), Ok(8));
        assert_eq!(scan(src, 2, ScanDirection::Forward), Ok(6));
        assert_eq!(scan(src, 4, ScanDirection::Forward), Ok(5));
    }

    #[test]
    fn test_backward_scan_skips_nested_loops() {
        let src = "[+[-[]]+]-";
        assert_eq!(scan(src, 8, ScanDirection::Backward), Ok(0));
        assert_eq!(scan(src, 6, ScanDirection::Backward), Ok(2));
        assert_eq!(scan(src, 5, ScanDirection::Backward), Ok(4));
    }

    #[test]
    fn test_unmatched_brackets_fail() {
        assert_eq!(
            scan("[[]", 0, ScanDirection::Forward),
            Err(EngineError::UnbalancedBrackets {
                position: 0,
                bracket: '['
            })
        );
        assert_eq!(
            scan("[]]", 2, ScanDirection::Backward),
            Err(EngineError::UnbalancedBrackets {
                position: 2,
                bracket: ']'
            })
        );
    }
}
