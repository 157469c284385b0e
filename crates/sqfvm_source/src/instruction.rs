//! The view of compiled VM instructions needed to locate runtime diagnostics.

use crate::position::PositionInfo;

/// An executable instruction that may remember where it was compiled from.
///
/// The assembler attaches a debug position to every instruction it emits
/// from source; instructions synthesized by the VM itself carry none.
pub trait Instruction {
    /// Returns the source position this instruction was compiled from, if known.
    fn debug_info(&self) -> Option<&PositionInfo>;
}

impl<T: Instruction + ?Sized> Instruction for &T {
    fn debug_info(&self) -> Option<&PositionInfo> {
        (**self).debug_info()
    }
}

impl<T: Instruction + ?Sized> Instruction for Box<T> {
    fn debug_info(&self) -> Option<&PositionInfo> {
        (**self).debug_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Push {
        debug: Option<PositionInfo>,
    }

    impl Instruction for Push {
        fn debug_info(&self) -> Option<&PositionInfo> {
            self.debug.as_ref()
        }
    }

    #[test]
    fn boxed_instruction_forwards() {
        let instr: Box<dyn Instruction> = Box::new(Push {
            debug: Some(PositionInfo::new("a.sqf", 1, 1, 0)),
        });
        assert_eq!(instr.debug_info().map(|p| p.line), Some(1));
    }

    #[test]
    fn synthesized_instruction_has_no_origin() {
        let instr = Push { debug: None };
        assert!((&instr).debug_info().is_none());
    }
}
