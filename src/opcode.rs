use crate::addressing::AddressingMode;

/// Instruction identifiers, one per handler in the execution engine.
/// Growing the set means a new variant, new table rows, and a new match arm
/// in the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load accumulator
    Lda,
}

/// One decoder-table entry: an opcode byte tagged with its instruction and
/// addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCode {
    /// The opcode byte value
    pub code: u8,
    /// The instruction mnemonic (e.g., "LDA")
    pub mnemonic: &'static str,
    /// Which handler executes this opcode
    pub instruction: Instruction,
    /// How the operand is resolved
    pub mode: AddressingMode,
}

impl OpCode {
    /// Create a new OpCode
    pub const fn new(
        code: u8,
        mnemonic: &'static str,
        instruction: Instruction,
        mode: AddressingMode,
    ) -> Self {
        Self {
            code,
            mnemonic,
            instruction,
            mode,
        }
    }
}

// Opcode constants for use in match patterns and assembled programs
pub const LDA_INDX: u8 = 0xA1;
pub const LDA_ZP: u8 = 0xA5;
pub const LDA_IMM: u8 = 0xA9;
pub const LDA_ABS: u8 = 0xAD;
pub const LDA_INDY: u8 = 0xB1;
pub const LDA_ZPX: u8 = 0xB5;
pub const LDA_ABSY: u8 = 0xB9;
pub const LDA_ABSX: u8 = 0xBD;

/// Every opcode the core decodes, in ascending numeric order. Built once,
/// shared read-only by every CPU instance.
pub static OPCODE_TABLE: &[OpCode] = &[
    OpCode::new(LDA_INDX, "LDA", Instruction::Lda, AddressingMode::IndirectX),
    OpCode::new(LDA_ZP, "LDA", Instruction::Lda, AddressingMode::ZeroPage),
    OpCode::new(LDA_IMM, "LDA", Instruction::Lda, AddressingMode::Immediate),
    OpCode::new(LDA_ABS, "LDA", Instruction::Lda, AddressingMode::Absolute),
    OpCode::new(LDA_INDY, "LDA", Instruction::Lda, AddressingMode::IndirectY),
    OpCode::new(LDA_ZPX, "LDA", Instruction::Lda, AddressingMode::ZeroPageX),
    OpCode::new(LDA_ABSY, "LDA", Instruction::Lda, AddressingMode::AbsoluteY),
    OpCode::new(LDA_ABSX, "LDA", Instruction::Lda, AddressingMode::AbsoluteX),
];

/// Decode an opcode byte to its table entry, or None if the byte has no
/// entry
pub fn lookup(code: u8) -> Option<&'static OpCode> {
    OPCODE_TABLE.iter().find(|op| op.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opcode_creation() {
        let opcode = OpCode::new(0xA9, "LDA", Instruction::Lda, AddressingMode::Immediate);
        assert_eq!(opcode.code, 0xA9);
        assert_eq!(opcode.mnemonic, "LDA");
        assert_eq!(opcode.mode, AddressingMode::Immediate);
    }

    #[test]
    fn test_encodings_match_the_hardware() {
        assert_eq!(LDA_IMM, 0xA9);
        assert_eq!(LDA_ZP, 0xA5);
        assert_eq!(LDA_ZPX, 0xB5);
        assert_eq!(LDA_ABS, 0xAD);
        assert_eq!(LDA_ABSX, 0xBD);
        assert_eq!(LDA_ABSY, 0xB9);
        assert_eq!(LDA_INDX, 0xA1);
        assert_eq!(LDA_INDY, 0xB1);
    }

    #[test]
    fn test_table_covers_the_load_family() {
        assert_eq!(OPCODE_TABLE.len(), 8);
        let modes: HashSet<_> = OPCODE_TABLE.iter().map(|op| op.mode).collect();
        assert_eq!(modes.len(), 8);
    }

    #[test]
    fn test_no_duplicate_opcodes() {
        let mut codes = HashSet::new();
        for opcode in OPCODE_TABLE {
            assert!(
                codes.insert(opcode.code),
                "Duplicate opcode: 0x{:02X}",
                opcode.code
            );
        }
    }

    #[test]
    fn test_lookup_existing_opcode() {
        let opcode = lookup(LDA_IMM).unwrap();
        assert_eq!(opcode.code, 0xA9);
        assert_eq!(opcode.mnemonic, "LDA");
        assert_eq!(opcode.instruction, Instruction::Lda);
        assert_eq!(opcode.mode, AddressingMode::Immediate);
    }

    #[test]
    fn test_lookup_unknown_opcode_returns_none() {
        assert!(lookup(0x00).is_none());
        assert!(lookup(0xFF).is_none());
    }
}
