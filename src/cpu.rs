use crate::addressing::{self, Operand};
use crate::memory::Memory;
use crate::opcode::{self, Instruction};
use crate::registers::Registers;
use log::trace;
use thiserror::Error;

/// Errors a single execution step can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched opcode has no decoder-table entry. Nothing was mutated;
    /// the program counter still points at the offending byte.
    #[error("unimplemented opcode 0x{0:02X}")]
    UnimplementedOpcode(u8),
}

/// 6502 execution core: a register file plus the memory it exclusively owns
pub struct Cpu {
    pub registers: Registers,
    pub memory: Memory,
}

impl Cpu {
    /// Create a CPU with power-on registers and zeroed memory
    pub fn new() -> Self {
        Self {
            registers: Registers::new(),
            memory: Memory::new(),
        }
    }

    /// Reset the register file to its power-on state. Memory is untouched;
    /// reset is a register event, not a memory event.
    pub fn reset(&mut self) {
        self.registers = Registers::new();
    }

    /// Execute exactly one instruction: fetch the opcode at PC, decode it,
    /// resolve the operand, run the handler, update flags, and advance PC
    /// past the opcode and its operand bytes. If the opcode has no table
    /// entry the step fails before any state is mutated.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let code = self.memory.read(self.registers.pc);
        let opcode = opcode::lookup(code).ok_or(ExecutionError::UnimplementedOpcode(code))?;

        let operand_pc = self.registers.pc.wrapping_add(1);
        let (operand, operand_bytes) =
            addressing::resolve(opcode.mode, operand_pc, &self.registers, &self.memory);
        trace!("{:04X} {} {:?}", self.registers.pc, opcode.mnemonic, operand);

        match opcode.instruction {
            Instruction::Lda => self.lda(operand),
        }

        self.registers.pc = self.registers.pc.wrapping_add(1 + operand_bytes);
        Ok(())
    }

    /// Execute up to `count` instructions, stopping at the first error
    pub fn run_steps(&mut self, count: usize) -> Result<(), ExecutionError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Load Accumulator - LDA operation
    fn lda(&mut self, operand: Operand) {
        let value = operand.value(&self.memory);
        self.registers.a = value;
        self.registers.set_zero_and_negative(value);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
