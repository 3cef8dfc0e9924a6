// Instruction-execution core for a 6502-class CPU.
// Loaders, peripherals, and timing live outside this crate; they reach the
// core through Memory, the register file, and Cpu::step.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcode;
pub mod registers;

pub use addressing::{AddressingMode, Operand};
pub use cpu::{Cpu, ExecutionError};
pub use memory::Memory;
pub use registers::{RESET_ADDR, Registers, Status};
