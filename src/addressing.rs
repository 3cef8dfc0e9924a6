use crate::memory::Memory;
use crate::registers::Registers;

/// Addressing modes of the 6502 load family. The set is fixed by the
/// hardware encoding and never grows at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Operand byte is the value itself
    Immediate,
    /// One operand byte addresses page 0 directly
    ZeroPage,
    /// Operand byte plus X, mod 256; never carries into page 1
    ZeroPageX,
    /// Two operand bytes form a little-endian address
    Absolute,
    /// Absolute address plus X, mod 65536
    AbsoluteX,
    /// Absolute address plus Y, mod 65536
    AbsoluteY,
    /// Pointer at (operand + X) mod 256 in page 0; the address is read from
    /// pointer and pointer+1, both confined to page 0
    IndirectX,
    /// Pointer at operand in page 0 gives a base address; Y is added with
    /// full 16-bit range, so the result may cross pages
    IndirectY,
}

impl AddressingMode {
    /// Operand bytes following the opcode (1 or 2)
    pub fn operand_bytes(self) -> u16 {
        match self {
            AddressingMode::Absolute | AddressingMode::AbsoluteX | AddressingMode::AbsoluteY => 2,
            _ => 1,
        }
    }
}

/// Operand source a mode resolves to. Immediate operands carry their value;
/// every other mode yields the effective address to read through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Immediate(u8),
    Address(u16),
}

impl Operand {
    /// Read the operand value through the source
    pub fn value(self, memory: &Memory) -> u8 {
        match self {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => memory.read(addr),
        }
    }
}

/// Resolve a mode to its operand source. `operand_pc` points at the first
/// operand byte, just past the opcode. Returns the source and the number of
/// operand bytes consumed, which the caller uses to advance the program
/// counter. Resolution only reads; no register or memory state changes.
pub fn resolve(
    mode: AddressingMode,
    operand_pc: u16,
    regs: &Registers,
    memory: &Memory,
) -> (Operand, u16) {
    let operand = match mode {
        AddressingMode::Immediate => Operand::Immediate(memory.read(operand_pc)),
        AddressingMode::ZeroPage => Operand::Address(memory.read(operand_pc) as u16),
        AddressingMode::ZeroPageX => {
            Operand::Address(memory.read(operand_pc).wrapping_add(regs.x) as u16)
        }
        AddressingMode::Absolute => Operand::Address(memory.read_u16(operand_pc)),
        AddressingMode::AbsoluteX => {
            Operand::Address(memory.read_u16(operand_pc).wrapping_add(regs.x as u16))
        }
        AddressingMode::AbsoluteY => {
            Operand::Address(memory.read_u16(operand_pc).wrapping_add(regs.y as u16))
        }
        AddressingMode::IndirectX => {
            let ptr = memory.read(operand_pc).wrapping_add(regs.x);
            Operand::Address(read_u16_zp(memory, ptr))
        }
        AddressingMode::IndirectY => {
            let ptr = memory.read(operand_pc);
            let base = read_u16_zp(memory, ptr);
            Operand::Address(base.wrapping_add(regs.y as u16))
        }
    };
    (operand, mode.operand_bytes())
}

/// Read a 16-bit word from zero page (wraps at page boundary), so a pointer
/// at 0xFF takes its high byte from 0x00
fn read_u16_zp(memory: &Memory, ptr: u8) -> u16 {
    let lo = memory.read(ptr as u16) as u16;
    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}
