use bitflags::bitflags;

/// Address execution starts from after power-on or reset. The hardware would
/// fetch this from the reset vector at $FFFC; vector handling is out of scope
/// here, so the core starts at a fixed address instead.
pub const RESET_ADDR: u16 = 0x8000;

bitflags! {
    /// Processor status register (P)
    /// Bit 7: N (Negative)
    /// Bit 6: V (Overflow)
    /// Bit 5: - (unused)
    /// Bit 4: B (Break)
    /// Bit 3: D (Decimal mode)
    /// Bit 2: I (Interrupt disable)
    /// Bit 1: Z (Zero)
    /// Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// 6502 register file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    /// Status register
    pub status: Status,
}

impl Registers {
    /// Power-on register state: A/X/Y zero, flags clear, PC at the reset
    /// address. The stack pointer starts at 0xFD as on real hardware.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: RESET_ADDR,
            status: Status::empty(),
        }
    }

    /// Set the Zero and Negative flags from a result byte. Z mirrors
    /// `value == 0`, N mirrors bit 7. No other flag is touched.
    pub fn set_zero_and_negative(&mut self, value: u8) {
        self.status.set(Status::ZERO, value == 0);
        self.status.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
