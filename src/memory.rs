/// Flat 64KB address space. Every 16-bit address is valid, so reads and
/// writes are total; there is no notion of code vs data.
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Create a zero-initialized 64KB memory
    pub fn new() -> Self {
        Self {
            data: vec![0; 0x10000],
        }
    }

    /// Read a byte
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Write a byte
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Read a 16-bit word (little-endian); the high byte comes from addr+1,
    /// wrapping at the top of the address space
    pub fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a 16-bit word (little-endian)
    pub fn write_u16(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copy a byte slice into memory starting at origin, wrapping at the top
    /// of the address space. Used to pre-load programs and fixture data.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
