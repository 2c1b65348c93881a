//! Memory bus interface and a flat 64 KiB implementation.

/// Memory bus interface.
///
/// Components access memory through this trait. Addresses are a full
/// 16 bits, exactly the size of the address space, so out-of-range
/// access cannot be expressed.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// Flat 64 KiB RAM with no banking or protection.
///
/// This is the whole address space of a 16-bit machine: every address a
/// CPU can form maps to exactly one byte. A host loads a program with
/// [`SimpleBus::load`] and hands the bus to the CPU one step at a time;
/// the bus has a single owner and no interior mutability.
pub struct SimpleBus {
    ram: [u8; 0x1_0000],
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleBus {
    /// Create a bus with all memory zeroed.
    #[must_use]
    pub fn new() -> Self {
        Self { ram: [0; 0x1_0000] }
    }

    /// Copy `bytes` into memory starting at `origin`.
    ///
    /// The write cursor is a `u16` and wraps at the top of the address
    /// space; supplying more than 64 KiB of data is a caller contract
    /// violation (later bytes overwrite earlier ones), not a fault.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        let mut addr = origin;
        for &b in bytes {
            self.ram[addr as usize] = b;
            addr = addr.wrapping_add(1);
        }
    }

    /// Read a byte without going through the `Bus` trait.
    ///
    /// Convenience for hosts and tests that only hold a shared reference.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    /// Format `rows` rows of 16 bytes starting at `start` as a hex
    /// listing, one address-prefixed row per line.
    ///
    /// Diagnostic output for hosts; not part of the CPU contract.
    #[must_use]
    pub fn hex_dump(&self, start: u16, rows: usize) -> String {
        use core::fmt::Write;

        let mut out = String::new();
        let mut addr = start;
        for _ in 0..rows {
            let _ = write!(out, "{addr:04X}:");
            for i in 0..16u16 {
                let sep = if i == 8 { "  " } else { " " };
                let byte = self.ram[addr.wrapping_add(i) as usize];
                let _ = write!(out, "{sep}{byte:02X}");
            }
            out.push('\n');
            addr = addr.wrapping_add(16);
        }
        out
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_places_bytes_at_origin() {
        let mut bus = SimpleBus::new();
        bus.load(0x8000, &[0x11, 0x22, 0x33]);

        assert_eq!(bus.peek(0x8000), 0x11);
        assert_eq!(bus.peek(0x8001), 0x22);
        assert_eq!(bus.peek(0x8002), 0x33);
        assert_eq!(bus.peek(0x8003), 0x00);
    }

    #[test]
    fn load_wraps_at_top_of_address_space() {
        let mut bus = SimpleBus::new();
        bus.load(0xFFFF, &[0xAA, 0xBB]);

        assert_eq!(bus.peek(0xFFFF), 0xAA);
        assert_eq!(bus.peek(0x0000), 0xBB);
    }

    #[test]
    fn read_write_round_trip() {
        let mut bus = SimpleBus::new();
        bus.write(0x1234, 0x5A);
        assert_eq!(bus.read(0x1234), 0x5A);
    }

    #[test]
    fn hex_dump_formats_sixteen_bytes_per_row() {
        let mut bus = SimpleBus::new();
        bus.load(0x0000, &[0x3E, 0x11, 0xEA, 0x0A, 0x00, 0x10]);

        let dump = bus.hex_dump(0x0000, 1);
        assert_eq!(
            dump,
            "0000: 3E 11 EA 0A 00 10 00 00  00 00 00 00 00 00 00 00\n"
        );
    }

    #[test]
    fn hex_dump_advances_address_per_row() {
        let bus = SimpleBus::new();
        let dump = bus.hex_dump(0x0100, 2);
        let mut lines = dump.lines();
        assert!(lines.next().unwrap().starts_with("0100:"));
        assert!(lines.next().unwrap().starts_with("0110:"));
    }
}
