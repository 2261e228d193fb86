/// Bounded little-endian cursor over an immutable byte slice.
///
/// Reads past the end return `None` and leave the position unchanged.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move to an absolute byte offset.
	pub fn seek(&mut self, pos: usize) -> Option<()> {
		if pos > self.bytes.len() {
			return None;
		}
		self.pos = pos;
		Some(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Option<&'a [u8]> {
		if n > self.remaining() {
			return None;
		}

		let start = self.pos;
		self.pos += n;
		Some(&self.bytes[start..self.pos])
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Option<u8> {
		self.read_exact(1).map(|raw| raw[0])
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Option<u16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Some(u16::from_le_bytes(buf))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Option<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Some(u32::from_le_bytes(buf))
	}

	/// Read a little-endian `u64`.
	pub fn read_u64_le(&mut self) -> Option<u64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Some(u64::from_le_bytes(buf))
	}
}
