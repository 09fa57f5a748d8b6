use glam::{IVec2, IVec3};

use crate::bits::{get_bits, set_bits};
use crate::constants::{BLOCK_DATA_BITS, BLOCK_LIGHT_BITS, BLOCK_TYPE_BITS};

/// Chunk position in region units (each unit = 16 blocks). `x` is the
/// region x, `y` holds the region z.
pub type RegionCoord = IVec2;

/// World coordinate in block-space.
pub type WorldCoord = IVec3;

/// One voxel as stored on disk: a single little-endian `u32`.
///
/// Bit layout:
///   [0:9]    block-type id
///   [10:13]  light level
///   [14:31]  block-specific state
///
/// Fields are only touched through the bit-range helpers so that an update
/// never spills into a neighbouring field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Block(pub u32);

impl Block {
    pub const AIR: Block = Block(0);

    pub fn block_type(self) -> u32 {
        get_bits(self.0, BLOCK_TYPE_BITS.0, BLOCK_TYPE_BITS.1)
    }

    pub fn light(self) -> u32 {
        get_bits(self.0, BLOCK_LIGHT_BITS.0, BLOCK_LIGHT_BITS.1)
    }

    pub fn data(self) -> u32 {
        get_bits(self.0, BLOCK_DATA_BITS.0, BLOCK_DATA_BITS.1)
    }

    /// Returns a copy with the block-type id replaced. Extra high bits of
    /// `id` are dropped.
    pub fn with_block_type(self, id: u32) -> Block {
        Block(set_bits(self.0, BLOCK_TYPE_BITS.0, BLOCK_TYPE_BITS.1, id))
    }

    pub fn with_light(self, light: u32) -> Block {
        Block(set_bits(self.0, BLOCK_LIGHT_BITS.0, BLOCK_LIGHT_BITS.1, light))
    }

    pub fn with_data(self, data: u32) -> Block {
        Block(set_bits(self.0, BLOCK_DATA_BITS.0, BLOCK_DATA_BITS.1, data))
    }
}

/// Per-column surface record. 4 bytes, byte-wise so endianness never applies.
///
/// `temp_humidity` holds temperature in the low nibble and humidity in the
/// high nibble. The two trailing bytes are nominally unused but carry
/// non-zero values in real Layout B worlds and are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SurfacePoint {
    pub maxheight: u8,
    pub temp_humidity: u8,
    pub unused1: u8,
    pub unused2: u8,
}

impl SurfacePoint {
    pub fn temperature(self) -> u8 {
        self.temp_humidity & 0x0F
    }

    pub fn humidity(self) -> u8 {
        self.temp_humidity >> 4
    }

    pub fn with_temperature(mut self, temperature: u8) -> SurfacePoint {
        self.temp_humidity = (self.temp_humidity & 0xF0) | (temperature & 0x0F);
        self
    }

    pub fn with_humidity(mut self, humidity: u8) -> SurfacePoint {
        self.temp_humidity = (self.temp_humidity & 0x0F) | ((humidity & 0x0F) << 4);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_field_decode() {
        let block = Block(0x0004_0007);
        assert_eq!(block.block_type(), 7);
        assert_eq!(block.light(), 0);
        assert_eq!(block.data(), 0x0004_0000 >> 14);
    }

    #[test]
    fn test_block_field_updates_are_isolated() {
        let block = Block::AIR.with_block_type(8).with_light(15).with_data(0x3FFFF);
        assert_eq!(block.block_type(), 8);
        assert_eq!(block.light(), 15);
        assert_eq!(block.data(), 0x3FFFF);

        // Oversized light value must not touch the data field
        let relit = block.with_light(0xFF);
        assert_eq!(relit.light(), 15);
        assert_eq!(relit.data(), 0x3FFFF);
        assert_eq!(relit.block_type(), 8);

        let retyped = block.with_block_type(0x7FF);
        assert_eq!(retyped.block_type(), 0x3FF);
        assert_eq!(retyped.light(), 15);
    }

    #[test]
    fn test_surface_point_nibbles() {
        let point = SurfacePoint {
            maxheight: 70,
            temp_humidity: 0xA3,
            unused1: 65,
            unused2: 0,
        };
        assert_eq!(point.temperature(), 3);
        assert_eq!(point.humidity(), 10);

        let updated = point.with_temperature(12).with_humidity(1);
        assert_eq!(updated.temp_humidity, 0x1C);
        assert_eq!(updated.unused1, 65);
        assert_eq!(updated.maxheight, 70);
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(std::mem::size_of::<Block>(), 4);
        assert_eq!(std::mem::size_of::<SurfacePoint>(), 4);
    }
}
