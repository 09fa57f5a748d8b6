use crate::constants::CHUNK_WIDTH;
use crate::types::{RegionCoord, WorldCoord};
use glam::{IVec2, IVec3};

/// Linear index of block `(x, y, z)` in a chunk of height `H`.
///
/// Storage is y-fastest, then x, then z: `y + x*H + z*H*16`.
#[inline]
pub fn block_index<const H: usize>(x: usize, y: usize, z: usize) -> usize {
    assert!(
        x < CHUNK_WIDTH && y < H && z < CHUNK_WIDTH,
        "block coordinate ({x}, {y}, {z}) outside 16x{H}x16 chunk"
    );
    y + x * H + z * H * CHUNK_WIDTH
}

/// Inverse of [`block_index`].
#[inline]
pub fn block_coord<const H: usize>(index: usize) -> (usize, usize, usize) {
    (
        (index / H) % CHUNK_WIDTH,
        index % H,
        index / (H * CHUNK_WIDTH),
    )
}

/// Linear index of surface point `(x, z)`: `x + z*16`.
#[inline]
pub fn surface_index(x: usize, z: usize) -> usize {
    assert!(
        x < CHUNK_WIDTH && z < CHUNK_WIDTH,
        "surface coordinate ({x}, {z}) outside 16x16 chunk"
    );
    x + z * CHUNK_WIDTH
}

/// Convert a world-space block coordinate to its containing region coordinate.
pub fn world_to_region(world: WorldCoord) -> RegionCoord {
    let cw = CHUNK_WIDTH as i32;
    IVec2::new(world.x.div_euclid(cw), world.z.div_euclid(cw))
}

/// Convert a world-space block coordinate to its column-local offset.
/// `y` passes through unchanged; it is never split across chunks.
pub fn world_to_local(world: WorldCoord) -> IVec3 {
    let cw = CHUNK_WIDTH as i32;
    IVec3::new(world.x.rem_euclid(cw), world.y, world.z.rem_euclid(cw))
}

/// Convert a region coordinate and local offset back to world-space.
pub fn region_local_to_world(region: RegionCoord, local: IVec3) -> WorldCoord {
    let cw = CHUNK_WIDTH as i32;
    IVec3::new(region.x * cw + local.x, local.y, region.y * cw + local.z)
}
