use grid_2d::Coord;

/// Largest coordinate magnitude representable by a packed hash.
pub const MAX_COORD: i32 = 32767;

/// Packs a coordinate into a 32-bit key, with x in the high 16 bits and y in
/// the low 16 bits. Returns `None` if either component lies outside
/// `-MAX_COORD..=MAX_COORD`.
pub fn to_hash(coord: Coord) -> Option<u32> {
    if coord.x < -MAX_COORD || coord.x > MAX_COORD || coord.y < -MAX_COORD || coord.y > MAX_COORD {
        return None;
    }
    let x = (coord.x + MAX_COORD) as u32;
    let y = (coord.y + MAX_COORD) as u32;
    Some((x << 16) | y)
}

/// Inverse of `to_hash`.
pub fn from_hash(hash: u32) -> Coord {
    let x = (hash >> 16) as i32 - MAX_COORD;
    let y = (hash & 0xffff) as i32 - MAX_COORD;
    Coord::new(x, y)
}
