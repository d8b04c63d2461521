use crate::math::{Point, Vector};

/// Discretizes the boundary of the box with the given half-extents, centered at the origin.
///
/// Vertex `i` lies on the positive side of the `x`, `y`, `z` axes if the bit `0`, `1`, `2` of `i`
/// is set. The 12 faces are wound counter-clockwise when seen from outside.
pub fn cuboid(half_extents: &Vector) -> (Vec<Point>, Vec<[u32; 3]>) {
    let vertices = (0..8)
        .map(|i| {
            let sign = |bit: u32| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
            Point::new(
                half_extents.x * sign(0),
                half_extents.y * sign(1),
                half_extents.z * sign(2),
            )
        })
        .collect();

    let indices = vec![
        // -z
        [0, 2, 1],
        [1, 2, 3],
        // +z
        [4, 5, 6],
        [5, 7, 6],
        // -y
        [0, 1, 4],
        [1, 5, 4],
        // +y
        [2, 6, 3],
        [3, 6, 7],
        // -x
        [0, 4, 2],
        [2, 4, 6],
        // +x
        [1, 3, 5],
        [3, 7, 5],
    ];

    (vertices, indices)
}
