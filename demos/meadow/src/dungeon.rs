//! Hand-drawn ASCII levels standing in for a dungeon generator.

use meadow_core::{Cell, SpriteId, Transform};
use meadow_grid::{GridOracle, GridResult, TileGrid};
use meadow_sim::World;

pub const FLOOR_SPRITE: SpriteId = SpriteId(200);
pub const WALL_SPRITE: SpriteId = SpriteId(201);

const CAVERN: [&str; 16] = [
    "################################",
    "#..........#.........#.........#",
    "#..........#.........#.........#",
    "#....##....#....##...#...###...#",
    "#....##.........##.............#",
    "#..........#.........#.........#",
    "######.#####...###...#####.#####",
    "#..........#...###...#.........#",
    "#..........#.........#.........#",
    "#...####...#....#....#...##....#",
    "#...................#..........#",
    "#..........#....#....#...##....#",
    "######.#####.........#####.#####",
    "#..............###.............#",
    "#..........#.........#.........#",
    "################################",
];

const HALLS: [&str; 12] = [
    "##########################",
    "#........................#",
    "#.######.########.######.#",
    "#.#....#.#......#.#....#.#",
    "#.#....#.#......#.#....#.#",
    "#.#....#....##....#....#.#",
    "#.#....#....##....#....#.#",
    "#.#....#.#......#.#....#.#",
    "#.##.###.###..###.###.##.#",
    "#........................#",
    "#........................#",
    "##########################",
];

/// The level for generation `n`; levels alternate.
pub fn level(n: u64) -> GridResult<TileGrid> {
    if n % 2 == 0 { TileGrid::from_rows(&CAVERN) } else { TileGrid::from_rows(&HALLS) }
}

/// Push one floor or wall tile per grid cell for the renderer.
pub fn lay_tiles(world: &mut World, grid: &TileGrid) {
    world.store.tiles.clear();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let cell = Cell::new(x, y);
            let sprite = if grid.can_pass(cell) { FLOOR_SPRITE } else { WALL_SPRITE };
            world.store.tiles.push(sprite, Transform::on_cell(cell));
        }
    }
}
