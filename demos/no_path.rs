use grid_bfs::PathingGrid;
use grid_util::point::Point;

// The bottom-left cell of this board is walled off by barriers, so the
// query reports that no path exists without flooding the whole grid.

fn main() {
    let board = "\
-----
--#--
-----
#-##-
-#---";
    let pathing_grid: PathingGrid = board.parse().unwrap();
    println!("{}", pathing_grid);
    match pathing_grid.find_path(Point::new(0, 0), Point::new(0, 4)).unwrap() {
        Some(path) => println!("Found: {}", path.moves_string()),
        None => println!("No path exists"),
    }
}
