use log::{error, info, warn};
use std::env;
use std::process;
use tilegraph::config::Config;
use tilegraph::{load_map, Grid, Tile};

fn main() {
    // The log level comes from config, so report how it loaded once the logger is up
    let (config, source) = Config::read();
    let log_env = env_logger::Env::default().default_filter_or(config.logging.level.as_str());
    env_logger::Builder::from_env(log_env).init();
    source.log();

    let args: Vec<String> = env::args().collect();
    let map_path = args.get(1).cloned().unwrap_or_else(|| config.map.path.clone());

    info!("Loading map from {}", map_path);
    let grid = match load_map(&map_path) {
        Ok(grid) => grid,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    print_summary(&grid);

    if config.display.render_ascii {
        match grid.render_ascii() {
            Some(text) => println!("\n{}", text),
            None => warn!("Grid bounding box too large to render"),
        }
    }
}

fn describe(tile: Option<&Tile>) -> String {
    tile.map(|t| t.to_string()).unwrap_or_else(|| "none".to_string())
}

fn print_summary(grid: &Grid) {
    let start = grid.start_tile();
    let goal = grid.goal_tile();

    println!("=== Map ===");
    println!("Tiles: {}", grid.len());
    println!("Start: {}", describe(start));
    println!("Goal:  {}", describe(goal));

    if let Some(start) = start {
        let neighbours: Vec<String> = grid
            .walkable_neighbours(start)
            .iter()
            .map(|t| format!("({},{})", t.x, t.y))
            .collect();
        println!("Walkable from start: [{}]", neighbours.join(", "));
    }

    if let (Some(start), Some(goal)) = (start, goal) {
        println!("Manhattan distance start -> goal: {}", start.distance(goal));
    }
}
