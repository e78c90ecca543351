use docopt::Docopt;
use labyrinth::{
    cells::Direction,
    game::{GameConfig, MazeGame, MoveResult},
    grid_displays::{EndpointsDisplay, GridDisplay, LayeredDisplay, PathDisplay},
    units::{Height, Width},
};
use log::{debug, info};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
};

const USAGE: &str = "Labyrinth

Usage:
    labyrinth_driver -h | --help
    labyrinth_driver render [--width=<w> --height=<h> --seed=<s> --show-path --text-out=<path>]
    labyrinth_driver play [--width=<w> --height=<h> --seed=<s> --levels=<n>]

Commands:
    render                 Generate one maze and print it.
    play                   Walk through mazes level after level. Read one move per line from stdin:
                           w/a/s/d or up/left/down/right, h for a hint, q to quit.
                           Walking out through the start also quits.

Options:
    -h --help              Show this screen.
    --width=<w>            Maze width in cells, odd and at least 5 [default: 41].
    --height=<h>           Maze height in cells, odd and at least 5 [default: 41].
    --seed=<s>             Seed the maze generator so the same mazes come out every run.
    --show-path            Mark the route from the start to the goal.
    --text-out=<path>      Write the rendered maze to a file instead of stdout.
    --levels=<n>           Stop after completing n levels.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_render: bool,
    cmd_play: bool,
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_text_out: String,
    flag_levels: Option<u32>,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Grid(::labyrinth::grid::GridError);
        }
    }
}
use crate::errors::*;

enum Command {
    Move(Direction),
    Hint,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    debug!("{:?}", args);

    let config = GameConfig {
        width: Width(args.flag_width),
        height: Height(args.flag_height),
        seed: args.flag_seed,
    };
    let game = MazeGame::with_config(&config)
        .chain_err(|| format!("Cannot build a {}x{} maze", args.flag_width, args.flag_height))?;

    if args.cmd_render {
        render_maze(&game, &args)
    } else if args.cmd_play {
        play(game, args.flag_levels)
    } else {
        Ok(())
    }
}

fn render_maze(game: &MazeGame, maze_args: &MazeArgs) -> Result<()> {

    let text = if maze_args.flag_show_path {
        let path = game.solution().ok_or("The goal cannot be reached from the start.")?;
        let endpoints = EndpointsDisplay::new(game.start(), game.goal(), None);
        let path_display = PathDisplay::new(&path);
        let layered = LayeredDisplay::new(vec![&endpoints as &dyn GridDisplay,
                                               &path_display as &dyn GridDisplay]);
        game.grid().render(Some(&layered))
    } else {
        let endpoints = EndpointsDisplay::new(game.start(), game.goal(), None);
        game.grid().render(Some(&endpoints))
    };

    if maze_args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &maze_args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", maze_args.flag_text_out))?;
    }

    Ok(())
}

fn play(mut game: MazeGame, levels_to_play: Option<u32>) -> Result<()> {
    let stdin = io::stdin();
    let mut completed_levels = 0;

    show(&game);
    for line in stdin.lock().lines() {
        let line = line?;

        let direction = match parse_command(&line) {
            Some(Command::Move(dir)) => dir,
            Some(Command::Hint) => {
                match (game.hint(), game.distance_to_goal()) {
                    (Some(dir), Some(steps)) => println!("Go {:?}, {} steps to the goal.", dir, steps),
                    _ => println!("No route to the goal."),
                }
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                println!("Unknown move '{}'. Use w/a/s/d, h or q.", line.trim());
                continue;
            }
        };

        match game.attempt_move(direction) {
            MoveResult::Moved => show(&game),
            MoveResult::Blocked => println!("Blocked."),
            MoveResult::LevelComplete => {
                completed_levels += 1;
                info!("completed {} levels", completed_levels);
                if levels_to_play.map_or(false, |n| completed_levels >= n) {
                    println!("Completed {} levels.", completed_levels);
                    break;
                }
                show(&game);
            }
            MoveResult::OutOfBounds => break,
        }
    }

    Ok(())
}

fn show(game: &MazeGame) {
    println!("{}", game.level_title());
    print!("{}", game);
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "w" | "up" => Some(Command::Move(Direction::Up)),
        "s" | "down" => Some(Command::Move(Direction::Down)),
        "a" | "left" => Some(Command::Move(Direction::Left)),
        "d" | "right" => Some(Command::Move(Direction::Right)),
        "h" | "hint" => Some(Command::Hint),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let path = Path::new(file_name);
    let mut file = File::create(&path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
