use clap::{value_parser, Arg, ArgAction, Command};

use wumpus_kb::{
    config::{defaults, Config},
    knowledge::KnowledgeBase,
    procedures::explore::Explorer,
    reports::Report,
    structures::cell::Cell,
    world::World,
};

const LEGEND: &str = "* S -> Safe
* B -> Breeze
* R -> Stench
* W -> Wumpus
* P -> Pit
* U -> Unknown
* T -> Traversable (S/B/R)";

fn cli() -> Command {
    Command::new("wumpus_kb")
        .about("Explores a wumpus world, classifying cells by resolution over accumulated percepts")

        .arg(Arg::new("dimension")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("The width (and height) of the square world."))

        .arg(Arg::new("start_x")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("The x coordinate of the start cell."))

        .arg(Arg::new("start_y")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("The y coordinate of the start cell."))

        .arg(Arg::new("goal_x")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("The x coordinate of the goal cell."))

        .arg(Arg::new("goal_y")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("The y coordinate of the goal cell."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for hazard placement.
Default: {}", defaults::SEED)))

        .arg(Arg::new("quiet")
            .long("quiet")
            .short('q')
            .action(ArgAction::SetTrue)
            .help("Suppress the per-visit trace of the classification grid."))
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = cli().get_matches();

    let config = Config {
        dimension: *matches.get_one::<usize>("dimension").unwrap(),
        start: Cell::new(
            *matches.get_one::<usize>("start_x").unwrap(),
            *matches.get_one::<usize>("start_y").unwrap(),
        ),
        goal: Cell::new(
            *matches.get_one::<usize>("goal_x").unwrap(),
            *matches.get_one::<usize>("goal_y").unwrap(),
        ),
        seed: matches
            .get_one::<u64>("seed")
            .copied()
            .unwrap_or(defaults::SEED),
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {e:?}");
        std::process::exit(1);
    }

    let world = World::generate(config.dimension, config.seed);
    let mut knowledge = KnowledgeBase::new(config.dimension);
    let mut explorer = Explorer::from_config(&config);

    if !matches.get_flag("quiet") {
        explorer.set_callback_visit(Box::new(|cell, knowledge: &KnowledgeBase| {
            println!("Agent at: ({}, {})", cell.x, cell.y);
            println!("==== STATES ====");
            print!("{}", knowledge.state_string());
            println!("================");
        }));
    }

    match explorer.explore(&world, &mut knowledge) {
        Report::GoalReached => {
            println!("DONE!");
            println!();
            println!("Legend:");
            println!("{LEGEND}");
            println!("World:");
            print!("{world}");
        }

        Report::Exhausted => {
            println!("There is no solution to this world");
        }
    }
}
