//! Binary entrypoint for the mazekit CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml`
//! - `build` - assemble a maze with a chosen strategy and print the result
//! - `shared` - fetch or reset the process-wide shared maze
//!
//! The CLI only sequences calls into the library and prints what comes back;
//! all validation and error semantics live in `mazekit::maze`.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use mazekit::config::Config;
use mazekit::maze::{
    shared, DirectBuilder, Door, DoorKey, FactoryBuilder, Maze, MazeBlueprint, MazeBuilder,
    MazeLayout, Observation, PrototypeBuilder, PrototypeRegistry, Room, RoomId,
    StandardBlueprint, Theme, ThemedFactory,
};

#[derive(Parser)]
#[command(name = "mazekit")]
#[command(about = "A maze construction kit with interchangeable build strategies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config.toml
    Init,
    /// Assemble a maze and print a summary
    Build {
        /// Construction strategy
        #[arg(short, long, value_enum, default_value_t = Strategy::Direct)]
        strategy: Strategy,

        /// Theme tag (defaults to maze.default_theme from the config)
        #[arg(short, long)]
        theme: Option<String>,

        /// Layout TOML file (defaults to maze.layout_file, then the built-in demo layout)
        #[arg(short, long)]
        layout: Option<String>,

        /// Room numbers to enter after building, in order (repeatable)
        #[arg(short, long)]
        walk: Vec<RoomId>,

        /// Print the finished maze as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Fetch the shared maze instance, creating it if absent
    Shared {
        /// Replace the current instance instead of fetching it
        #[arg(long)]
        reset: bool,

        /// Theme tag (defaults to maze.default_theme from the config)
        #[arg(short, long)]
        theme: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Build components directly with a fixed theme
    Direct,
    /// Draw components from a themed factory
    Factory,
    /// Realize a blueprint through its component hooks
    Blueprint,
    /// Clone registered exemplars
    Prototype,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Factory => "factory",
            Strategy::Blueprint => "blueprint",
            Strategy::Prototype => "prototype",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        env_logger::Builder::new().parse_filters("info").init();
        Config::create_default(&cli.config).await?;
        println!("Wrote starter configuration to {}", cli.config);
        return Ok(());
    }

    let config = Config::load(&cli.config).await?;
    config.validate()?;
    init_logging(&config.logging.level, cli.verbose);

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Build {
            strategy,
            theme,
            layout,
            walk,
            json,
        } => {
            let theme = Theme::new(theme.unwrap_or_else(|| config.maze.default_theme.clone()));
            let layout = resolve_layout(layout.or_else(|| config.maze.layout_file.clone()))?;
            let mut maze = build_maze(strategy, &theme, &layout)?;
            info!(
                "assembled maze via {} strategy: {} rooms, {} doors",
                strategy.name(),
                maze.room_count(),
                maze.door_count()
            );

            for number in walk {
                for observation in maze.enter(number)? {
                    print_observation(observation);
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&maze)?);
            } else {
                println!(
                    "Maze assembled via {} strategy: {} rooms, {} doors (theme: {})",
                    strategy.name(),
                    maze.room_count(),
                    maze.door_count(),
                    theme
                );
            }
        }
        Commands::Shared { reset, theme } => {
            let theme = Theme::new(theme.unwrap_or_else(|| config.maze.default_theme.clone()));
            let handle = if reset {
                shared::reset(&theme)
            } else {
                shared::get_instance(&theme)
            };
            let rooms = handle.maze().lock().expect("shared maze lock").room_count();
            println!(
                "Shared maze {} (theme: {}, rooms: {})",
                handle.id(),
                handle.theme(),
                rooms
            );
        }
    }

    Ok(())
}

fn init_logging(level: &str, verbose: u8) {
    let filter = match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::new().parse_filters(filter).init();
}

fn resolve_layout(path: Option<String>) -> Result<MazeLayout> {
    match path {
        Some(path) => MazeLayout::load_toml(&path)
            .map_err(|e| anyhow!("Failed to load layout {}: {}", path, e)),
        None => Ok(MazeLayout::canonical()),
    }
}

fn build_maze(strategy: Strategy, theme: &Theme, layout: &MazeLayout) -> Result<Maze> {
    let maze = match strategy {
        Strategy::Direct => {
            let mut builder = DirectBuilder::new(theme.clone());
            layout.apply(&mut builder)?;
            builder.finish()?.clone()
        }
        Strategy::Factory => {
            let mut builder = FactoryBuilder::new(ThemedFactory::new(theme.clone()));
            layout.apply(&mut builder)?;
            builder.finish()?.clone()
        }
        Strategy::Blueprint => {
            StandardBlueprint::new(theme.clone(), layout.clone()).construct()?
        }
        Strategy::Prototype => {
            let mut registry = PrototypeRegistry::new();
            registry.register("room", Room::new(0, theme.clone()));
            registry.register("door", Door::new(DoorKey::new(0, 1)?, theme.clone()));
            let mut builder = PrototypeBuilder::new(registry, "room", "door");
            layout.apply(&mut builder)?;
            builder.finish()?.clone()
        }
    };
    Ok(maze)
}

fn print_observation(observation: Observation) {
    match observation {
        Observation::RoomEntered { room } => println!("Entered room {}", room),
        Observation::DoorOpened { from, to } => println!("Door {}-{} swung open", from, to),
    }
}
