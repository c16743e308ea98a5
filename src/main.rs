//! Little Adventure - Entry Point
//!
//! A line-based terminal front end: reads commands from stdin, prints the
//! events the game produces, and saves the player on exit.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use little_adventure::config::Config;
use little_adventure::data::load_world;
use little_adventure::items::Item;
use little_adventure::progression::xp_to_next_level;
use little_adventure::save::{load_or_create_player, save_player};
use little_adventure::{Direction, Game, GameError, GameEvent, RandomRange};

const HELP: &str = "\
Commands:
  n, e, s, w        move north/east/south/west
  attack, a         attack the monster with your weapon
  drink, d [name]   drink a healing potion
  equip [name]      switch weapons
  inventory, i      list what you carry
  quests, q         list your quests
  look, l           describe this place
  stats             show hit points, gold and level
  save              save now
  quit              save and leave";

/// Parsed player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Move(Direction),
    Attack,
    Drink(Option<String>),
    Equip(Option<String>),
    Inventory,
    Quests,
    Look,
    Stats,
    Save,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, Some(rest.trim().to_string()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    if let Ok(direction) = verb.parse::<Direction>() {
        return Some(Command::Move(direction));
    }

    match verb.to_ascii_lowercase().as_str() {
        "go" | "move" => rest.and_then(|r| r.parse().ok()).map(Command::Move),
        "attack" | "a" => Some(Command::Attack),
        "drink" | "d" | "potion" => Some(Command::Drink(rest)),
        "equip" | "wield" => Some(Command::Equip(rest)),
        "inventory" | "inv" | "i" => Some(Command::Inventory),
        "quests" | "q" => Some(Command::Quests),
        "look" | "l" => Some(Command::Look),
        "stats" => Some(Command::Stats),
        "save" => Some(Command::Save),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

fn main() -> Result<()> {
    // Log to a file so log lines do not mix with game text
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("little-adventure.log")
        .context("opening log file")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Little Adventure v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_save_path(PathBuf::from(path));
    }
    log::debug!("Using {:?}", config);

    let world = load_world(&config.data_dir);
    let player = load_or_create_player(&config.save_path, &world);
    let mut game = Game::new(&world, player, StdRng::from_entropy());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_events(&mut out, &game.start()?)?;
    writeln!(out, "(type 'help' for commands)")?;

    let result = run(&mut game, &mut out, &config.save_path);

    save_player(game.player(), &config.save_path)
        .with_context(|| format!("saving to {}", config.save_path.display()))?;
    writeln!(out, "Game saved.")?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }
    log::info!("Little Adventure shut down cleanly");
    result
}

/// Read and execute commands until quit or end of input
fn run<R: RandomRange>(game: &mut Game<'_, R>, out: &mut impl Write, save_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(out, "I don't understand '{}'.", line.trim())?;
            continue;
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Inventory => print_inventory(game, out)?,
            Command::Quests => print_quests(game, out)?,
            Command::Stats => print_stats(game, out)?,
            Command::Look => print_location(game, out)?,
            Command::Save => {
                match save_player(game.player(), save_path) {
                    Ok(()) => writeln!(out, "Game saved.")?,
                    Err(e) => writeln!(out, "Could not save: {}", e)?,
                }
            }
            action => match perform(game, action) {
                Ok(events) => print_events(out, &events)?,
                Err(e) => writeln!(out, "You can't do that: {}.", e)?,
            },
        }
    }
}

/// Commands that change game state
fn perform<R: RandomRange>(game: &mut Game<'_, R>, command: Command) -> Result<Vec<GameEvent>, GameError> {
    match command {
        Command::Move(direction) => game.move_towards(direction),
        Command::Attack => game.attack(),
        Command::Drink(name) => {
            let potions = game.potions();
            let potion = match name {
                Some(name) => held_by_name(game, &potions, &name),
                None => potions.into_iter().next(),
            };
            match potion {
                Some(p) => game.drink_potion(p.id),
                None => Err(GameError::NoPotion),
            }
        }
        Command::Equip(name) => {
            let weapons = game.weapons();
            let current = game.player().equipped_weapon;
            let weapon = match name {
                Some(name) => held_by_name(game, &weapons, &name),
                // Cycle to the next weapon carried
                None => {
                    let at = weapons.iter().position(|w| Some(w.id) == current);
                    let next = at.map(|i| (i + 1) % weapons.len()).unwrap_or(0);
                    weapons.get(next).copied()
                }
            };
            match weapon {
                Some(w) => game.equip_weapon(w.id),
                None => Err(GameError::NoWeapon),
            }
        }
        _ => Ok(Vec::new()),
    }
}

/// Look an item up by name, keeping it only if it is among `held`
fn held_by_name<'w, R: RandomRange>(game: &Game<'w, R>, held: &[&'w Item], name: &str) -> Option<&'w Item> {
    game.world()
        .find_item_by_name(name)
        .filter(|item| held.iter().any(|h| h.id == item.id))
}

fn print_events(out: &mut impl Write, events: &[GameEvent]) -> io::Result<()> {
    for event in events {
        writeln!(out, "{}", event)?;
    }
    Ok(())
}

fn print_location<R: RandomRange>(game: &Game<'_, R>, out: &mut impl Write) -> Result<()> {
    let location = game.current_location()?;
    writeln!(out, "{}\n{}", location.name, location.description)?;
    let exits: Vec<String> = location
        .available_directions()
        .iter()
        .map(|d| d.to_string())
        .collect();
    writeln!(out, "Exits: {}", exits.join(", "))?;
    if let Some(monster) = game.current_monster() {
        writeln!(
            out,
            "A {} is here ({}/{} HP).",
            monster.name, monster.health.current, monster.health.max
        )?;
    }
    Ok(())
}

fn print_inventory<R: RandomRange>(game: &Game<'_, R>, out: &mut impl Write) -> io::Result<()> {
    let player = game.player();
    let world = game.world();
    let mut any = false;
    for line in player.inventory.visible_lines() {
        if let Some(item) = world.item(line.item_id) {
            let marker = if player.equipped_weapon == Some(item.id) { " (equipped)" } else { "" };
            writeln!(out, "{:>3} x {}{}", line.quantity, item.name_for_quantity(line.quantity), marker)?;
            any = true;
        }
    }
    if !any {
        writeln!(out, "You carry nothing.")?;
    }
    Ok(())
}

fn print_quests<R: RandomRange>(game: &Game<'_, R>, out: &mut impl Write) -> io::Result<()> {
    let entries = game.player().quests.entries();
    if entries.is_empty() {
        return writeln!(out, "You have no quests.");
    }
    for pq in entries {
        if let Some(quest) = game.world().quest(pq.quest_id) {
            let status = if pq.is_completed { "done" } else { "open" };
            writeln!(out, "[{}] {}", status, quest.name)?;
        }
    }
    Ok(())
}

fn print_stats<R: RandomRange>(game: &Game<'_, R>, out: &mut impl Write) -> io::Result<()> {
    let player = game.player();
    writeln!(out, "Hit points: {}/{}", player.health.current, player.health.max)?;
    writeln!(out, "Gold: {}", player.gold)?;
    writeln!(
        out,
        "Level {} ({} XP, {} to next)",
        player.level(),
        player.experience,
        xp_to_next_level(player.experience)
    )
}
