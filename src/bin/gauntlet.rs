//! Terminal gauntlet: shows two gladiators at a time and asks which one wins.
//! Run with: cargo run --bin gauntlet
//! Reads contestant images from ./img by default. Override with env: GAUNTLET_DIR,
//! GAUNTLET_EXTENSIONS, GAUNTLET_CHANCES, GAUNTLET_OUTPUT.

use gauntlet::{
    create_matchup, export_results, final_standings, load_tournament, resolve_matchup,
    GauntletConfig, Tournament,
};
use std::io::{self, BufRead, Write};

/// What the user typed at the prompt.
enum Choice {
    Pick(usize),
    Quit,
}

fn read_choice(input: &mut impl BufRead) -> io::Result<Option<Choice>> {
    let mut line = String::new();
    loop {
        print!("Winner [1/2, q to quit]: ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim() {
            "1" => return Ok(Some(Choice::Pick(0))),
            "2" => return Ok(Some(Choice::Pick(1))),
            "q" | "Q" => return Ok(Some(Choice::Quit)),
            other => println!("{other:?} is not a choice"),
        }
    }
}

fn show_matchup(
    tournament: &Tournament,
    names: &[String; 2],
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!(
        "Match {} ({} remaining)",
        tournament.history().len() + 1,
        tournament.remaining()
    );
    for (slot, name) in names.iter().enumerate() {
        let c = tournament.contestant(name)?;
        println!("  [{}] {} [{}]  {}", slot + 1, c.name, c.record(), c.image().display());
    }
    Ok(())
}

fn run(config: &GauntletConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut tournament = load_tournament(config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !tournament.is_done() {
        let names = create_matchup(&mut tournament)?.contestants.clone();
        show_matchup(&tournament, &names)?;
        let pick = match read_choice(&mut input)? {
            Some(Choice::Pick(i)) => i,
            Some(Choice::Quit) | None => {
                log::info!("Gauntlet abandoned; no results written");
                return Ok(());
            }
        };
        let outcome = resolve_matchup(&mut tournament, &names[pick])?;
        if outcome.loser_eliminated {
            println!("{} is out!", outcome.loser);
        }
    }

    if let Some(champion) = tournament.champion() {
        println!();
        println!("{} wins!", champion.name);
    }
    for row in final_standings(&tournament)? {
        println!("{:>3}. {} ({}W/{}L)", row.rank, row.name, row.wins, row.losses);
    }
    export_results(&tournament, &config.output_path)?;
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match GauntletConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };
    log::info!(
        "Loading contestants from {} ({} loss(es) to eliminate)",
        config.contestants_dir.display(),
        config.chances
    );

    if let Err(e) = run(&config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
