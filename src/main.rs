use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use life_gif::config::{Cli, MENU_PROMPT, PatternChoice, parse_menu_choice, parse_yes_no};
use life_gif::{AsciiRenderer, GifRenderer, Renderer, viewer};

/// Answer read from the terminal; `None` once input is closed
fn prompt(question: &str) -> Result<Option<String>> {
    print!("{question} ");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

/// Ask until a listed number is entered
fn choose_from_menu() -> Result<Option<PatternChoice>> {
    loop {
        let Some(answer) = prompt(MENU_PROMPT)? else {
            return Ok(None);
        };
        match parse_menu_choice(&answer) {
            Some(choice) => return Ok(Some(choice)),
            None => println!("Error: {} is not in the range 1<=x<=2.", answer.trim()),
        }
    }
}

fn confirm(question: &str) -> Result<bool> {
    loop {
        let Some(answer) = prompt(question)? else {
            return Ok(false);
        };
        match parse_yes_no(&answer) {
            Some(yes) => return Ok(yes),
            None => println!("Error: invalid value {:?}, answer y or n.", answer.trim()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = cli.needs_menu();
    let menu_choice = if interactive {
        match choose_from_menu()? {
            Some(choice) => Some(choice),
            None => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    } else {
        None
    };

    let config = cli.into_run_config(menu_choice)?;
    let sim = config.simulation;
    let frames = sim
        .run(&config.seed)
        .with_context(|| format!("cannot run {} steps on a {}x{} board", sim.steps, sim.height, sim.width))?;

    if config.ascii {
        let stdout = io::stdout();
        AsciiRenderer.render(&frames, &mut stdout.lock())?;
        return Ok(());
    }

    GifRenderer::new(config.render)
        .render_to_path(&frames, &config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    println!(
        "Done! {} frames ({} algorithm) written to {}",
        frames.len(),
        sim.algorithm.name(),
        config.output.display()
    );
    if let Some(period) = frames.period() {
        println!("Pattern repeats every {period} steps");
    }

    let open = config.open || (interactive && confirm("Open gif? (y/n)")?);
    if open {
        if let Err(error) = viewer::open(&config.output) {
            eprintln!("Browser not available ({error}); open {} manually", config.output.display());
        }
    }
    Ok(())
}
