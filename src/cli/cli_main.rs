use super::cli_tables::{print_ions, print_reaction, print_reagents, print_solubility};
use crate::Catalogs::Catalog;
use crate::Reactions::dispatcher::ReactionEngine;
use crate::Reactions::reaction_result::Environment;
use log::error;
use std::io::{self, BufRead, Write};

pub fn run_interactive_menu(catalog: &Catalog) {
    let engine = ReactionEngine::new(catalog);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        show_main_menu();
        let Some(choice) = get_user_input(&mut input) else {
            break;
        };
        match choice.as_str() {
            "1" => reagents_menu(catalog, &mut input),
            "2" => mix_menu(&engine, &mut input),
            "3" => print_solubility(catalog.ions()),
            "4" => print_ions(catalog.ions()),
            "5" => all_pairs_menu(&engine, &mut input),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!("\x1b[34m\n Welcome to ReactLab: what happens when you mix two bottles \n\x1b[0m");
    println!("\x1b[33m1. List reagents\x1b[0m");
    println!("\x1b[33m2. Mix two reagents\x1b[0m");
    println!("\x1b[33m3. Solubility table\x1b[0m");
    println!("\x1b[33m4. Ions and redox couples\x1b[0m");
    println!("\x1b[33m5. All reactions of a set of reagents\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    if let Err(e) = io::stdout().flush() {
        error!("cannot flush stdout: {}", e);
    }
}

/// trimmed line, None on end of input or a read error
fn get_user_input<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            error!("failed to read input: {}", e);
            None
        }
    }
}

fn reagents_menu<R: BufRead>(catalog: &Catalog, input: &mut R) {
    prompt("Filter (empty for all): ");
    let Some(query) = get_user_input(input) else {
        return;
    };
    let reagents = if query.is_empty() {
        catalog.reagents().iter().collect()
    } else {
        catalog.reagents().search(&query)
    };
    if reagents.is_empty() {
        println!("No reagent matches '{}'", query);
        return;
    }
    print_reagents(&reagents);
}

fn read_environment<R: BufRead>(input: &mut R) -> Option<Environment> {
    loop {
        prompt("Environment (neutral/acid/base, empty for neutral): ");
        let text = get_user_input(input)?;
        match text.parse::<Environment>() {
            Ok(env) => return Some(env),
            Err(e) => println!("{}", e),
        }
    }
}

fn mix_menu<R: BufRead>(engine: &ReactionEngine, input: &mut R) {
    prompt("First reagent id: ");
    let Some(id_a) = get_user_input(input) else {
        return;
    };
    prompt("Second reagent id: ");
    let Some(id_b) = get_user_input(input) else {
        return;
    };
    let Some(environment) = read_environment(input) else {
        return;
    };
    match engine.analyze(&id_a, &id_b, environment) {
        Some(result) => print_reaction(&result),
        None => println!("Unknown reagent: check the ids with menu item 1"),
    }
}

fn all_pairs_menu<R: BufRead>(engine: &ReactionEngine, input: &mut R) {
    prompt("Reagent ids separated by spaces: ");
    let Some(line) = get_user_input(input) else {
        return;
    };
    let ids: Vec<&str> = line.split_whitespace().collect();
    let Some(environment) = read_environment(input) else {
        return;
    };
    let results = engine.analyze_all_pairs(&ids, environment);
    if results.is_empty() {
        println!("Nothing reacts");
    }
    for result in &results {
        print_reaction(result);
    }
}
