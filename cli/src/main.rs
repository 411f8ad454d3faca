//! Interactive front end for a probex table
//!
//! Reads integer keys from a text file, estimates the record count from
//! the file size, loads the keys through the default sorter and table
//! configuration, then serves an interactive menu for printing, searching,
//! and statistics. All formatting lives here; the core crate only exposes
//! accessors.

use probex::{ProbeTable, TableBuilder};
use std::env;
use std::fs;
use std::io::{self, BufRead, Lines, StdinLock, Write};
use std::process::ExitCode;

/// Number of digit places per key in the input file, in the form xx,xxx
const MAX_DIGITS: u32 = 5;

/// Horizontal rule between menu interactions
const RULE: &str = "- - - - - - - - - - - - - - - - - - - - - - -";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "keys.txt".to_string());
    let records = estimate_record_count(&path, MAX_DIGITS)?;
    let keys = read_keys(&path, records)?;

    let table = TableBuilder::new().digits(MAX_DIGITS).load(&keys)?;
    menu_loop(&table)
}

/// Estimate the number of records from the file size alone.
///
/// Each record is the digit characters followed by CR LF, and the final
/// record carries no terminator, hence the trailing `+ 1`.
fn estimate_record_count(path: &str, digits: u32) -> io::Result<usize> {
    let bytes = fs::metadata(path)?.len() as usize;
    let record_bytes = digits as usize + 2;
    Ok(bytes / record_bytes + 1)
}

/// Read up to `records` whitespace-separated keys from the file.
fn read_keys(path: &str, records: usize) -> io::Result<Vec<u32>> {
    let text = fs::read_to_string(path)?;
    let mut keys = Vec::with_capacity(records);
    for token in text.split_whitespace().take(records) {
        match token.parse::<u32>() {
            Ok(key) => keys.push(key),
            Err(err) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("bad key {token:?}: {err}"),
                ))
            }
        }
    }
    Ok(keys)
}

/// Present the menu until the user quits or stdin closes.
fn menu_loop(table: &ProbeTable<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("Select an operation:");
        println!("\t(1) Print the entire hash table");
        println!("\t(2) Print the list of occupied slots in order");
        println!("\t(3) Search a key");
        println!("\t(4) Statistics");
        println!("\t(5) Quit");
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim() {
            "1" => print_table(table),
            "2" => print_list(table),
            "3" => search_key(table, &mut lines)?,
            "4" => print_statistics(table),
            "5" => return Ok(()),
            other => {
                println!();
                println!("{RULE}");
                println!("{other:?} is not an option...");
                println!("{RULE}");
                println!();
            }
        }
    }
}

/// Print every slot, occupied or not.
fn print_table(table: &ProbeTable<u32>) {
    println!();
    println!("{RULE}");
    for (index, slot) in table.slots().iter().enumerate() {
        println!("Slot {index}:");
        println!("Key: {}", slot.key());
        println!("Display key: {}", slot.display_key());
        println!("Attempts for initial insert: {}", slot.insert_attempts());
        if slot.is_occupied() {
            println!("Occupancy: Occupied");
        } else {
            println!("Occupancy: Empty");
        }
        println!("- - - - - - - -");
    }
    println!("{RULE}");
    println!();
}

/// Print the occupied slots in ascending key order.
fn print_list(table: &ProbeTable<u32>) {
    println!();
    println!("{RULE}");
    for slot in table.iter_ordered() {
        println!("Key: {}, Display key: {}", slot.key(), slot.display_key());
    }
    println!("{RULE}");
    println!();
}

/// Prompt for a key and report the search outcome.
fn search_key(table: &ProbeTable<u32>, lines: &mut Lines<StdinLock<'_>>) -> io::Result<()> {
    println!();
    println!("{RULE}");
    println!("Enter a key you would like to search for:");
    io::stdout().flush()?;
    let Some(line) = lines.next() else {
        return Ok(());
    };
    let line = line?;
    match line.trim().parse::<u32>() {
        Ok(key) => {
            let (hit, attempts) = table.search(key);
            match hit {
                Some(slot) => {
                    println!();
                    println!("Search successful for {key}:");
                    println!("Key: {}", slot.key());
                    println!("Display key: {}", slot.display_key());
                    println!("Times probed for initial insert: {}", slot.insert_attempts());
                    println!();
                    println!("Times probed for search: {attempts}");
                }
                None => {
                    println!("Search unsuccessful for {key}:");
                    println!("Number of search attempts: {attempts}");
                }
            }
        }
        Err(err) => println!("Not a key: {err}"),
    }
    println!("{RULE}");
    println!();
    Ok(())
}

/// Print occupancy numbers and the chain-length monitoring statistics.
fn print_statistics(table: &ProbeTable<u32>) {
    println!();
    println!("{RULE}");
    println!("Number of occupied slots: {}", table.occupied());
    println!("Number of slots in total: {}", table.capacity());
    println!(
        "\t{} out of the {} slots contain relevant data.",
        table.occupied(),
        table.capacity()
    );

    println!();
    println!("Monitoring of chaining (hypothetical):");
    let longest = table.longest_first_probe_chain();
    println!("\tLongest list of items if chaining were used: {longest}");
    println!();
    println!(
        "\tNumber of slots with 1 or more items if chaining were used: {}",
        table.first_probe_targets()
    );
    println!();
    for value in 0..=longest {
        println!(
            "\tNumber of slots with {value} items: {}",
            table.count_first_probe_hits(value)
        );
    }

    println!();
    println!("Monitoring of open addressing (actual):");
    println!("\tLongest list of items with open addressing: 1");
    println!();
    println!(
        "\tNumber of slots with 1 or more items with open addressing: {}",
        table.occupied()
    );
    println!();
    println!(
        "\tNumber of slots with 0 items: {}",
        table.capacity() - table.occupied()
    );
    println!("\tNumber of slots with 1 items: {}", table.occupied());
    println!("{RULE}");
    println!();
}
