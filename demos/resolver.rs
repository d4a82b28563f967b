use std::{env, io, process};

use iri_parts::Iri;

fn main() {
    let Some(base) = env::args().nth(1) else {
        eprintln!("usage: resolver <base>");
        process::exit(2);
    };
    let base = Iri::parse(base);

    for line in io::stdin().lines() {
        let line = line.expect("failed to read line");
        println!("{}", base.resolve(&line));
    }
}
