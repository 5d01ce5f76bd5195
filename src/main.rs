use std::{env, fs::read_to_string, process::exit, time::Instant};

use minilang::{analyze, display_error};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <source-file>", args[0]);
        exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let analysis = match analyze(&source, Some(String::from(file_name))) {
        Ok(analysis) => analysis,
        Err(error) => {
            display_error(&error, &source);
            exit(1);
        }
    };

    println!("Analysed in {:?}", start.elapsed());

    if analysis.is_clean() {
        println!("No issues found");
    } else {
        for message in analysis.messages() {
            println!("{}", message);
        }
        exit(1);
    }
}
