use cidr_subtract::subtract_to_strings;
use colored::Colorize;
use std::error::Error;

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {prog} [--json] <cidr-a> <cidr-b>");
    eprintln!("Removes <cidr-b> from <cidr-a> and prints the remaining CIDR blocks.");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().collect();
    let json_output = args.iter().skip(1).any(|a| a == "--json");
    let cidrs: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--json").collect();
    if cidrs.len() != 2 {
        usage(&args[0]);
    }

    match subtract_to_strings(cidrs[0], cidrs[1]) {
        Ok(result) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::json!({ "success": true, "result": result })
                );
            } else if result.is_empty() {
                println!(
                    "#{}# {} fully covers {}, nothing remains",
                    "NOTE".on_red(),
                    cidrs[1],
                    cidrs[0]
                );
            } else {
                for block in &result {
                    println!("{block}");
                }
            }
            log::info!("#End main() {} blocks", result.len());
        }
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::json!({ "success": false, "error": e.to_string() })
                );
            } else {
                eprintln!("{} {e}", "failed".on_red());
            }
            log::warn!("subtract failed: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}
