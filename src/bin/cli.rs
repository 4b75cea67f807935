#![cfg(not(tarpaulin_include))]

use sheet_intake::{MemorySurface, SubmitDecision, UploadIntake, candidates};
use std::io::{self, Write};
use std::time::Instant;

fn display(intake: &UploadIntake<MemorySurface>) {
    let surface = intake.surface();
    println!(
        "  dropbox [{:?}] {}",
        intake.state(),
        surface.label.as_deref().unwrap_or("Drag a .csv or .xlsx file here")
    );
    if surface.field.is_empty() {
        println!("  fileInput: (empty)");
    } else {
        println!("  fileInput: {}", surface.field_names().join(", "));
    }
}

fn print_help() {
    println!("Commands:");
    println!("  q: Quit");
    println!("  enter / over / leave: Drag lifecycle events on the drop box");
    println!("  drop <name>...: Drop files onto the drop box");
    println!("  browse <name>...: Pick files through the native dialog");
    println!("  click: Press the browse button");
    println!("  submit: Submit the upload form");
    println!("  show: Print the page state");
    println!("  json: Print the page state as JSON");
}

/// Interactive harness for the upload widget
///
/// Each command is one page event. Notifications the page would raise as
/// alerts are printed as `! message`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut intake = UploadIntake::new(MemorySurface::new());
    let mut status = String::from("ok");
    let mut start_time = Instant::now();

    loop {
        display(&intake);
        for message in intake.surface_mut().take_notifications() {
            println!("! {}", message);
        }

        print!("[{:.1}] ({}) > ", start_time.elapsed().as_secs_f64(), status);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        start_time = Instant::now();

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            status = String::from("invalid command");
            continue;
        };
        let names: Vec<&str> = words.collect();

        status = match command {
            "q" => break,
            "help" => {
                print_help();
                String::from("ok")
            }
            "enter" => {
                intake.on_drag_enter();
                String::from("ok")
            }
            "over" => {
                intake.on_drag_over();
                String::from("ok")
            }
            "leave" => {
                intake.on_drag_leave();
                String::from("ok")
            }
            "drop" => {
                let report = intake.on_drop(candidates(names))?;
                if report.installed {
                    format!("{} accepted", report.accepted.len())
                } else {
                    String::from("nothing accepted")
                }
            }
            "browse" => {
                let picked = candidates(names);
                intake.surface_mut().browser_selects(picked.clone());
                intake.on_change(&picked)?;
                String::from("ok")
            }
            "click" => {
                intake.on_browse_click()?;
                String::from("chooser opened")
            }
            "submit" => match intake.on_submit()? {
                SubmitDecision::Proceed => String::from("submitted"),
                SubmitDecision::Blocked => String::from("blocked"),
            },
            "show" => String::from("ok"),
            "json" => {
                println!("{}", serde_json::to_string_pretty(intake.surface())?);
                String::from("ok")
            }
            _ => String::from("invalid command"),
        };
    }

    Ok(())
}
