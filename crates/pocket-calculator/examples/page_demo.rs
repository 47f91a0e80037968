//! Mock-DOM Page Demo
//!
//! Clicks through a few calculations on the mock page and prints what the
//! DOM shows after each click, then runs the shared scenario suite.
//!
//! Run with: cargo run --example page_demo

use pocket_calculator::driver::run_full_specification;
use pocket_calculator::web::DomDriver;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║     Pocket Calculator - Mock DOM Page Demo   ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();

    let mut page = DomDriver::new();

    for sequence in [
        &["one", "two", "add", "three", "equals"][..],
        &["clear", "five", "divide", "two", "equals"],
        &["clear", "nine", "nine", "nine", "nine", "nine", "multiply", "nine", "nine", "nine", "nine", "nine", "equals"],
    ] {
        for id in sequence {
            match page.click(id) {
                Ok(_) => println!(
                    "   click {id:<12} display {:<14} class {:<22} clear {:<2} active {:?}",
                    page.display_text(),
                    page.display_class(),
                    page.clear_button_text(),
                    page.highlighted_buttons(),
                ),
                Err(e) => println!("   click {id:<12} error: {e}"),
            }
        }
        println!();
    }

    println!("⌨️  Keyboard: 7 * 6 Enter");
    for key in ["7", "*", "6", "Enter", "Tab"] {
        let handled = page.key_down(key);
        println!("   key {key:<6} handled {handled:<5} display {}", page.display_text());
    }
    println!();

    println!("📜 {} DOM events recorded", page.dom().event_history().len());

    let mut fresh = DomDriver::new();
    match run_full_specification(&mut fresh) {
        Ok(()) => println!("✅ Full scenario suite passed on the page driver"),
        Err(e) => println!("❌ Scenario suite failed: {e}"),
    }
}
