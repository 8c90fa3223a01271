//! Terminal rendition of the order form.
//!
//! Stands in for the page the form would normally live on: prompts play
//! the role of the controls, stdout plays the role of the cart panel and
//! price text.

use std::io::{self, BufRead, Write};

use slicecart_core::DomainResult;
use slicecart_form::FormSurface;

/// Print a prompt and read one trimmed line. `None` on end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Which placement control a prompt answer selects, if any.
///
/// Controls are numbered 1..=4 on screen; anything else (including an
/// empty answer) selects nothing.
fn parse_placement(answer: &str) -> Option<usize> {
    match answer.parse::<usize>() {
        Ok(choice @ 1..=4) => Some(choice - 1),
        _ => None,
    }
}

/// One submission's worth of form state, collected from prompts.
pub struct TerminalForm {
    size: String,
    crust: String,
    rows: Vec<(String, Vec<bool>)>,
}

impl TerminalForm {
    /// Walk the form top to bottom: size, crust, then one placement group
    /// per topping row. Returns `None` when input ends mid-form.
    pub fn fill_from_prompts(menu: &[String]) -> io::Result<Option<TerminalForm>> {
        let Some(size) = read_line("Size (inches): ")? else {
            return Ok(None);
        };
        let Some(crust) = read_line("Crust: ")? else {
            return Ok(None);
        };

        let mut rows = Vec::with_capacity(menu.len());
        for name in menu {
            println!("{name}  [1] full  [2] right  [3] left  [4] none");
            let Some(answer) = read_line("  placement (Enter to skip): ")? else {
                return Ok(None);
            };

            let mut flags = vec![false; 4];
            match parse_placement(&answer) {
                Some(position) => flags[position] = true,
                None if !answer.is_empty() => {
                    tracing::warn!(
                        topping = %name,
                        input = %answer,
                        "unrecognized placement, leaving unselected"
                    );
                }
                None => {}
            }
            rows.push((name.clone(), flags));
        }

        Ok(Some(TerminalForm { size, crust, rows }))
    }
}

impl FormSurface for TerminalForm {
    fn size_value(&self) -> DomainResult<String> {
        Ok(self.size.clone())
    }

    fn crust_value(&self) -> DomainResult<String> {
        Ok(self.crust.clone())
    }

    fn topping_rows(&self) -> DomainResult<Vec<String>> {
        Ok(self.rows.iter().map(|(name, _)| name.clone()).collect())
    }

    fn placement_group(&self, topping_name: &str) -> Option<Vec<bool>> {
        self.rows
            .iter()
            .find(|(name, _)| name == topping_name)
            .map(|(_, flags)| flags.clone())
    }

    fn render_cart(&mut self, entries: &[String]) {
        println!();
        println!("Cart:");
        for entry in entries {
            println!("  {entry}");
        }
    }

    fn set_price_text(&mut self, price: &str) {
        println!("Total: {price}");
        println!();
    }
}
