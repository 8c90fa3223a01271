mod terminal;

use slicecart_form::OrderController;

use crate::terminal::TerminalForm;

const DEFAULT_TOPPINGS: [&str; 6] = [
    "Mushrooms",
    "Pepperoni",
    "Onions",
    "Olives",
    "Green Peppers",
    "Sausage",
];

/// Topping rows shown on the form, from `SLICECART_TOPPINGS`
/// (comma-separated) or the built-in menu.
fn topping_menu() -> Vec<String> {
    let built_in = || DEFAULT_TOPPINGS.iter().map(|name| name.to_string()).collect();

    match std::env::var("SLICECART_TOPPINGS") {
        Ok(raw) => {
            let menu: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();

            if menu.is_empty() {
                tracing::warn!("SLICECART_TOPPINGS is set but empty; using the built-in menu");
                built_in()
            } else {
                menu
            }
        }
        Err(_) => built_in(),
    }
}

fn main() -> anyhow::Result<()> {
    slicecart_observability::init();

    let menu = topping_menu();
    let mut controller = OrderController::new();

    println!("SliceCart: build a pizza, add it to the cart.");

    loop {
        match terminal::read_line("Add a pizza to the cart? [Y/n] ")? {
            None => break,
            Some(answer)
                if answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no") =>
            {
                break;
            }
            Some(_) => {}
        }

        let Some(mut form) = TerminalForm::fill_from_prompts(&menu)? else {
            break;
        };

        if let Err(err) = controller.handle_submit(&mut form) {
            tracing::error!(error = %err, "submission aborted");
        }
    }

    let cart = controller.cart();
    println!("Ordered {} pizza(s), total {}.", cart.len(), cart.formatted_price());
    Ok(())
}
