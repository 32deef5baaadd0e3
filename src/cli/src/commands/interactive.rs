//! Interactive session: the whole page, one form at a time.

use crate::home::Home;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &str =
    "Choose a card: [1] Create a New User  [2] Get User Details  [3] Transfer Tokens  [q] Quit";

/// Runs the interactive session until the user quits or input ends.
///
/// Field prompts show the current value; an empty line keeps it.
pub async fn run<R: BufRead, W: Write>(
    home: &mut Home,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        writeln!(output, "{}", home.render())?;
        writeln!(output, "{}", MENU)?;

        let Some(choice) = read_line(&mut input, &mut output, "> ")? else {
            break;
        };
        debug!("Interactive choice {:?}", choice);

        match choice.as_str() {
            "1" => {
                home.create_user.submit().await;
            }
            "2" => {
                let current = home.user_details.user().user_id.to_string();
                let Some(user_id) = read_field(&mut input, &mut output, "User ID", &current)? else {
                    break;
                };
                home.user_details.set_user_id(user_id);
                home.user_details.submit().await;
            }
            "3" => {
                let current = home.transfer_tokens.transfer().clone();

                let Some(from) =
                    read_field(&mut input, &mut output, "From User with ID", &current.user_id_from)?
                else {
                    break;
                };
                home.transfer_tokens.set_user_id_from(from);

                let Some(to) =
                    read_field(&mut input, &mut output, "To User with ID", &current.user_id_to)?
                else {
                    break;
                };
                home.transfer_tokens.set_user_id_to(to);

                let Some(amount) = read_field(&mut input, &mut output, "Amount", &current.amount)?
                else {
                    break;
                };
                home.transfer_tokens.set_amount(amount);

                home.transfer_tokens.submit().await;
            }
            "q" | "quit" | "exit" => break,
            "" => {}
            other => writeln!(output, "Unknown choice: {}", other)?,
        }
    }

    Ok(())
}

/// Prompts and reads one trimmed line. Returns `None` at end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for a form field, keeping `current` when the line is empty.
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    let prompt = format!("{} [{}]: ", label, current);
    Ok(read_line(input, output, &prompt)?.map(|value| {
        if value.is_empty() {
            current.to_string()
        } else {
            value
        }
    }))
}
