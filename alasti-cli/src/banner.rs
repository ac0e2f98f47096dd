//! Welcome banner

use anyhow::{anyhow, Context, Result};
use console::style;
use figlet_rs::FIGfont;

/// Pastel palette from the 256-color cube, cycled left to right
const PASTEL: [u8; 12] = [159, 153, 147, 141, 183, 219, 218, 217, 216, 222, 228, 193];

/// Render `title` in the standard FIGlet font
///
/// # Errors
///
/// Returns an error if the bundled font cannot be parsed or the title
/// contains characters the font cannot draw.
pub fn render(title: &str) -> Result<String> {
    let font = FIGfont::standard()
        .map_err(|err| anyhow!(err))
        .context("Failed to load FIGlet font")?;
    let figure = font
        .convert(title)
        .with_context(|| format!("Failed to render banner: {title}"))?;
    Ok(figure.to_string())
}

/// Color each line of `text` with a horizontal pastel gradient
#[must_use]
pub fn paint(text: &str) -> String {
    let width = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    text.lines()
        .map(|line| {
            line.chars()
                .enumerate()
                .map(|(column, ch)| {
                    if ch.is_whitespace() {
                        ch.to_string()
                    } else {
                        style(ch).color256(shade(column, width)).to_string()
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn shade(column: usize, width: usize) -> u8 {
    if width == 0 {
        return PASTEL[0];
    }
    PASTEL[(column * PASTEL.len() / width).min(PASTEL.len() - 1)]
}

/// Instructions shown under the banner
#[must_use]
pub fn welcome() -> String {
    format!(
        "
    {heading}
    I am a CLI tool for AlastiSolutions.

    If you press CTRL + C, I will be {exited}

    {warning}

    Let's start!
    ",
        heading = style("WHAT TO DO").blue().bright(),
        exited = style("exited").red().bright(),
        warning = style("Don't run this tool in a production environment.").on_red(),
    )
}

/// Print the banner for `title`, falling back to the plain title
pub fn show(title: &str) {
    match render(title) {
        Ok(figure) => println!("{}", paint(&figure)),
        Err(err) => {
            tracing::debug!(error = %err, "banner rendering failed");
            println!("{}", style(title).magenta().bold());
        }
    }
}
