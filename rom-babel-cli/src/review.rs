//! Interactive console reviewer for low-confidence matches.

use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_babel_lib::{ResolveError, ReviewDecision, ReviewRequest, Reviewer};

/// Prompts the operator on the terminal, one request at a time.
///
/// Accepted responses: a candidate number, `a` to accept the top candidate,
/// `m` for manual input, `s` or an empty line to skip the item.
pub(crate) struct ConsoleReviewer;

impl Reviewer for ConsoleReviewer {
    fn review(&mut self, request: &ReviewRequest<'_>) -> Result<ReviewDecision, ResolveError> {
        println!(
            "\n{} {} {}",
            "[LOW]".if_supports_color(Stdout, |t| t.yellow()),
            request.file_name.if_supports_color(Stdout, |t| t.bold()),
            format!("({} left to review)", request.remaining)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        for (i, candidate) in request.candidates.iter().enumerate() {
            println!(
                "  [{}] ({:>3}) {}  ->  {}",
                i + 1,
                candidate.score,
                candidate.alternate,
                candidate.canonical.if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        println!("Choices: number to accept, [a]ccept top, [m]anual input, [s]kip (default skip)");

        loop {
            let answer = read_prompt("> ")?;
            let answer = answer.trim();

            if answer.is_empty() || answer.eq_ignore_ascii_case("s")
                || answer.eq_ignore_ascii_case("skip")
            {
                return Ok(ReviewDecision::Skip);
            }
            if answer.eq_ignore_ascii_case("a") || answer.eq_ignore_ascii_case("y") {
                return Ok(ReviewDecision::AcceptBest);
            }
            if answer.eq_ignore_ascii_case("m") || answer.eq_ignore_ascii_case("manual") {
                println!("Enter canonical name (empty to skip):");
                let manual = read_prompt("name> ")?;
                let manual = manual.trim();
                return Ok(if manual.is_empty() {
                    ReviewDecision::Skip
                } else {
                    ReviewDecision::Override(manual.to_string())
                });
            }
            if let Ok(n) = answer.parse::<usize>() {
                if n >= 1 && n <= request.candidates.len() {
                    return Ok(ReviewDecision::AcceptCandidate(n - 1));
                }
            }

            println!("Unrecognized choice: {answer}");
        }
    }
}

/// Print a prompt and read one line. EOF means the operator closed the
/// session; that aborts the run.
fn read_prompt(prompt: &str) -> Result<String, ResolveError> {
    print!("{prompt}");
    std::io::stdout().flush().map_err(ResolveError::Io)?;

    let mut input = String::new();
    let read = std::io::stdin()
        .read_line(&mut input)
        .map_err(ResolveError::Io)?;
    if read == 0 {
        return Err(ResolveError::Aborted);
    }
    Ok(input)
}
